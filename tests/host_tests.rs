//! Host entry point tests
//!
//! These run the rule the way a linter host would: raw JSON rule arguments
//! in, diagnostics and fixed source out.

use jsx_required_attributes::{config_from_json, fix_source, lint_source, DiagnosticSeverity};

const RULE_ARGUMENTS: &str = r#"[
    true,
    ["data-id", {"tagNames": ["Link", "a", "button"], "attributeNames": ["onClick", "onTapTouch"]}]
]"#;

const TOOLBAR: &str = r#"import * as React from 'react';

export function Toolbar({ items, onSave }) {
    return (
        <nav className="toolbar">
            <Link to="/home"/>
            <button data-id="save" onClick={onSave}>Save</button>
            {items.map(item => (
                <span key={item.id} onTapTouch={item.open}>{item.label}</span>
            ))}
            <a href="/help" >Help</a>
        </nav>
    );
}
"#;

#[test]
fn test_reports_in_source_order() {
    let config = config_from_json(RULE_ARGUMENTS);
    let result = lint_source(TOOLBAR, "toolbar.tsx", &config).unwrap();

    let report = result
        .diagnostics
        .iter()
        .map(|d| format!("{}: {}", &TOOLBAR[d.start as usize..d.end as usize], d.message))
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(report, @r#"
    <Link to="/home"/>: Element Link must have data-id prop.
    <span key={item.id} onTapTouch={item.open}>: Element with prop onTapTouch must have data-id prop.
    <a href="/help" >: Element a must have data-id prop.
    "#);
    assert!(result
        .diagnostics
        .iter()
        .all(|d| d.severity == DiagnosticSeverity::Error && d.rule == "jsx-required-attributes"));
}

#[test]
fn test_fixes_whole_file() {
    let config = config_from_json(RULE_ARGUMENTS);
    let fixed = fix_source(TOOLBAR, "toolbar.tsx", &config).unwrap();

    assert!(fixed.contains(r#"<Link to="/home" data-id=""/>"#));
    assert!(fixed.contains(r#"<span key={item.id} onTapTouch={item.open} data-id="">"#));
    assert!(fixed.contains(r#"<a href="/help"  data-id="">Help</a>"#));
    assert!(fixed.contains(r#"<button data-id="save" onClick={onSave}>Save</button>"#));

    let again = lint_source(&fixed, "toolbar.tsx", &config).unwrap();
    assert!(again.diagnostics.is_empty());
}

#[test]
fn test_jsx_extension() {
    let config = config_from_json(RULE_ARGUMENTS);
    let result = lint_source(TOOLBAR, "toolbar.jsx", &config).unwrap();
    assert_eq!(result.error_count(), 3);
}

#[test]
fn test_rule_inactive_for_plain_typescript() {
    let config = config_from_json(RULE_ARGUMENTS);
    let source = "export const label: string = 'button';\n";
    let result = lint_source(source, "labels.ts", &config).unwrap();
    assert!(result.diagnostics.is_empty());
    assert_eq!(fix_source(source, "labels.ts", &config).unwrap(), source);
}

#[test]
fn test_malformed_arguments_disable_rule() {
    for arguments in ["", "{}", r#"[["data-id"]]"#, r#"[[1, {"tagNames": ["a"]}]]"#] {
        let config = config_from_json(arguments);
        let result = lint_source(TOOLBAR, "toolbar.tsx", &config).unwrap();
        assert!(result.diagnostics.is_empty(), "arguments {arguments:?} should be ignored");
    }
}
