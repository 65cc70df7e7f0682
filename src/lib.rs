//! jsx-required-attributes
//!
//! Host entry points for the `jsx-required-attributes` lint rule: parse a
//! file with OXC, check its JSX opening tags for required marker attributes
//! and optionally apply the suggested fixes.
//!
//! ## Usage
//!
//! ```rust
//! use jsx_required_attributes::{fix_source, RequiredAttributeOptions, RequiredAttributesConfig};
//!
//! let config = RequiredAttributesConfig::new().require(
//!     "data-id",
//!     RequiredAttributeOptions::new().with_tag_names(["button"]),
//! );
//! let fixed = fix_source("<button>Hi</button>", "input.jsx", &config).unwrap();
//! assert_eq!(fixed, r#"<button data-id="">Hi</button>"#);
//! ```

pub use jsx_attributes_linter::{
    Diagnostic, DiagnosticSeverity, Fix, JsxRequiredAttributes, LintError, LintResult,
    RequiredAttributeOptions, RequiredAttributesConfig, RuleMeta,
};

#[cfg(feature = "napi")]
use napi_derive::napi;

use jsx_attributes_linter::{apply_fixes, lint, RulesConfig};
use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;

/// Lint options exposed to JavaScript
#[cfg(feature = "napi")]
#[napi(object)]
#[derive(Default)]
pub struct JsLintOptions {
    /// Source filename, used to pick the dialect
    /// @default "input.tsx"
    pub filename: Option<String>,

    /// Rule arguments as JSON text, e.g. `[["data-id", {"tagNames": ["a"]}]]`
    /// @default "[]"
    pub rule_arguments: Option<String>,
}

/// A text insertion or replacement suggested for a violation
#[cfg(feature = "napi")]
#[napi(object)]
pub struct JsFix {
    pub start: u32,
    pub end: u32,
    pub text: String,
}

/// A reported violation
#[cfg(feature = "napi")]
#[napi(object)]
pub struct JsViolation {
    pub rule: String,
    pub message: String,
    pub start: u32,
    pub end: u32,
    pub fix: Option<JsFix>,
}

#[cfg(feature = "napi")]
fn resolve_options(options: Option<JsLintOptions>) -> (String, RequiredAttributesConfig) {
    let options = options.unwrap_or_default();
    let config = options
        .rule_arguments
        .as_deref()
        .map(config_from_json)
        .unwrap_or_default();
    (
        options.filename.unwrap_or_else(|| "input.tsx".to_string()),
        config,
    )
}

/// Lint JSX source and return every violation
#[cfg(feature = "napi")]
#[napi]
pub fn lint_jsx(source: String, options: Option<JsLintOptions>) -> napi::Result<Vec<JsViolation>> {
    let (filename, config) = resolve_options(options);
    let result = lint_source(&source, &filename, &config)
        .map_err(|err| napi::Error::from_reason(err.to_string()))?;

    Ok(result
        .diagnostics
        .into_iter()
        .map(|diagnostic| JsViolation {
            fix: diagnostic.fixes.first().map(|fix| JsFix {
                start: fix.start,
                end: fix.end,
                text: fix.replacement.clone(),
            }),
            rule: diagnostic.rule,
            message: diagnostic.message,
            start: diagnostic.start,
            end: diagnostic.end,
        })
        .collect())
}

/// Lint JSX source and return it with all fixes applied
#[cfg(feature = "napi")]
#[napi]
pub fn fix_jsx(source: String, options: Option<JsLintOptions>) -> napi::Result<String> {
    let (filename, config) = resolve_options(options);
    fix_source(&source, &filename, &config).map_err(|err| napi::Error::from_reason(err.to_string()))
}

/// Build the rule configuration from raw JSON rule arguments.
///
/// Text that is not valid JSON yields an empty configuration.
pub fn config_from_json(text: &str) -> RequiredAttributesConfig {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(value) => RequiredAttributesConfig::from_value(&value),
        Err(err) => {
            log::debug!(
                "{}: ignoring unparsable rule arguments: {}",
                JsxRequiredAttributes::NAME,
                err
            );
            RequiredAttributesConfig::default()
        }
    }
}

/// Parse `source` and run the rule over it.
///
/// The dialect comes from the extension of `filename` and defaults to TSX.
/// JavaScript files (`.js`, `.mjs`, `.cjs`) may contain JSX; `.ts` files may not.
pub fn lint_source(
    source: &str,
    filename: &str,
    config: &RequiredAttributesConfig,
) -> Result<LintResult, LintError> {
    let allocator = Allocator::default();
    let source_type = source_type_for(filename);

    let ret = Parser::new(&allocator, source, source_type).parse();
    if !ret.errors.is_empty() {
        log::debug!("{}: {} parse errors", filename, ret.errors.len());
    }

    lint(source, source_type, &ret.program, RulesConfig::from(config.clone()))
}

fn source_type_for(filename: &str) -> SourceType {
    let source_type = SourceType::from_path(filename).unwrap_or(SourceType::tsx());
    if source_type.is_javascript() {
        source_type.with_jsx(true)
    } else {
        source_type
    }
}

/// Lint `source` and apply every suggested fix
pub fn fix_source(
    source: &str,
    filename: &str,
    config: &RequiredAttributesConfig,
) -> Result<String, LintError> {
    let result = lint_source(source, filename, config)?;
    Ok(apply_fixes(source, result.fixes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RequiredAttributesConfig {
        config_from_json(r#"[["data-id", {"tagNames": ["button"], "attributeNames": ["onClick"]}]]"#)
    }

    #[test]
    fn test_lint_tsx_by_default() {
        let result = lint_source("<button>Hi</button>", "component", &config()).unwrap();
        assert_eq!(result.diagnostics.len(), 1);
    }

    #[test]
    fn test_lint_plain_ts_file() {
        let result = lint_source("const x = 1 as number;", "index.ts", &config()).unwrap();
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_lint_jsx_in_javascript_files() {
        for filename in ["button.js", "button.mjs", "button.cjs"] {
            let result = lint_source("<button>Hi</button>", filename, &config()).unwrap();
            assert_eq!(result.diagnostics.len(), 1, "{filename} should be linted");
        }
    }

    #[test]
    fn test_fix_source() {
        let fixed = fix_source("<div onClick={go} />", "input.jsx", &config()).unwrap();
        assert_eq!(fixed, r#"<div onClick={go} data-id="" />"#);
    }

    #[test]
    fn test_invalid_json_config() {
        assert!(config_from_json("[[\"data-id\"").is_empty());
        assert!(config_from_json("true").is_empty());
    }
}
