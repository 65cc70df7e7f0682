//! Single-pass visitor that runs the enabled rules over a program
//!
//! `LintRunner` hooks `enter_node`, so every node reaches it in document
//! order. Paired and self-closing JSX elements are checked as opening tags;
//! everything else is walked through.

use oxc_ast::ast::Program;
use oxc_ast::AstKind;
use oxc_ast_visit::Visit;
use oxc_span::SourceType;

use crate::context::LintContext;
use crate::diagnostic::{Diagnostic, DiagnosticSeverity, Fix};
use crate::error::LintError;
use crate::rules::{JsxRequiredAttributes, RequiredAttributesConfig};
use crate::utils::{is_paired_element, is_self_closing_element};
use crate::RuleMeta;

/// Configuration for which rules are enabled
#[derive(Debug, Clone, Default)]
pub struct RulesConfig {
    pub jsx_required_attributes: Option<JsxRequiredAttributes>,
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_jsx_required_attributes(mut self, rule: JsxRequiredAttributes) -> Self {
        self.jsx_required_attributes = Some(rule);
        self
    }
}

impl From<RequiredAttributesConfig> for RulesConfig {
    fn from(config: RequiredAttributesConfig) -> Self {
        Self::new().with_jsx_required_attributes(JsxRequiredAttributes::with_config(config))
    }
}

/// Visitor that runs all enabled rules during a single AST traversal
pub struct LintRunner<'a> {
    ctx: LintContext<'a>,
    config: RulesConfig,
    error: Option<LintError>,
}

impl<'a> LintRunner<'a> {
    pub fn new(ctx: LintContext<'a>, config: RulesConfig) -> Self {
        Self {
            ctx,
            config,
            error: None,
        }
    }

    /// Run all enabled rules on the given program.
    ///
    /// Sources that cannot contain JSX produce no diagnostics.
    pub fn run(mut self, program: &Program<'a>) -> Result<LintResult, LintError> {
        if !self.ctx.is_jsx() {
            log::debug!("skipping {:?} source: JSX is not enabled", self.ctx.source_type());
            return Ok(LintResult::default());
        }

        self.visit_program(program);

        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(LintResult {
            diagnostics: self.ctx.into_diagnostics(),
        })
    }

    /// Check an opening tag with all applicable rules
    fn check_element(&mut self, kind: &AstKind<'a>) -> Result<(), LintError> {
        if let Some(rule) = &self.config.jsx_required_attributes {
            let diagnostics = rule.check(kind, &self.ctx)?;
            for diagnostic in diagnostics {
                self.ctx.report(diagnostic);
            }
        }
        Ok(())
    }
}

impl<'a> Visit<'a> for LintRunner<'a> {
    fn enter_node(&mut self, kind: AstKind<'a>) {
        // the first tree-shape error ends the run
        if self.error.is_some() {
            return;
        }
        if is_paired_element(&kind) || is_self_closing_element(&kind) {
            if let Err(err) = self.check_element(&kind) {
                log::debug!("{}: aborting walk: {}", JsxRequiredAttributes::NAME, err);
                self.error = Some(err);
            }
        }
    }
}

/// Result of running the linter
#[derive(Debug, Default)]
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, DiagnosticSeverity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        self.warning_count() > 0
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, DiagnosticSeverity::Error))
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, DiagnosticSeverity::Warning))
            .count()
    }

    /// All suggested fixes, in report order
    pub fn fixes(&self) -> impl Iterator<Item = &Fix> {
        self.diagnostics.iter().flat_map(|d| d.fixes.iter())
    }
}

/// Lint a program with the given rule configuration
pub fn lint<'a>(
    source_text: &'a str,
    source_type: SourceType,
    program: &Program<'a>,
    config: RulesConfig,
) -> Result<LintResult, LintError> {
    let ctx = LintContext::new(source_text, source_type);
    LintRunner::new(ctx, config).run(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RequiredAttributeOptions;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;

    fn config() -> RulesConfig {
        RequiredAttributesConfig::new()
            .require(
                "data-id",
                RequiredAttributeOptions::new()
                    .with_tag_names(["Link", "a", "button"])
                    .with_attribute_names(["onClick", "onTapTouch"]),
            )
            .into()
    }

    fn parse_and_lint_as(source: &str, source_type: SourceType, config: RulesConfig) -> LintResult {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, source_type).parse();
        lint(source, source_type, &ret.program, config).unwrap()
    }

    fn parse_and_lint(source: &str) -> LintResult {
        parse_and_lint_as(source, SourceType::jsx(), config())
    }

    #[test]
    fn test_lint_clean_code() {
        let result = parse_and_lint(r#"<div class="foo" />"#);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_lint_nested_elements_in_source_order() {
        let source = r#"<a href="/"><span onClick={go} /><button>x</button></a>"#;
        let result = parse_and_lint(source);
        let messages: Vec<_> = result.diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Element a must have data-id prop.",
                "Element with prop onClick must have data-id prop.",
                "Element button must have data-id prop.",
            ]
        );
        let starts: Vec<_> = result.diagnostics.iter().map(|d| d.start).collect();
        assert_eq!(
            starts,
            vec![0, source.find("<span").unwrap() as u32, source.find("<button").unwrap() as u32]
        );
    }

    #[test]
    fn test_lint_reports_opening_tag_span() {
        let source = r#"<button>Hello</button>"#;
        let result = parse_and_lint(source);
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].span().source_text(source), "<button>");
    }

    #[test]
    fn test_lint_with_disabled_rules() {
        let result = parse_and_lint_as("<button />", SourceType::jsx(), RulesConfig::new());
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_lint_skips_non_jsx_source() {
        let result = parse_and_lint_as("const a = 1;", SourceType::ts(), config());
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_result_counts() {
        let result = parse_and_lint(r#"<Link onClick={go} />"#);
        assert!(result.has_errors());
        assert_eq!(result.error_count(), 2);
        assert_eq!(result.warning_count(), 0);
        assert_eq!(result.fixes().count(), 2);
    }

    #[test]
    fn test_errors_are_not_warnings() {
        let result = parse_and_lint(r#"<a />"#);
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.warning_count(), 0);
        assert!(!result.has_warnings());
    }

    #[test]
    fn test_result_counts_with_warning_severity() {
        let rule = JsxRequiredAttributes::with_config(
            RequiredAttributesConfig::new()
                .require("data-id", RequiredAttributeOptions::new().with_tag_names(["a"])),
        )
        .with_severity(DiagnosticSeverity::Warning);
        let config = RulesConfig::new().with_jsx_required_attributes(rule);
        let result = parse_and_lint_as(r#"<a />"#, SourceType::jsx(), config);
        assert!(!result.has_errors());
        assert!(result.has_warnings());
        assert_eq!(result.warning_count(), 1);
    }
}
