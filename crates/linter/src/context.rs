//! Lint context for rule execution

use oxc_span::{SourceType, Span};

use crate::Diagnostic;

/// Per-file context passed to rules during linting
pub struct LintContext<'a> {
    /// Source code being linted
    source_text: &'a str,
    /// Source type (JS/TS/JSX etc)
    source_type: SourceType,
    /// Collected diagnostics
    diagnostics: Vec<Diagnostic>,
}

impl<'a> LintContext<'a> {
    pub fn new(source_text: &'a str, source_type: SourceType) -> Self {
        Self {
            source_text,
            source_type,
            diagnostics: Vec::new(),
        }
    }

    /// Get the source type
    pub fn source_type(&self) -> SourceType {
        self.source_type
    }

    /// Whether the file is written in a dialect that allows embedded tags
    pub fn is_jsx(&self) -> bool {
        self.source_type.is_jsx()
    }

    /// Report a diagnostic
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get a slice of source text for a span
    pub fn span_text(&self, span: Span) -> &'a str {
        &self.source_text[span.start as usize..span.end as usize]
    }

    /// Consume the context and return all diagnostics
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
