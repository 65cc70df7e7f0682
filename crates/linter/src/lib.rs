//! Required-attribute lint rule for JSX
//!
//! This crate checks JSX opening tags for a configured marker attribute
//! (for example `data-id` on every `<button>` or on anything with an
//! `onClick` handler) and suggests a fix that inserts it.
//! Rules can be used:
//! 1. Standalone with oxc AST for custom tooling
//! 2. Through the host entry points of the `jsx-required-attributes` crate

pub mod fixer;
pub mod rules;
pub mod utils;
pub mod visitor;
mod context;
mod diagnostic;
mod error;

pub use context::LintContext;
pub use diagnostic::{Diagnostic, DiagnosticSeverity, Fix};
pub use error::LintError;
pub use fixer::apply_fixes;
pub use rules::*;
pub use visitor::{lint, LintResult, LintRunner, RulesConfig};

/// Rule category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Rules that detect code that is likely to be incorrect
    Correctness,
}

/// Rule metadata
pub trait RuleMeta {
    const NAME: &'static str;
    const CATEGORY: RuleCategory;
    /// One-line summary of what the rule enforces
    const DESCRIPTION: &'static str;
    /// Why a project would enable the rule
    const RATIONALE: &'static str;
}
