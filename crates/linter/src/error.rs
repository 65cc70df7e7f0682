//! Errors raised while walking the tree

use thiserror::Error;

/// A node of the wrong shape reached a predicate or extractor.
///
/// This never describes the linted code; it means the caller dispatched
/// on the wrong node kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LintError {
    #[error("expected a JSX element or opening element, found {found}")]
    InvalidNodeKind { found: String },
}
