//! Comparison failure type.

use pdf_object::{ObjectKind, ResolveError};
use thiserror::Error;

/// Inputs that could not be compared at all.
///
/// Definite inequality is reported as `Ok(false)`, never as an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EqualError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error("unsupported object kind for comparison: {kind}")]
    UnsupportedVariant { kind: ObjectKind },
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: ObjectKind,
        found: ObjectKind,
    },
    #[error("stream payload not loaded")]
    PayloadNotLoaded,
    #[error("comparison exceeds maximum nesting depth of {limit}")]
    DepthLimitExceeded { limit: usize },
}
