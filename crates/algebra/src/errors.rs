//! Errors for the algebraic data types in this crate.

use thiserror::Error;

/// Contract violations raised by the embellished types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// The carried value of an invalid [`crate::optional::Optional`] was requested.
    #[error("attempted to access the value of an invalid optional")]
    InvalidAccess,
}

/// Result alias used throughout the crate.
pub type AlgebraResult<T> = Result<T, AlgebraError>;
