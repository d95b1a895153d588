//! Errors raised by the memoizing wrappers.

use thiserror::Error;

/// Failures of a memoized call. None of them are cached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoError {
    /// The argument cannot be turned into a cache key, e.g. a NaN that is not equal to itself.
    #[error("argument of type {type_name} cannot be used as a cache key: {reason}")]
    TypeKind {
        /// Name of the rejected argument type.
        type_name: &'static str,

        /// Why the value has no usable key.
        reason: &'static str,
    },
}

impl MemoError {
    pub(crate) fn type_kind<T: ?Sized>(reason: &'static str) -> Self {
        MemoError::TypeKind {
            type_name: std::any::type_name::<T>(),
            reason,
        }
    }
}

pub type MemoResult<T> = Result<T, MemoError>;
