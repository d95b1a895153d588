//! The embellished return type of partial functions.
//!
//! A partial function `A -> B` that is undefined for some inputs is represented as a total
//! function `A -> Optional<B>`. [`Optional::Invalid`] marks the inputs it is undefined for.

use crate::errors::{AlgebraError, AlgebraResult};

/// Outcome of a partial function: either a valid value or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    /// The function is defined at this input and produced `T`.
    Valid(T),

    /// The function is undefined at this input.
    Invalid,
}

impl<T> Optional<T> {
    /// Wraps a computed value.
    pub const fn valid(value: T) -> Self {
        Optional::Valid(value)
    }

    /// The result of a partial function at an input it is undefined for.
    pub const fn invalid() -> Self {
        Optional::Invalid
    }

    pub const fn is_valid(&self) -> bool {
        matches!(self, Optional::Valid(_))
    }

    /// Borrows the carried value.
    ///
    /// Fails with [`AlgebraError::InvalidAccess`] on an invalid instance instead of handing back
    /// a default.
    pub fn value(&self) -> AlgebraResult<&T> {
        match self {
            Optional::Valid(value) => Ok(value),
            Optional::Invalid => Err(AlgebraError::InvalidAccess),
        }
    }

    /// Owning counterpart of [`Optional::value`].
    pub fn into_value(self) -> AlgebraResult<T> {
        match self {
            Optional::Valid(value) => Ok(value),
            Optional::Invalid => Err(AlgebraError::InvalidAccess),
        }
    }

    /// Functor map. Invalid stays invalid and `f` is not called.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
        match self {
            Optional::Valid(value) => Optional::Valid(f(value)),
            Optional::Invalid => Optional::Invalid,
        }
    }

    /// Feeds the value into the next partial function. This is the primitive
    /// [`crate::kleisli::compose`] is built from.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
        match self {
            Optional::Valid(value) => f(value),
            Optional::Invalid => Optional::Invalid,
        }
    }

    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Valid(value) => Optional::Valid(value),
            Optional::Invalid => Optional::Invalid,
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Valid(value),
            None => Optional::Invalid,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Valid(value) => Some(value),
            Optional::Invalid => None,
        }
    }
}
