//! Category-theory building blocks: function composition, the Kleisli categories of partial and
//! logging functions, coproducts, isomorphisms and the reader functor.

pub mod category;
pub mod either;
pub mod errors;
pub mod iso;
pub mod kleisli;
pub mod monoid;
pub mod optional;
pub mod reader;
pub mod semigroup;
pub mod writer;

pub use errors::{AlgebraError, AlgebraResult};
pub use optional::Optional;
