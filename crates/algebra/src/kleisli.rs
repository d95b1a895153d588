//! The Kleisli category of [`Optional`]: objects are types, an arrow `A -> B` is a partial
//! function `Fn(A) -> Optional<B>`.

use crate::optional::Optional;

/// The identity arrow. Always valid, carries its argument unchanged.
pub const fn identity<A>(a: A) -> Optional<A> {
    Optional::valid(a)
}

/// Left-to-right composition of partial functions.
///
/// The composed arrow runs `f` and, only if that produced a valid value, feeds it to `g`. An
/// invalid result from `f` short-circuits: `g` is never invoked.
pub fn compose<'composed, A, B, C>(
    f: impl Fn(A) -> Optional<B> + 'composed,
    g: impl Fn(B) -> Optional<C> + 'composed,
) -> impl Fn(A) -> Optional<C> + 'composed {
    move |a| f(a).and_then(&g)
}

pub mod laws {
    //! Law checkers for [`super::compose`] and [`super::identity`], usable with any arrows.
    use std::fmt::Debug;

    use proptest::prelude::TestCaseError;

    use super::{compose, identity};
    use crate::optional::Optional;

    /// Checks `compose(identity, f) == f == compose(f, identity)` at `a`.
    pub fn identity_eq<A, B>(
        f: impl Fn(A) -> Optional<B> + Copy,
        a: A,
    ) -> Result<(), TestCaseError>
    where
        A: Debug + Clone,
        B: Debug + PartialEq,
    {
        let direct = f(a.clone());
        let left = compose(identity::<A>, f)(a.clone());
        let right = compose(f, identity::<B>)(a.clone());
        if left != direct {
            return Err(TestCaseError::fail(format!(
                "left identity broken at {a:?}: {left:?} != {direct:?}"
            )));
        }
        if right != direct {
            return Err(TestCaseError::fail(format!(
                "right identity broken at {a:?}: {right:?} != {direct:?}"
            )));
        }
        Ok(())
    }

    /// Checks `compose(compose(f, g), h) == compose(f, compose(g, h))` at `a`.
    pub fn associative_eq<A, B, C, D>(
        f: impl Fn(A) -> Optional<B> + Copy,
        g: impl Fn(B) -> Optional<C> + Copy,
        h: impl Fn(C) -> Optional<D> + Copy,
        a: A,
    ) -> Result<(), TestCaseError>
    where
        A: Debug + Clone,
        D: Debug + PartialEq,
    {
        let lhs = compose(compose(f, g), h)(a.clone());
        let rhs = compose(f, compose(g, h))(a.clone());
        if lhs != rhs {
            return Err(TestCaseError::fail(format!(
                "kleisli composition is not associative at {a:?}: {lhs:?} != {rhs:?}"
            )));
        }
        Ok(())
    }
}
