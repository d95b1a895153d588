//! Isomorphisms: pairs of arrows that undo each other.
use std::{fmt, rc::Rc};

use crate::{category, either::Either, optional::Optional};

type Arrow<A, B> = Rc<dyn Fn(A) -> B>;

/// An isomorphism between `A` and `B`. The two directions are expected to be mutually inverse,
/// which the [`laws`] module can check for concrete values.
pub struct Iso<A, B> {
    forward: Arrow<A, B>,
    backward: Arrow<B, A>,
}

impl<A, B> Clone for Iso<A, B> {
    fn clone(&self) -> Self {
        Iso {
            forward: Rc::clone(&self.forward),
            backward: Rc::clone(&self.backward),
        }
    }
}

impl<A, B> fmt::Debug for Iso<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iso").finish_non_exhaustive()
    }
}

impl<A: 'static, B: 'static> Iso<A, B> {
    /// Builds an isomorphism from its two directions.
    pub fn new(forward: impl Fn(A) -> B + 'static, backward: impl Fn(B) -> A + 'static) -> Self {
        Iso {
            forward: Rc::new(forward),
            backward: Rc::new(backward),
        }
    }

    pub fn forward(&self, a: A) -> B {
        (self.forward)(a)
    }

    pub fn backward(&self, b: B) -> A {
        (self.backward)(b)
    }

    /// Swaps the two directions.
    pub fn invert(self) -> Iso<B, A> {
        Iso {
            forward: self.backward,
            backward: self.forward,
        }
    }

    /// Chains two isomorphisms `A ≅ B` and `B ≅ C` into `A ≅ C`.
    pub fn comp<C: 'static>(&self, other: &Iso<B, C>) -> Iso<A, C> {
        let forward_ab = Rc::clone(&self.forward);
        let forward_bc = Rc::clone(&other.forward);
        let backward_cb = Rc::clone(&other.backward);
        let backward_ba = Rc::clone(&self.backward);

        Iso {
            forward: Rc::new(category::comp(
                move |a: A| forward_ab(a),
                move |b: B| forward_bc(b),
            )),
            backward: Rc::new(category::comp(
                move |c: C| backward_cb(c),
                move |b: B| backward_ba(b),
            )),
        }
    }
}

/// `Optional<A>` and `Either<(), A>` carry the same information: the unit on the left stands
/// for the missing value.
pub fn maybe_either<A: 'static>() -> Iso<Optional<A>, Either<(), A>> {
    Iso::new(
        |o: Optional<A>| match o {
            Optional::Valid(a) => Either::Right(a),
            Optional::Invalid => Either::Left(()),
        },
        |e: Either<(), A>| e.either(|()| Optional::invalid(), Optional::valid),
    )
}

pub mod laws {
    use std::fmt::Debug;

    use proptest::prelude::TestCaseError;

    use super::Iso;

    /// Checks `backward(forward(a)) == a`.
    pub fn forward_round_trip<A: Debug + Clone + PartialEq + 'static, B: 'static>(
        iso: &Iso<A, B>,
        a: A,
    ) -> Result<(), TestCaseError> {
        let back = iso.backward(iso.forward(a.clone()));
        if back != a {
            return Err(TestCaseError::fail(format!(
                "round trip through the isomorphism changed {a:?} into {back:?}"
            )));
        }
        Ok(())
    }

    /// Checks `forward(backward(b)) == b`.
    pub fn backward_round_trip<A: 'static, B: Debug + Clone + PartialEq + 'static>(
        iso: &Iso<A, B>,
        b: B,
    ) -> Result<(), TestCaseError> {
        forward_round_trip(&iso.clone().invert(), b)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{maybe_either, Iso};
    use crate::{either::Either, optional::Optional};

    fn arb_optional() -> impl Strategy<Value = Optional<i32>> {
        proptest::option::of(any::<i32>()).prop_map(Optional::from)
    }

    fn arb_either() -> impl Strategy<Value = Either<(), i32>> {
        prop_oneof![
            Just(Either::<(), i32>::Left(())),
            any::<i32>().prop_map(Either::<(), i32>::Right),
        ]
    }

    #[test]
    fn maybe_either_maps_invalid_to_unit() {
        let iso = maybe_either::<u8>();
        assert_eq!(iso.forward(Optional::invalid()), Either::Left(()));
        assert_eq!(iso.forward(Optional::valid(3)), Either::Right(3));
        assert_eq!(iso.backward(Either::Left(())), Optional::invalid());
    }

    #[test]
    fn debug_hides_the_closures() {
        let iso = maybe_either::<u8>();
        assert_eq!(format!("{iso:?}"), "Iso { .. }");
        assert_eq!(format!("{:?}", iso.invert()), "Iso { .. }");
    }

    #[test]
    fn comp_chains_both_directions() {
        let negate = Iso::new(|x: i32| x.wrapping_neg(), |x: i32| x.wrapping_neg());
        let shift = Iso::new(|x: i32| x.wrapping_add(7), |x: i32| x.wrapping_sub(7));
        let both = negate.comp(&shift);
        assert_eq!(both.forward(1), 6);
        assert_eq!(both.backward(6), 1);
    }

    proptest! {
        #[test]
        fn maybe_either_is_an_isomorphism(o in arb_optional(), e in arb_either()) {
            let iso = maybe_either::<i32>();
            super::laws::forward_round_trip(&iso, o)?;
            super::laws::backward_round_trip(&iso, e)?;
        }
    }
}
