//! `Either<i64, bool>` against the candidate coproduct `i64` with injections [`i`] and [`j`].
//!
//! `Either` is the better coproduct: the factorizer [`m`] maps it onto `i64` so that
//! `m ∘ Left == i` and `m ∘ Right == j`, while no such map exists in the other direction that
//! commutes with both injections.

use algebra::either::{self, Either};

/// The left injection into `i64`.
pub const fn i(n: i64) -> i64 {
    n
}

/// The right injection into `i64`.
pub const fn j(b: bool) -> i64 {
    if b {
        0
    } else {
        1
    }
}

/// The factorizer of [`i`] and [`j`] through `Either`.
pub fn m(e: Either<i64, bool>) -> i64 {
    either::factorizer(i, j)(e)
}

#[cfg(test)]
mod tests {
    use algebra::either::Either;
    use proptest::prelude::*;

    use super::{i, j, m};

    #[test]
    fn factorizes_left() {
        assert_eq!(m(Either::make_left(5)), 5);
    }

    proptest! {
        #[test]
        fn m_commutes_with_both_injections(n in any::<i64>(), b in any::<bool>()) {
            prop_assert_eq!(m(Either::Left(n)), i(n));
            prop_assert_eq!(m(Either::Right(b)), j(b));
        }
    }
}
