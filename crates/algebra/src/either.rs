//! The coproduct of two types.

/// Either an `L` or an `R`, tagged by which injection produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    /// The left injection.
    pub const fn make_left(value: L) -> Self {
        Either::Left(value)
    }

    /// The right injection.
    pub const fn make_right(value: R) -> Self {
        Either::Right(value)
    }

    pub const fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub const fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Eliminates the coproduct by case analysis.
    pub fn either<C>(self, f: impl FnOnce(L) -> C, g: impl FnOnce(R) -> C) -> C {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => g(r),
        }
    }

    pub fn map_left<M>(self, f: impl FnOnce(L) -> M) -> Either<M, R> {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    pub fn map_right<S>(self, f: impl FnOnce(R) -> S) -> Either<L, S> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }
}

/// Builds the unique morphism `m : Either<L, R> -> C` that factorizes the injections `i` and `j`
/// of any other candidate coproduct `C`, i.e. `m(Left(l)) == i(l)` and `m(Right(r)) == j(r)`.
pub fn factorizer<'f, L, R, C>(
    i: impl Fn(L) -> C + 'f,
    j: impl Fn(R) -> C + 'f,
) -> impl Fn(Either<L, R>) -> C + 'f {
    move |e| e.either(&i, &j)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{factorizer, Either};

    #[test]
    fn injections_are_tagged() {
        let l: Either<i32, &str> = Either::make_left(5);
        assert!(l.is_left());
        assert_eq!(l.left(), Some(5));

        let r: Either<i32, &str> = Either::make_right("1729");
        assert!(r.is_right());
        assert_eq!(r.left(), None);
        assert_eq!(r.right(), Some("1729"));
    }

    #[test]
    fn maps_only_touch_their_side() {
        let l: Either<i32, i32> = Either::Left(1);
        assert_eq!(l.map_right(|r| r + 100), Either::Left(1));
        assert_eq!(l.map_left(|x| x + 100), Either::Left(101));
    }

    proptest! {
        #[test]
        fn factorizer_commutes_with_injections(n in any::<i64>(), b in any::<bool>()) {
            let i = |n: i64| n.to_string();
            let j = |b: bool| if b { "yes".to_string() } else { "no".to_string() };
            let m = factorizer(i, j);
            prop_assert_eq!(m(Either::Left(n)), i(n));
            prop_assert_eq!(m(Either::Right(b)), j(b));
        }
    }
}
