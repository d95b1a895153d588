/// A [`Semigroup`] is a type closed under an associative binary operation, [`Semigroup::merge`].
/// Lawful instances satisfy, for all `a`, `b`, `c`:
///
/// a.merge(b).merge(c) == a.merge(b.merge(c))
///
/// In this crate semigroups are the "log" half of the [`crate::writer::Writer`] embellishment: two
/// logs produced by consecutive steps are merged in the order the steps ran.
pub trait Semigroup {
    /// The associative operation. `self` is the earlier value, `other` the later one.
    fn merge(self, other: Self) -> Self;
}

/// Folds a non-empty iterator with [`Semigroup::merge`]. Returns `None` for an empty iterator
/// since a bare semigroup has no value to start from.
pub fn sconcat<T: Semigroup>(xs: impl IntoIterator<Item = T>) -> Option<T> {
    xs.into_iter().reduce(<T as Semigroup>::merge)
}

impl Semigroup for () {
    fn merge(self, _: Self) -> Self {}
}

impl Semigroup for String {
    fn merge(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn merge(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T: Semigroup> Semigroup for Option<T> {
    fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.merge(b)),
            (a, None) => a,
            (None, b) => b,
        }
    }
}

pub mod laws {
    use std::fmt::Debug;

    use proptest::prelude::TestCaseError;

    use super::Semigroup;

    pub fn merge_associative_clone_eq<T: Debug + Semigroup + Clone + Eq>(
        a: T,
        b: T,
        c: T,
    ) -> Result<(), TestCaseError> {
        let lhs = a.clone().merge(b.clone()).merge(c.clone());
        let rhs = a.clone().merge(b.clone().merge(c.clone()));
        if lhs != rhs {
            return Err(TestCaseError::fail(format!(
                "{}::merge is not associative: {a:?}, {b:?}, {c:?}",
                std::any::type_name::<T>()
            )));
        }
        Ok(())
    }
}
