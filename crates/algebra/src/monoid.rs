use crate::semigroup::Semigroup;

/// A [`Monoid`] is a [`Semigroup`] with an identity element. For all `a`:
///
/// T::empty().merge(a) == a.merge(T::empty()) == a
///
/// [`Monoid::empty`] is the log carried by [`crate::writer::identity`], which is what makes that
/// function the identity arrow of the writer Kleisli category.
pub trait Monoid: Semigroup {
    fn empty() -> Self;
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

/// Folds an iterator of monoidal values. An empty iterator yields [`Monoid::empty`].
pub fn concat<T: Monoid>(xs: impl IntoIterator<Item = T>) -> T {
    xs.into_iter().fold(T::empty(), <T as Semigroup>::merge)
}

/// Maps every element into a monoid and folds the results with [`concat`].
pub fn fold_map<T: Monoid, U, Iter: IntoIterator<Item = U>, F: FnMut(U) -> T>(f: F, xs: Iter) -> T {
    concat(xs.into_iter().map(f))
}

pub mod laws {
    use std::fmt::Debug;

    use proptest::prelude::TestCaseError;

    use super::Monoid;

    pub fn empty_is_identity_clone_eq<T: Debug + Monoid + Clone + Eq>(
        a: T,
    ) -> Result<(), TestCaseError> {
        let left = T::empty().merge(a.clone());
        let right = a.clone().merge(T::empty());
        if left != a || right != a {
            return Err(TestCaseError::fail(format!(
                "{}::empty is not an identity for {a:?}",
                std::any::type_name::<T>()
            )));
        }
        Ok(())
    }
}
