//! The category of Rust functions: objects are types, morphisms are closures, composition is
//! function composition and the identity morphism is [`iden`].

/// The identity morphism.
pub const fn iden<A>(a: A) -> A {
    a
}

/// Right-to-left composition, i.e. `f ∘ g`. The returned closure applies `g` first.
///
/// compose(f, g)(x) == f(g(x))
pub fn compose<'composed, A, B, C>(
    f: impl Fn(B) -> C + 'composed,
    g: impl Fn(A) -> B + 'composed,
) -> impl Fn(A) -> C + 'composed {
    move |a| f(g(a))
}

/// Left-to-right composition. The returned closure applies `f` first.
///
/// comp(f, g)(x) == g(f(x))
pub fn comp<'composed, A, B, C>(
    f: impl Fn(A) -> B + 'composed,
    g: impl Fn(B) -> C + 'composed,
) -> impl Fn(A) -> C + 'composed {
    move |a| g(f(a))
}

/// Left-to-right composition for closures that only implement [`FnMut`].
pub fn comp_mut<A, B, C>(
    mut f: impl FnMut(A) -> B,
    mut g: impl FnMut(B) -> C,
) -> impl FnMut(A) -> C {
    move |a| g(f(a))
}

/// Lifts an `Fn` that takes a borrowed argument into one that consumes that argument, so that
/// analyzers like `str::len` can take part in [`comp`] chains over owned values.
pub fn moved<A, B>(f: impl Fn(&A) -> B) -> impl Fn(A) -> B {
    move |a| f(&a)
}

pub mod laws {
    //! Reusable law checkers for function composition.
    use std::fmt::Debug;

    use proptest::prelude::TestCaseError;

    /// Checks `iden ∘ f == f == f ∘ iden` at the point `a`.
    pub fn identity_eq<A, B>(f: impl Fn(A) -> B + Copy, a: A) -> Result<(), TestCaseError>
    where
        A: Debug + Clone,
        B: Debug + PartialEq,
    {
        let direct = f(a.clone());
        let left = super::compose(super::iden::<B>, f)(a.clone());
        let right = super::compose(f, super::iden::<A>)(a.clone());
        if left != direct || right != direct {
            return Err(TestCaseError::fail(format!(
                "identity law broken at {a:?}: iden∘f = {left:?}, f = {direct:?}, f∘iden = {right:?}"
            )));
        }
        Ok(())
    }

    /// Checks `(h ∘ g) ∘ f == h ∘ (g ∘ f)` at the point `a`.
    pub fn associative_eq<A, B, C, D>(
        f: impl Fn(A) -> B + Copy,
        g: impl Fn(B) -> C + Copy,
        h: impl Fn(C) -> D + Copy,
        a: A,
    ) -> Result<(), TestCaseError>
    where
        A: Debug + Clone,
        D: Debug + PartialEq,
    {
        let lhs = super::comp(super::comp(f, g), h)(a.clone());
        let rhs = super::comp(f, super::comp(g, h))(a.clone());
        if lhs != rhs {
            return Err(TestCaseError::fail(format!(
                "composition is not associative at {a:?}: {lhs:?} != {rhs:?}"
            )));
        }
        Ok(())
    }
}
