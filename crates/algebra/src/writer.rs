//! The writer embellishment: functions that return a value together with a log.
//!
//! Instead of appending to a global log, each function returns the log fragment it produced and
//! [`compose`] concatenates the fragments. The log type only has to be a [`Monoid`].

use crate::monoid::Monoid;

/// A value paired with the log accumulated while computing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Writer<A, W = String> {
    value: A,
    log: W,
}

impl<A, W> Writer<A, W> {
    pub const fn new(value: A, log: W) -> Self {
        Writer { value, log }
    }

    pub const fn value(&self) -> &A {
        &self.value
    }

    pub const fn log(&self) -> &W {
        &self.log
    }

    pub fn into_parts(self) -> (A, W) {
        (self.value, self.log)
    }

    /// Transforms the value and leaves the log untouched.
    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> Writer<B, W> {
        Writer::new(f(self.value), self.log)
    }
}

/// The identity arrow: returns its argument with an empty log.
pub fn identity<A, W: Monoid>(a: A) -> Writer<A, W> {
    Writer::new(a, W::empty())
}

/// Left-to-right composition of writer arrows. The log of `f` comes before the log of `g`.
pub fn compose<'composed, A, B, C, W: Monoid>(
    f: impl Fn(A) -> Writer<B, W> + 'composed,
    g: impl Fn(B) -> Writer<C, W> + 'composed,
) -> impl Fn(A) -> Writer<C, W> + 'composed {
    move |a| {
        let (b, first) = f(a).into_parts();
        let (c, second) = g(b).into_parts();
        Writer::new(c, first.merge(second))
    }
}
