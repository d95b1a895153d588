//! The reader functor: a computation that needs an environment `R` to produce an `A`.
//!
//! For a fixed `R`, `A -> Reader<R, A>` is a functor whose [`Reader::map`] post-composes a
//! function with the wrapped one:
//!
//! - Identity: `reader.map(|x| x).run(r) == reader.run(r)`
//! - Composition: `reader.map(f).map(g).run(r) == reader.map(|x| g(f(x))).run(r)`

use std::rc::Rc;

use crate::category;

/// Wraps a function `R -> A`.
pub struct Reader<R, A> {
    run: Rc<dyn Fn(R) -> A>,
}

impl<R, A> Clone for Reader<R, A> {
    fn clone(&self) -> Self {
        Reader {
            run: Rc::clone(&self.run),
        }
    }
}

impl<R, A> std::fmt::Debug for Reader<R, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reader").finish_non_exhaustive()
    }
}

impl<R: 'static, A: 'static> Reader<R, A> {
    pub fn new(run: impl Fn(R) -> A + 'static) -> Self {
        Reader { run: Rc::new(run) }
    }

    /// Supplies the environment and runs the computation.
    pub fn run(&self, environment: R) -> A {
        (self.run)(environment)
    }

    /// Functor map: applies `f` to whatever the wrapped function produces.
    pub fn map<B: 'static>(self, f: impl Fn(A) -> B + 'static) -> Reader<R, B> {
        let run = self.run;
        Reader::new(category::comp(move |r: R| run(r), f))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::Reader;

    fn length_reader() -> Reader<String, usize> {
        Reader::new(|s: String| s.len())
    }

    #[test]
    fn map_post_composes() {
        let shouted = Reader::new(|s: String| s.to_uppercase()).map(|s| format!("{s}!"));
        assert_eq!(shouted.run("hey".to_string()), "HEY!");
    }

    #[test]
    fn clones_share_the_computation() {
        let reader = length_reader();
        let copy = reader.clone();
        assert_eq!(reader.run("abc".to_string()), copy.run("abc".to_string()));
    }

    proptest! {
        #[test]
        fn reader_identity_law(s in ".{0,32}") {
            let reader = length_reader();
            prop_assert_eq!(reader.clone().map(|x| x).run(s.clone()), reader.run(s));
        }

        #[test]
        fn reader_composition_law(s in ".{0,32}") {
            let f = |n: usize| n as u64 * 3;
            let g = |n: u64| n.to_string();
            let chained = length_reader().map(f).map(g);
            let fused = length_reader().map(move |x| g(f(x)));
            prop_assert_eq!(chained.run(s.clone()), fused.run(s));
        }
    }
}
