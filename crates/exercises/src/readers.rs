//! The reader functor over string environments.

use algebra::{reader::Reader, Optional};

/// Parses the environment as an integer. Invalid if it is not one.
pub fn read_int() -> Reader<String, Optional<i64>> {
    Reader::new(|s: String| Optional::from(s.trim().parse::<i64>().ok()))
}

pub fn int_to_float(i: i64) -> f64 {
    i as f64
}

/// [`read_int`] mapped through [`int_to_float`]. The inner map lifts the conversion over the
/// [`Optional`] functor, the outer one over the reader.
pub fn read_float() -> Reader<String, Optional<f64>> {
    read_int().map(|o| o.map(int_to_float))
}

#[cfg(test)]
mod tests {
    use algebra::Optional;
    use proptest::prelude::*;

    use super::{int_to_float, read_float, read_int};

    #[test]
    fn reads_a_float() {
        assert_eq!(read_float().run("42".to_string()), Optional::valid(42.0));
        assert_eq!(read_float().run("forty-two".to_string()), Optional::invalid());
    }

    proptest! {
        #[test]
        fn read_int_functor_laws(n in any::<i32>()) {
            let env = n.to_string();
            prop_assert_eq!(read_int().map(|x| x).run(env.clone()), read_int().run(env.clone()));

            let g = |x: f64| x * 2.0;
            prop_assert_eq!(
                read_int().map(|o| o.map(int_to_float)).map(move |o| o.map(g)).run(env.clone()),
                read_int().map(move |o| o.map(|x| g(int_to_float(x)))).run(env)
            );
        }
    }
}
