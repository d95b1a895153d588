//! Partial arithmetic functions as arrows of the [`Optional`] Kleisli category.

use algebra::{kleisli, Optional};

/// `sqrt(x)` for non-negative `x`.
pub fn safe_root(x: f64) -> Optional<f64> {
    if x >= 0.0 {
        Optional::valid(x.sqrt())
    } else {
        Optional::invalid()
    }
}

/// `1 / x` for non-zero `x`.
pub fn safe_reciprocal(x: f64) -> Optional<f64> {
    if x != 0.0 {
        Optional::valid(1.0 / x)
    } else {
        Optional::invalid()
    }
}

/// `sqrt(1 / x)`, defined wherever both steps are.
pub fn safe_root_reciprocal() -> impl Fn(f64) -> Optional<f64> {
    kleisli::compose(safe_reciprocal, safe_root)
}

#[cfg(test)]
mod tests {
    use algebra::{kleisli, Optional};
    use proptest::prelude::*;

    use super::{safe_reciprocal, safe_root, safe_root_reciprocal};

    #[test]
    fn reciprocal_is_undefined_at_zero() {
        assert_eq!(safe_reciprocal(4.0), Optional::valid(0.25));
        assert_eq!(safe_reciprocal(0.0), Optional::invalid());
        assert!(safe_reciprocal(-4.0).is_valid());
    }

    #[test]
    fn root_is_undefined_for_negatives() {
        assert_eq!(safe_root(4.0), Optional::valid(2.0));
        assert_eq!(safe_root(0.0), Optional::valid(0.0));
        assert!(!safe_root(-4.0).is_valid());
    }

    #[test]
    fn root_reciprocal_composes_both() {
        let f = safe_root_reciprocal();
        assert_eq!(f(4.0), Optional::valid(0.5));
        assert_eq!(f(1.0), Optional::valid(1.0));
        assert_eq!(f(0.0), Optional::invalid());
        assert_eq!(f(-4.0), Optional::invalid());
    }

    proptest! {
        #[test]
        fn partial_arithmetic_is_associative(x in -1.0e6f64..1.0e6) {
            kleisli::laws::associative_eq(safe_reciprocal, safe_root, safe_reciprocal, x)?;
            kleisli::laws::associative_eq(safe_root, safe_reciprocal, safe_root, x)?;
        }

        #[test]
        fn partial_arithmetic_respects_identity(x in -1.0e6f64..1.0e6) {
            kleisli::laws::identity_eq(safe_root, x)?;
            kleisli::laws::identity_eq(safe_reciprocal, x)?;
        }
    }
}
