//! Pure and impure functions, and what memoization does to each.

use std::{thread, time::Duration};

use algebra::Optional;
use ctfp_memo::{MemoConfig, Memoizer};
use tracing::trace;

/// Largest `n` whose factorial fits in a `u64`.
pub const MAX_FACTORIAL_ARG: u32 = 20;

/// Iterative factorial. Invalid once the result no longer fits in a `u64` (`n > 20`).
pub fn fact(n: u32) -> Optional<u64> {
    (2..=u64::from(n))
        .try_fold(1u64, u64::checked_mul)
        .into()
}

/// Recursive factorial that blocks for `delay` when it reaches the base case, standing in for an
/// expensive pure function.
///
/// Arguments above [`MAX_FACTORIAL_ARG`] are invalid straight away, without recursing or
/// sleeping.
pub fn slow_factorial(n: u32, delay: Duration) -> Optional<u64> {
    if n > MAX_FACTORIAL_ARG {
        return Optional::invalid();
    }
    if n == 0 {
        trace!(?delay, "slow factorial reached its base case");
        thread::sleep(delay);
        return Optional::valid(1);
    }
    slow_factorial(n - 1, delay).and_then(|rest| Optional::from(u64::from(n).checked_mul(rest)))
}

/// [`slow_factorial`] behind a [`Memoizer`]: only the first call per argument pays the delay.
pub fn memoized_slow_factorial(
    delay: Duration,
) -> Memoizer<u32, Optional<u64>, impl FnMut(u32) -> Optional<u64>> {
    Memoizer::with_config(
        move |n: u32| slow_factorial(n, delay),
        MemoConfig::default().with_label("slow_factorial"),
    )
}

/// The impure accumulator `y += x; return y`. Calling it twice with the same argument gives
/// different answers, so memoizing it changes its behavior.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunningSum {
    total: i64,
}

impl RunningSum {
    pub fn add(&mut self, x: i64) -> i64 {
        self.total += x;
        self.total
    }
}

/// All four functions from `bool` to `bool`.
pub const BOOL_FUNCTIONS: [(&str, fn(bool) -> bool); 4] = [
    ("identity", bool_identity),
    ("negate", bool_negate),
    ("always_true", bool_true),
    ("always_false", bool_false),
];

pub const fn bool_identity(b: bool) -> bool {
    b
}

pub const fn bool_negate(b: bool) -> bool {
    !b
}

pub const fn bool_true(_: bool) -> bool {
    true
}

pub const fn bool_false(_: bool) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, time::Duration};

    use algebra::Optional;
    use ctfp_memo::memoize;

    use super::{fact, memoized_slow_factorial, slow_factorial, RunningSum, BOOL_FUNCTIONS};

    #[test]
    fn fact_matches_known_values() {
        assert_eq!(fact(0), Optional::valid(1));
        assert_eq!(fact(6), Optional::valid(720));
        assert_eq!(fact(20), Optional::valid(2_432_902_008_176_640_000));
        assert_eq!(fact(21), Optional::invalid());
    }

    #[test]
    fn slow_factorial_agrees_with_fact() {
        for n in 0..=21 {
            assert_eq!(slow_factorial(n, Duration::ZERO), fact(n));
        }
    }

    #[test]
    fn slow_factorial_rejects_large_arguments_without_recursing() {
        assert_eq!(slow_factorial(21, Duration::ZERO), Optional::invalid());
        assert_eq!(slow_factorial(10_000_000, Duration::ZERO), Optional::invalid());
        assert_eq!(slow_factorial(u32::MAX, Duration::from_secs(60)), Optional::invalid());
    }

    #[test]
    fn memoized_factorial_reuses_results() {
        let mut memo = memoized_slow_factorial(Duration::ZERO);
        assert_eq!(memo.call(5), Ok(Optional::valid(120)));
        assert_eq!(memo.call(5), Ok(Optional::valid(120)));
        assert_eq!(memo.stats().misses, 1);
        assert_eq!(memo.config().label(), "slow_factorial");
    }

    #[test]
    fn running_sum_is_impure() {
        let mut sum = RunningSum::default();
        assert_eq!(sum.add(2), 2);
        assert_eq!(sum.add(3), 5);
        assert_eq!(sum.add(2), 7);

        let mut sum = RunningSum::default();
        let mut memo = memoize(|x: i64| sum.add(x));
        assert_eq!(memo.call(2), Ok(2));
        assert_eq!(memo.call(3), Ok(5));
        assert_eq!(memo.call(2), Ok(2));
    }

    #[test]
    fn bool_functions_are_all_distinct() {
        let tables: HashSet<_> = BOOL_FUNCTIONS
            .iter()
            .map(|(_, f)| (f(false), f(true)))
            .collect();
        assert_eq!(tables.len(), 4);
    }
}
