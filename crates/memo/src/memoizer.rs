//! Single-threaded memoizing wrapper.

use std::{collections::HashMap, fmt, marker::PhantomData, time::Instant};

use tracing::{debug, trace, warn};

use crate::{
    config::MemoConfig,
    errors::MemoResult,
    key::MemoKey,
    stats::{saturating_micros, MemoStats, MemoStatsSnapshot},
};

/// Owns a function together with the results it already produced.
///
/// The wrapped function runs at most once per distinct argument. It may be an `FnMut` with
/// internal state; in that case the cache freezes whatever the first call returned.
pub struct Memoizer<A: MemoKey, R, F> {
    cache: HashMap<A::Key, R>,
    compute: F,
    config: MemoConfig,
    stats: MemoStats,
    _arg: PhantomData<fn(A)>,
}

/// Wraps `f` in a [`Memoizer`] with the default configuration.
pub fn memoize<A, R, F>(f: F) -> Memoizer<A, R, F>
where
    A: MemoKey,
    R: Clone,
    F: FnMut(A) -> R,
{
    Memoizer::new(f)
}

impl<A, R, F> Memoizer<A, R, F>
where
    A: MemoKey,
    R: Clone,
    F: FnMut(A) -> R,
{
    pub fn new(compute: F) -> Self {
        Self::with_config(compute, MemoConfig::default())
    }

    pub fn with_config(compute: F, config: MemoConfig) -> Self {
        Memoizer {
            cache: HashMap::with_capacity(config.initial_capacity()),
            compute,
            config,
            stats: MemoStats::default(),
            _arg: PhantomData,
        }
    }

    /// Returns the stored result for `arg`, computing and storing it on first sight.
    ///
    /// Fails with [`crate::MemoError::TypeKind`] if `arg` has no cache key; the wrapped function
    /// is not invoked in that case and nothing is stored.
    pub fn call(&mut self, arg: A) -> MemoResult<R> {
        let key = match arg.memo_key() {
            Ok(key) => key,
            Err(err) => {
                self.stats.record_rejected();
                warn!(label = %self.config.label(), %err, "rejected memo argument");
                return Err(err);
            }
        };

        if let Some(value) = self.cache.get(&key) {
            self.stats.record_hit();
            trace!(label = %self.config.label(), "memo hit");
            return Ok(value.clone());
        }

        let started = Instant::now();
        let value = (self.compute)(arg);
        let elapsed = started.elapsed();
        self.stats.record_miss(elapsed);

        self.cache.insert(key, value.clone());
        debug!(
            label = %self.config.label(),
            elapsed_us = saturating_micros(elapsed),
            entries = self.cache.len(),
            "memo miss, result stored"
        );

        Ok(value)
    }

    /// Whether a result for `arg` is already stored. Arguments without a key are never stored.
    pub fn contains(&self, arg: &A) -> bool {
        arg.memo_key()
            .is_ok_and(|key| self.cache.contains_key(&key))
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub const fn config(&self) -> &MemoConfig {
        &self.config
    }

    pub fn stats(&self) -> MemoStatsSnapshot {
        self.stats.snapshot(self.cache.len())
    }
}

impl<A: MemoKey, R, F> fmt::Debug for Memoizer<A, R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoizer")
            .field("label", &self.config.label())
            .field("entries", &self.cache.len())
            .finish_non_exhaustive()
    }
}
