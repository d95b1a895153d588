//! Thread-safe memoizing wrapper.

use std::{
    collections::HashMap,
    fmt,
    marker::PhantomData,
    sync::{Arc, OnceLock},
    time::Instant,
};

use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use crate::{
    config::MemoConfig,
    errors::MemoResult,
    key::MemoKey,
    stats::{saturating_micros, MemoStats, MemoStatsSnapshot},
};

/// A result cell per key. Concurrent callers asking for the same key share the cell and wait on
/// it, so the wrapped function still runs once per distinct argument.
type Slot<R> = Arc<OnceLock<R>>;

/// Memoizer that can be called through a shared reference from many threads at once.
///
/// The map lock is only held to find or create a key's slot, never while the wrapped function
/// runs, so computations for different keys proceed in parallel.
pub struct SharedMemoizer<A: MemoKey, R, F> {
    slots: Mutex<HashMap<A::Key, Slot<R>>>,
    compute: F,
    config: MemoConfig,
    stats: MemoStats,
    _arg: PhantomData<fn(A)>,
}

impl<A, R, F> SharedMemoizer<A, R, F>
where
    A: MemoKey,
    R: Clone,
    F: Fn(A) -> R,
{
    pub fn new(compute: F) -> Self {
        Self::with_config(compute, MemoConfig::default())
    }

    pub fn with_config(compute: F, config: MemoConfig) -> Self {
        SharedMemoizer {
            slots: Mutex::new(HashMap::with_capacity(config.initial_capacity())),
            compute,
            config,
            stats: MemoStats::default(),
            _arg: PhantomData,
        }
    }

    /// Returns the stored result for `arg`, computing it on first sight.
    ///
    /// When several threads call with the same uncached argument, one of them runs the wrapped
    /// function and the others block until its result is available.
    pub fn call(&self, arg: A) -> MemoResult<R> {
        let key = match arg.memo_key() {
            Ok(key) => key,
            Err(err) => {
                self.stats.record_rejected();
                warn!(label = %self.config.label(), %err, "rejected memo argument");
                return Err(err);
            }
        };

        let slot = Arc::clone(self.slots.lock().entry(key).or_default());

        if let Some(value) = slot.get() {
            self.stats.record_hit();
            trace!(label = %self.config.label(), "memo hit");
            return Ok(value.clone());
        }

        let mut computed = false;
        let value = slot.get_or_init(|| {
            computed = true;
            let started = Instant::now();
            let value = (self.compute)(arg);
            let elapsed = started.elapsed();
            self.stats.record_miss(elapsed);
            debug!(
                label = %self.config.label(),
                elapsed_us = saturating_micros(elapsed),
                "memo miss, result stored"
            );
            value
        });

        if !computed {
            self.stats.record_hit();
            trace!(label = %self.config.label(), "memo hit after waiting on another caller");
        }

        Ok(value.clone())
    }

    /// Number of keys with a finished result.
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .values()
            .filter(|slot| slot.get().is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn config(&self) -> &MemoConfig {
        &self.config
    }

    pub fn stats(&self) -> MemoStatsSnapshot {
        self.stats.snapshot(self.len())
    }
}

impl<A: MemoKey, R, F> fmt::Debug for SharedMemoizer<A, R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedMemoizer")
            .field("label", &self.config.label())
            .field("slots", &self.slots.lock().len())
            .finish_non_exhaustive()
    }
}
