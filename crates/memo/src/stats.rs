use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

/// Hit/miss counters of a memoizer. Atomic so that the shared memoizer can update them from
/// several threads without taking its cache lock.
#[derive(Debug, Default)]
pub(crate) struct MemoStats {
    hits: AtomicU64,
    misses: AtomicU64,
    rejected: AtomicU64,
    compute_nanos: AtomicU64,
}

impl MemoStats {
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self, elapsed: Duration) {
        self.misses.fetch_add(1, Ordering::Relaxed);
        let nanos = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        self.compute_nanos.fetch_add(nanos, Ordering::Relaxed);
    }

    pub(crate) fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self, entries: usize) -> MemoStatsSnapshot {
        MemoStatsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            entries,
            compute_time: Duration::from_nanos(self.compute_nanos.load(Ordering::Relaxed)),
        }
    }
}

/// Whole microseconds in `elapsed`, saturating at `u64::MAX` for use as a log field.
pub(crate) fn saturating_micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

/// Point-in-time view of a memoizer's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoStatsSnapshot {
    /// Calls answered from the cache.
    pub hits: u64,

    /// Calls that invoked the wrapped function. Equals the number of distinct keys seen.
    pub misses: u64,

    /// Calls refused because the argument had no cache key.
    pub rejected: u64,

    /// Results currently stored.
    pub entries: usize,

    /// Time spent inside the wrapped function, summed over all misses.
    pub compute_time: Duration,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{saturating_micros, MemoStats};

    #[test]
    fn micros_saturate_instead_of_wrapping() {
        assert_eq!(saturating_micros(Duration::from_millis(3)), 3_000);
        assert_eq!(saturating_micros(Duration::MAX), u64::MAX);
    }

    #[test]
    fn snapshot_reflects_recorded_events() {
        let stats = MemoStats::default();
        stats.record_miss(Duration::from_micros(5));
        stats.record_hit();
        stats.record_hit();
        stats.record_rejected();

        let snapshot = stats.snapshot(1);
        assert_eq!(snapshot.hits, 2);
        assert_eq!(snapshot.misses, 1);
        assert_eq!(snapshot.rejected, 1);
        assert_eq!(snapshot.entries, 1);
        assert_eq!(snapshot.compute_time, Duration::from_micros(5));
    }
}
