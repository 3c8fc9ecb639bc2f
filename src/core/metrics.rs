//! Delivery counters for a category logger
//!
//! Tracks what happened to entries that passed the severity filter. Entries
//! rejected by the filter are not counted: a disabled severity has no side
//! effects at all.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for entries that passed the severity filter
///
/// # Example
///
/// ```
/// use category_logger::FilterMetrics;
///
/// let metrics = FilterMetrics::new();
/// metrics.record_forwarded();
/// metrics.record_failed();
///
/// assert_eq!(metrics.forwarded_count(), 1);
/// assert_eq!(metrics.failed_count(), 1);
/// ```
#[derive(Debug)]
pub struct FilterMetrics {
    /// Entries the sink accepted
    forwarded: AtomicU64,

    /// Entries the sink rejected with an error or a panic
    failed: AtomicU64,

    /// Entries dropped because no sink was available
    unrouted: AtomicU64,
}

impl FilterMetrics {
    pub const fn new() -> Self {
        Self {
            forwarded: AtomicU64::new(0),
            failed: AtomicU64::new(0),
            unrouted: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn forwarded_count(&self) -> u64 {
        self.forwarded.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_count(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn unrouted_count(&self) -> u64 {
        self.unrouted.load(Ordering::Relaxed)
    }

    /// Record an accepted entry, returning the previous count
    #[inline]
    pub fn record_forwarded(&self) -> u64 {
        self.forwarded.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a sink failure, returning the previous count
    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed.fetch_add(1, Ordering::Relaxed)
    }

    /// Record an entry with nowhere to go, returning the previous count
    #[inline]
    pub fn record_unrouted(&self) -> u64 {
        self.unrouted.fetch_add(1, Ordering::Relaxed)
    }

    /// Failure rate as a percentage (0.0 - 100.0) of entries handed to the sink
    ///
    /// Returns 0.0 if nothing has reached the sink yet.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.failed_count() as f64;
        let total = self.forwarded_count() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.forwarded.store(0, Ordering::Relaxed);
        self.failed.store(0, Ordering::Relaxed);
        self.unrouted.store(0, Ordering::Relaxed);
    }
}

impl Default for FilterMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for FilterMetrics {
    /// Create a snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            forwarded: AtomicU64::new(self.forwarded_count()),
            failed: AtomicU64::new(self.failed_count()),
            unrouted: AtomicU64::new(self.unrouted_count()),
        }
    }
}
