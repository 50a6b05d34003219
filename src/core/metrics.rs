//! Console metrics for observability
//!
//! Counts what went through a console: lines written, messages rejected
//! before rendering, and writes that failed at the IO layer.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters shared by every logger writing to the same console
///
/// # Example
///
/// ```
/// use console_logger_factory::ConsoleMetrics;
///
/// let metrics = ConsoleMetrics::new();
///
/// metrics.record_written();
/// metrics.record_rejected();
///
/// assert_eq!(metrics.lines_written(), 1);
/// assert_eq!(metrics.rejected_count(), 1);
/// ```
#[derive(Debug)]
pub struct ConsoleMetrics {
    /// Lines fully written, including the color reset
    lines_written: AtomicU64,

    /// Messages refused by a logger (null message)
    rejected: AtomicU64,

    /// Writes that failed with an IO error
    failed_writes: AtomicU64,
}

impl ConsoleMetrics {
    /// All counters at zero
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            rejected: AtomicU64::new(0),
            failed_writes: AtomicU64::new(0),
        }
    }

    /// Lines written so far
    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    /// Messages rejected so far
    #[inline]
    pub fn rejected_count(&self) -> u64 {
        self.rejected.load(Ordering::Relaxed)
    }

    /// Failed writes so far
    #[inline]
    pub fn failed_write_count(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    /// Returns the previous count
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.lines_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_rejected(&self) -> u64 {
        self.rejected.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed_write(&self) -> u64 {
        self.failed_writes.fetch_add(1, Ordering::Relaxed)
    }

    /// Zero every counter
    pub fn reset(&self) {
        self.lines_written.store(0, Ordering::Relaxed);
        self.rejected.store(0, Ordering::Relaxed);
        self.failed_writes.store(0, Ordering::Relaxed);
    }
}

impl Default for ConsoleMetrics {
    fn default() -> Self {
        Self::new()
    }
}
