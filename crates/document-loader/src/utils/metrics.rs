use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Per-file outcomes of a batch run. Clones share the same counters.
#[derive(Clone, Debug, Default)]
pub struct Metrics {
    inner: Arc<Counters>,
}

#[derive(Debug, Default)]
struct Counters {
    succeeded: AtomicU64,
    failed: AtomicU64,
    records: AtomicU64,
    elapsed_ms: AtomicU64,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: u64,
    pub failed: u64,
    pub records: u64,
    pub elapsed_ms: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&self, records: usize, elapsed: Duration) {
        self.inner.succeeded.fetch_add(1, Ordering::Relaxed);
        self.inner
            .records
            .fetch_add(records as u64, Ordering::Relaxed);
        self.add_elapsed(elapsed);
    }

    pub fn record_failure(&self, elapsed: Duration) {
        self.inner.failed.fetch_add(1, Ordering::Relaxed);
        self.add_elapsed(elapsed);
    }

    fn add_elapsed(&self, elapsed: Duration) {
        self.inner
            .elapsed_ms
            .fetch_add(elapsed.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            succeeded: self.inner.succeeded.load(Ordering::Relaxed),
            failed: self.inner.failed.load(Ordering::Relaxed),
            records: self.inner.records.load(Ordering::Relaxed),
            elapsed_ms: self.inner.elapsed_ms.load(Ordering::Relaxed),
        }
    }

    pub fn log_summary(&self) -> BatchSummary {
        let summary = self.summary();
        info!(
            files_succeeded = summary.succeeded,
            files_failed = summary.failed,
            records = summary.records,
            elapsed_ms = summary.elapsed_ms,
            "Batch finished"
        );
        summary
    }
}

impl BatchSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}
