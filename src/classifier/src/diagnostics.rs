use log::info;

/// Record-pair throughput counters, logged once at shutdown per §4.5's
/// "Diagnostic output" and returned so tests can assert on them directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub processed: u64,
    pub classified: u64,
}

impl Diagnostics {
    pub fn record_processed(&mut self) {
        self.processed += 1;
    }

    pub fn record_classified(&mut self) {
        self.classified += 1;
    }

    pub fn merge(mut self, other: Diagnostics) -> Diagnostics {
        self.processed += other.processed;
        self.classified += other.classified;
        self
    }

    /// Emit the one-line summary: pairs processed, classified, and their ratio.
    pub fn log_summary(&self) {
        #[allow(clippy::cast_precision_loss)]
        let ratio = if self.processed == 0 { 0.0 } else { self.classified as f64 / self.processed as f64 };
        info!("processed {} pairs, classified {} ({:.2}%)", self.processed, self.classified, ratio * 100.0);
    }
}
