use std::time::Duration;

/// Cumulative kernel throughput since the last reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThroughputMetrics {
    iterations: u64,
    samples: u64,
    elapsed: Duration,
}

impl ThroughputMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, samples: u64, iterations: u64, elapsed: Duration) {
        self.samples += samples;
        self.iterations += iterations;
        self.elapsed += elapsed;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    #[must_use]
    pub fn samples(&self) -> u64 {
        self.samples
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// `None` until some time has been recorded.
    #[must_use]
    pub fn iterations_per_millisecond(&self) -> Option<u64> {
        let nanos = self.elapsed.as_nanos();
        if nanos == 0 {
            return None;
        }

        Some((u128::from(self.iterations) * 1_000_000 / nanos) as u64)
    }
}
