use prometheus::Histogram;
use std::time::{Duration, Instant};

/// Times one inference call.
///
/// The elapsed time is observed into the histogram when the guard drops,
/// whatever path the caller takes out of the scope.
pub struct LatencyGuard {
    start: Instant,
    histogram: Option<Histogram>,
}

impl LatencyGuard {
    pub fn new(histogram: Option<&Histogram>) -> Self {
        Self {
            start: Instant::now(),
            histogram: histogram.cloned(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for LatencyGuard {
    fn drop(&mut self) {
        if let Some(histogram) = &self.histogram {
            histogram.observe(self.start.elapsed().as_secs_f64());
        }
    }
}
