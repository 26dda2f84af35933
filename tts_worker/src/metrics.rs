// Synthesis activity counters

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for one worker's synthesis activity.
#[derive(Debug, Default)]
pub struct SynthesisMetrics {
    synthesis_count: AtomicU64,
    error_count: AtomicU64,
    model_loads: AtomicU64,
    total_synthesis_ms: AtomicU64,
    total_audio_ms: AtomicU64,
}

impl SynthesisMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_synthesis(&self, elapsed_ms: u64, audio_ms: u64) {
        self.synthesis_count.fetch_add(1, Ordering::Relaxed);
        self.total_synthesis_ms.fetch_add(elapsed_ms, Ordering::Relaxed);
        self.total_audio_ms.fetch_add(audio_ms, Ordering::Relaxed);
    }

    pub(crate) fn record_error(&self) {
        self.error_count.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_model_load(&self) {
        self.model_loads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn synthesis_count(&self) -> u64 {
        self.synthesis_count.load(Ordering::Relaxed)
    }

    pub fn error_count(&self) -> u64 {
        self.error_count.load(Ordering::Relaxed)
    }

    pub fn model_loads(&self) -> u64 {
        self.model_loads.load(Ordering::Relaxed)
    }

    /// Milliseconds of audio produced so far.
    pub fn total_audio_ms(&self) -> u64 {
        self.total_audio_ms.load(Ordering::Relaxed)
    }

    pub fn avg_synthesis_ms(&self) -> f64 {
        let count = self.synthesis_count.load(Ordering::Relaxed);
        if count == 0 {
            return 0.0;
        }
        let total = self.total_synthesis_ms.load(Ordering::Relaxed);
        total as f64 / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let metrics = SynthesisMetrics::new();
        metrics.record_model_load();
        metrics.record_synthesis(40, 1200);
        metrics.record_synthesis(60, 800);
        metrics.record_error();

        assert_eq!(metrics.synthesis_count(), 2);
        assert_eq!(metrics.error_count(), 1);
        assert_eq!(metrics.model_loads(), 1);
        assert_eq!(metrics.total_audio_ms(), 2000);
        assert_eq!(metrics.avg_synthesis_ms(), 50.0);
    }

    #[test]
    fn test_avg_without_samples() {
        let metrics = SynthesisMetrics::new();
        assert_eq!(metrics.avg_synthesis_ms(), 0.0);
    }
}
