//! Aggregates for the summary view

use serde::{Deserialize, Serialize};

use crate::sample::Sample;

/// Running statistics the summary view renders next to the card grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    /// Mean render duration in milliseconds
    pub avg_render_ms: f64,
    /// Mean interaction duration in milliseconds
    pub avg_interaction_ms: f64,
    /// Highest heap figure seen across the log, in megabytes
    pub peak_heap_mb: f64,
    /// Number of samples the aggregates cover
    pub sample_count: usize,
}

impl RunSummary {
    /// Compute the aggregates over a sample log.
    ///
    /// An empty log yields the all-zero summary rather than NaN.
    pub fn from_samples(samples: &[Sample]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        let n = samples.len() as f64;
        Self {
            avg_render_ms: samples.iter().map(|s| s.render_duration_ms).sum::<f64>() / n,
            avg_interaction_ms: samples
                .iter()
                .map(|s| s.interaction_duration_ms)
                .sum::<f64>()
                / n,
            peak_heap_mb: samples.iter().map(|s| s.heap_usage_mb).fold(0.0, f64::max),
            sample_count: samples.len(),
        }
    }

    /// Check whether any samples back this summary.
    pub fn is_empty(&self) -> bool {
        self.sample_count == 0
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} samples, avg render {:.2}ms, avg interaction {:.2}ms, peak heap {:.2}MB",
            self.sample_count, self.avg_render_ms, self.avg_interaction_ms, self.peak_heap_mb
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(render_ms: f64, interaction_ms: f64, heap_mb: f64) -> Sample {
        Sample {
            render_duration_ms: render_ms,
            interaction_duration_ms: interaction_ms,
            heap_usage_mb: heap_mb,
            subject_count: 100,
            captured_at_ms: 0,
        }
    }

    #[test]
    fn test_summary_from_samples() {
        let samples = vec![sample(10.0, 1.0, 30.0), sample(20.0, 3.0, 25.0)];
        let summary = RunSummary::from_samples(&samples);

        assert_eq!(summary.avg_render_ms, 15.0);
        assert_eq!(summary.avg_interaction_ms, 2.0);
        assert_eq!(summary.peak_heap_mb, 30.0);
        assert_eq!(summary.sample_count, 2);
        assert!(!summary.is_empty());
    }

    #[test]
    fn test_summary_empty_log() {
        let summary = RunSummary::from_samples(&[]);

        assert_eq!(summary, RunSummary::default());
        assert!(summary.is_empty());
    }

    #[test]
    fn test_summary_display() {
        let summary = RunSummary::from_samples(&[sample(12.5, 0.5, 64.0)]);
        let text = format!("{}", summary);

        assert!(text.contains("1 samples"));
        assert!(text.contains("12.50ms"));
        assert!(text.contains("64.00MB"));
    }
}
