//! Sample log entries and their aggregates

use serde::{Deserialize, Serialize};

/// One completed measurement cycle.
///
/// A sample is appended when a render phase ends. The interaction duration
/// starts at zero and is backfilled by the next interaction measurement;
/// every other field is immutable once the sample is in the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    /// Duration of the most recent render phase in milliseconds
    pub render_duration_ms: f64,
    /// Duration of the interaction recorded against this sample in
    /// milliseconds; zero until one is recorded
    pub interaction_duration_ms: f64,
    /// Approximate memory in use at sample-completion time, in megabytes;
    /// zero when the host exposes no introspection primitive
    pub heap_usage_mb: f64,
    /// Workload size associated with this sample, e.g. cards rendered
    pub subject_count: u64,
    /// Wall-clock creation time as Unix milliseconds; ordering and export
    /// only, never computation
    pub captured_at_ms: i64,
}

/// Arithmetic mean of every numeric field across a sample log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageSample {
    /// Mean render duration in milliseconds
    pub render_duration_ms: f64,
    /// Mean interaction duration in milliseconds
    pub interaction_duration_ms: f64,
    /// Mean heap usage in megabytes
    pub heap_usage_mb: f64,
    /// Mean workload size
    pub subject_count: f64,
}

impl AverageSample {
    /// Calculate the mean of each field, or `None` for an empty log.
    pub fn from_samples(samples: &[Sample]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let n = samples.len() as f64;
        Some(Self {
            render_duration_ms: samples.iter().map(|s| s.render_duration_ms).sum::<f64>() / n,
            interaction_duration_ms: samples
                .iter()
                .map(|s| s.interaction_duration_ms)
                .sum::<f64>()
                / n,
            heap_usage_mb: samples.iter().map(|s| s.heap_usage_mb).sum::<f64>() / n,
            subject_count: samples.iter().map(|s| s.subject_count as f64).sum::<f64>() / n,
        })
    }
}
