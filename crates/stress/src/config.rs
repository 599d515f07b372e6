//! Stress run configuration

use std::time::Duration;

use thiserror::Error;

/// Smallest workload the driver accepts.
pub const MIN_SUBJECTS: u64 = 10;

/// Largest workload the driver accepts.
pub const MAX_SUBJECTS: u64 = 10_000;

/// Validation failure for a stress configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Workload size outside the accepted range
    #[error("subject count {0} is outside 10..=10000")]
    SubjectCount(u64),
}

/// Parameters for one stress run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StressConfig {
    /// Number of cards in the generated workload
    pub subject_count: u64,
    /// Pause between interaction cycles
    pub interaction_delay: Duration,
    /// Total time budget for the render/interaction loop
    pub test_duration: Duration,
}

impl StressConfig {
    /// Check the workload size against the driver bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.subject_count < MIN_SUBJECTS || self.subject_count > MAX_SUBJECTS {
            return Err(ConfigError::SubjectCount(self.subject_count));
        }
        Ok(())
    }
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            subject_count: 100,
            interaction_delay: Duration::from_millis(50),
            test_duration: Duration::from_secs(1),
        }
    }
}
