//! The stress run driver

use std::io;
use std::path::Path;
use std::time::Instant;

use recorder::{PerformanceRecorder, RunSummary};

use crate::config::{ConfigError, StressConfig};
use crate::items::{generate_items, toggle_all, toggle_item, CardItem};

/// One render/interaction stress session against a recorder.
///
/// Each cycle commits the current card grid as a measured render pass, then
/// performs one measured interaction against it (alternating single-card and
/// bulk toggles), so every sample in the log gets its interaction duration
/// backfilled exactly once. Cycles repeat until the configured time budget
/// elapses; at least one cycle always runs.
pub struct StressRun {
    config: StressConfig,
    recorder: PerformanceRecorder,
    items: Vec<CardItem>,
}

impl StressRun {
    /// Create a run with a freshly constructed recorder.
    pub fn new(config: StressConfig) -> Result<Self, ConfigError> {
        Self::with_recorder(config, PerformanceRecorder::new())
    }

    /// Create a run against an existing recorder.
    pub fn with_recorder(
        config: StressConfig,
        recorder: PerformanceRecorder,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            recorder,
            items: Vec::new(),
        })
    }

    /// Execute the stress session and return the aggregates.
    pub async fn run(&mut self) -> RunSummary {
        let count = self.config.subject_count;
        let mut grid = generate_items(count);
        let deadline = Instant::now() + self.config.test_duration;
        let mut cycle: u64 = 0;

        tracing::info!(target: "stress", subject_count = count, "stress run started");

        loop {
            grid = self
                .recorder
                .measure_render_phase(move || grid, count)
                .await;

            let cards = &mut grid;
            if cycle % 2 == 0 {
                let id = (cycle / 2) % count;
                self.recorder
                    .measure_interaction_phase(async move {
                        toggle_item(cards, id);
                    })
                    .await;
            } else {
                self.recorder
                    .measure_interaction_phase(async move {
                        toggle_all(cards);
                    })
                    .await;
            }

            cycle += 1;
            if Instant::now() >= deadline {
                break;
            }
            tokio::time::sleep(self.config.interaction_delay).await;
        }

        self.items = grid;

        tracing::info!(
            target: "stress",
            cycles = cycle,
            samples = self.recorder.sample_count(),
            "stress run complete"
        );

        RunSummary::from_samples(&self.recorder.samples())
    }

    /// The recorder backing this run.
    pub fn recorder(&self) -> &PerformanceRecorder {
        &self.recorder
    }

    /// The card grid as the last cycle left it.
    pub fn items(&self) -> &[CardItem] {
        &self.items
    }

    /// The configuration this run was created with.
    pub fn config(&self) -> &StressConfig {
        &self.config
    }
}

/// Write the recorder's JSON export to a file.
pub fn export_to_file(recorder: &PerformanceRecorder, path: impl AsRef<Path>) -> io::Result<()> {
    std::fs::write(path, recorder.export_json())
}
