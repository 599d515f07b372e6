//! The performance recorder

use std::future::Future;
use std::time::Instant;

use chrono::Utc;

use crate::frame::next_paint;
use crate::memory::{platform_probe, HeapProbe};
use crate::sample::{AverageSample, Sample};

/// Ordered timing instrumentation for two phases of UI work.
///
/// The recorder owns a chronological log of [`Sample`]s. A render
/// measurement (`begin_render` / `end_render`) appends one entry; an
/// interaction measurement (`begin_interaction` / `end_interaction`)
/// backfills the interaction duration of the most recently appended entry.
/// The two phases run independent begin/end state machines, so an in-flight
/// interaction timer does not block a render timer or vice versa.
///
/// Every operation is total. Mismatched begin/end calls degrade the
/// reported duration but never panic or error; this is advisory
/// instrumentation, not a correctness-critical path.
///
/// Instances are explicitly constructed and owned by the session that needs
/// them. There is no process-wide singleton.
pub struct PerformanceRecorder {
    samples: Vec<Sample>,
    render_started: Option<Instant>,
    interaction_started: Option<Instant>,
    probe: Box<dyn HeapProbe>,
}

impl PerformanceRecorder {
    /// Create a recorder using the platform heap probe.
    pub fn new() -> Self {
        Self::with_probe(platform_probe())
    }

    /// Create a recorder with an injected heap probe.
    pub fn with_probe(probe: Box<dyn HeapProbe>) -> Self {
        Self {
            samples: Vec::new(),
            render_started: None,
            interaction_started: None,
            probe,
        }
    }

    /// Mark the start of a render phase.
    ///
    /// Only one render is in flight at a time; calling this again before
    /// `end_render` simply resets the start marker.
    pub fn begin_render(&mut self) {
        self.render_started = Some(Instant::now());
    }

    /// Close the render phase and append a sample.
    ///
    /// The sample carries the elapsed render time, the current heap figure,
    /// the given workload size, and a wall-clock stamp. Its interaction
    /// duration starts at zero. An `end_render` without a matching
    /// `begin_render` treats the missing start as "now" and records a
    /// near-zero duration.
    pub fn end_render(&mut self, subject_count: u64) {
        let started = self.render_started.take().unwrap_or_else(Instant::now);
        let render_duration_ms = started.elapsed().as_secs_f64() * 1000.0;
        let heap_usage_mb = self.probe.heap_used_mb();

        tracing::trace!(
            target: "recorder::render",
            duration_ms = render_duration_ms,
            subject_count,
            "render sample appended"
        );

        self.samples.push(Sample {
            render_duration_ms,
            interaction_duration_ms: 0.0,
            heap_usage_mb,
            subject_count,
            captured_at_ms: Utc::now().timestamp_millis(),
        });
    }

    /// Mark the start of an interaction phase.
    pub fn begin_interaction(&mut self) {
        self.interaction_started = Some(Instant::now());
    }

    /// Close the interaction phase and return the elapsed milliseconds.
    ///
    /// When the log is non-empty the duration is written onto the
    /// last-appended sample; on an empty log the measurement is computed and
    /// returned but not persisted.
    pub fn end_interaction(&mut self) -> f64 {
        let started = self.interaction_started.take().unwrap_or_else(Instant::now);
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

        if let Some(last) = self.samples.last_mut() {
            last.interaction_duration_ms = elapsed_ms;
            tracing::trace!(
                target: "recorder::interaction",
                duration_ms = elapsed_ms,
                "interaction backfilled"
            );
        }

        elapsed_ms
    }

    /// Measure a render pass, including the visual update it triggers.
    ///
    /// Runs `work` synchronously, then suspends once for the paint tick so
    /// the update `work` queued can commit before the timer closes, then
    /// appends the sample and resolves with `work`'s result.
    pub async fn measure_render_phase<T>(
        &mut self,
        work: impl FnOnce() -> T,
        subject_count: u64,
    ) -> T {
        self.begin_render();
        let result = work();
        next_paint().await;
        self.end_render(subject_count);
        result
    }

    /// Measure an interaction, awaiting the wrapped operation.
    ///
    /// Adds no extra yield; the timer covers exactly as long as `work`
    /// itself runs or suspends.
    pub async fn measure_interaction_phase<F>(&mut self, work: F) -> F::Output
    where
        F: Future,
    {
        self.begin_interaction();
        let result = work.await;
        self.end_interaction();
        result
    }

    /// Get a copy of the full sample log in capture order.
    ///
    /// The returned vector is detached from the recorder; mutating it has no
    /// effect on recorder state.
    pub fn samples(&self) -> Vec<Sample> {
        self.samples.clone()
    }

    /// Number of samples in the log.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Arithmetic mean of every field across the log, or `None` when empty.
    pub fn average(&self) -> Option<AverageSample> {
        AverageSample::from_samples(&self.samples)
    }

    /// Clear the sample log. Irreversible.
    pub fn reset(&mut self) {
        self.samples.clear();
        tracing::debug!(target: "recorder", "sample log cleared");
    }

    /// Pretty-printed JSON rendering of the full sample log.
    ///
    /// An empty log exports as `[]`. Parsing the output reconstructs the
    /// samples field-for-field. The caller owns handing the string to a
    /// file-save or clipboard sink.
    pub fn export_json(&self) -> String {
        // Plain numeric fields; serialization cannot fail under normal use.
        serde_json::to_string_pretty(&self.samples).unwrap_or_else(|_| String::from("[]"))
    }
}

impl Default for PerformanceRecorder {
    fn default() -> Self {
        Self::new()
    }
}
