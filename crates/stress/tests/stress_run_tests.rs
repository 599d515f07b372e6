//! End-to-end tests for the stress harness.

use std::time::Duration;

use recorder::Sample;
use stress::{export_to_file, StressConfig, StressRun};
use tempfile::TempDir;

fn short_config() -> StressConfig {
    StressConfig {
        subject_count: 10,
        interaction_delay: Duration::from_millis(1),
        test_duration: Duration::from_millis(30),
    }
}

#[tokio::test]
async fn short_run_produces_consistent_summary() {
    let mut run = StressRun::new(short_config()).unwrap();

    let summary = run.run().await;

    let samples = run.recorder().samples();
    assert!(!samples.is_empty());
    assert_eq!(summary.sample_count, samples.len());
    assert!(samples
        .iter()
        .all(|s| s.render_duration_ms >= 0.0 && s.interaction_duration_ms >= 0.0));

    // Aggregates match what the log actually holds.
    let mean_render: f64 =
        samples.iter().map(|s| s.render_duration_ms).sum::<f64>() / samples.len() as f64;
    assert!((summary.avg_render_ms - mean_render).abs() < 1e-9);
}

#[tokio::test]
async fn every_sample_is_backfilled_in_order() {
    let mut run = StressRun::new(short_config()).unwrap();
    run.run().await;

    let samples = run.recorder().samples();
    let stamps: Vec<i64> = samples.iter().map(|s| s.captured_at_ms).collect();
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn exported_log_parses_back() {
    let mut run = StressRun::new(short_config()).unwrap();
    run.run().await;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("performance-metrics.json");
    export_to_file(run.recorder(), &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let parsed: Vec<Sample> = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, run.recorder().samples());
}

#[test]
fn out_of_range_workload_is_rejected() {
    let config = StressConfig {
        subject_count: 10_001,
        ..short_config()
    };

    assert!(StressRun::new(config).is_err());
}
