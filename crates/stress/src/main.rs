//! Headless stress driver.
//!
//! Runs one stress session against a fresh recorder, prints the summary
//! aggregates, and writes the exported sample log to disk.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use argh::FromArgs;
use tracing_subscriber::EnvFilter;

use stress::{export_to_file, StressConfig, StressRun};

#[derive(FromArgs)]
/// Stress-test the render/interaction recorder with a synthetic card grid.
struct Args {
    /// number of cards to render (10..=10000)
    #[argh(option, short = 'c', default = "100")]
    count: u64,

    /// pause between interaction cycles, in milliseconds
    #[argh(option, default = "50")]
    delay_ms: u64,

    /// total render/interaction loop budget, in milliseconds
    #[argh(option, default = "1000")]
    duration_ms: u64,

    /// where to write the exported sample log
    #[argh(option, short = 'o', default = "String::from(\"performance-metrics.json\")")]
    out: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Args = argh::from_env();
    let config = StressConfig {
        subject_count: args.count,
        interaction_delay: Duration::from_millis(args.delay_ms),
        test_duration: Duration::from_millis(args.duration_ms),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to build runtime")?;

    runtime.block_on(async {
        let mut run = StressRun::new(config)?;
        let summary = run.run().await;
        println!("{summary}");

        export_to_file(run.recorder(), Path::new(&args.out))
            .with_context(|| format!("failed to write {}", args.out))?;
        println!("sample log written to {}", args.out);

        Ok(())
    })
}
