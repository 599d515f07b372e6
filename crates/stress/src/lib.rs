//! Headless Stress Harness
//!
//! Drives the performance recorder the way the benchmark apps do: generate a
//! randomized card workload, commit it as a measured render pass, then toggle
//! cards as measured interactions until the time budget runs out. The
//! resulting sample log feeds the summary aggregates and the JSON export.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use stress::{StressConfig, StressRun};
//!
//! # async fn demo() -> Result<(), stress::ConfigError> {
//! let config = StressConfig {
//!     subject_count: 100,
//!     interaction_delay: Duration::from_millis(50),
//!     test_duration: Duration::from_secs(1),
//! };
//!
//! let mut run = StressRun::new(config)?;
//! let summary = run.run().await;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

mod config;
mod items;
mod runner;

pub use config::*;
pub use items::*;
pub use runner::*;
