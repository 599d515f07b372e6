//! Render and Interaction Instrumentation
//!
//! This crate provides the measurement core shared by the styling benchmark
//! apps:
//! - A stopwatch-style recorder for render and interaction phases
//! - Heap usage sampling with graceful fallback on hosts without introspection
//! - Aggregate reporting over the accumulated sample log
//!
//! # Example
//!
//! ```rust
//! use recorder::PerformanceRecorder;
//!
//! let mut recorder = PerformanceRecorder::new();
//!
//! recorder.begin_render();
//! // ... build the card grid ...
//! recorder.end_render(100);
//!
//! if let Some(avg) = recorder.average() {
//!     println!("mean render: {:.2}ms", avg.render_duration_ms);
//! }
//! ```

mod frame;
mod memory;
mod recorder;
mod report;
mod sample;

pub use frame::*;
pub use memory::*;
pub use recorder::*;
pub use report::*;
pub use sample::*;

/// Re-export for convenience
pub use std::time::{Duration, Instant};
