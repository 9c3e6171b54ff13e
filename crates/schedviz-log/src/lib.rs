//! # Scheduler Log Timeline Reconstruction
//!
//! Parser and timeline reconstructor for scheduler simulation logs, with a
//! normalized chart payload as structured output.
//!
//! ## Overview
//!
//! This crate turns the loosely structured stdout of three scheduler
//! simulators (FIFO, LIFO, and round-robin FIFO) into per-process execution
//! intervals suitable for Gantt-style charting. It handles:
//!
//! - **Three distinct line grammars**: timestamped `starting`/`finished`
//!   lines for FIFO and LIFO, and timestamp-free `started`/`resumed`/
//!   `paused`/`finished` lines for round-robin
//! - **Virtual-clock reconstruction**: the round-robin log carries no
//!   timestamps; every dispatch slice is charged one fixed quantum against a
//!   shared clock
//! - **Multiple runs per process**: a pid may be dispatched, preempted, and
//!   resumed many times; each slice becomes its own interval
//! - **Messy input**: banners, progress chatter, and summary lines are
//!   skipped, never treated as errors
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   match_line()   ┌───────────────┐   normalize   ┌──────────┐
//! │   log text   │ ───────────────► │ reconstructor │ ────────────► │ Timeline │
//! │  (one run)   │   SchedEvents    │  (per format) │    RunData    │ (chart)  │
//! └──────────────┘                  └───────────────┘               └──────────┘
//! ```
//!
//! The reconstructors in [`reconstruct`] are pure functions from log text to
//! [`RunData`](ir::RunData): a pid-keyed map of [`ProcessRecord`](ir::ProcessRecord)s
//! plus the run's `base_time`. [`Timeline`](timeline::Timeline) subtracts the
//! base time and sorts the closed intervals into renderer-ready segments.
//!
//! ## Examples
//!
//! ```
//! use schedviz_log::{DEFAULT_QUANTUM_MS, LogFormat, Timeline, reconstruct};
//!
//! let log = "Process 1 (PID=100) starting work at 500\n\
//!            Process 1 (PID=100) finished work at 1500\n";
//! let run = reconstruct(log, LogFormat::Fifo, DEFAULT_QUANTUM_MS)?;
//! let timeline = Timeline::new("FIFO Scheduler Process Execution Timeline", &run);
//!
//! assert_eq!(timeline.segments.len(), 1);
//! assert_eq!(timeline.segments[0].start, 0);
//! assert_eq!(timeline.segments[0].end, 1000);
//! # Ok::<(), schedviz_log::TimelineError>(())
//! ```
//!
//! The round-robin format has no embedded timestamps; time is derived from
//! the quantum:
//!
//! ```
//! use schedviz_log::reconstruct::reconstruct_round_robin;
//!
//! let log = "Process 1 (PID=100) started\n\
//!            Process 1 (PID=100) paused, remaining time: 200 ms\n\
//!            Process 2 (PID=200) started\n\
//!            Process 2 (PID=200) finished execution.\n";
//! let run = reconstruct_round_robin(log, 100)?;
//! assert_eq!(run.records[&100].intervals[0].end, Some(100));
//! assert_eq!(run.records[&200].intervals[0].start, 100);
//! # Ok::<(), schedviz_log::TimelineError>(())
//! ```
//!
//! ### Exporting to JSON
//!
//! [`Timeline`](timeline::Timeline) implements `serde::Serialize`, so the
//! renderer payload can be shipped as JSON:
//!
//! ```no_run
//! use schedviz_log::{reconstruct_fifo, Timeline};
//! use std::fs;
//!
//! let log = fs::read_to_string("fifo_scheduler.log")?;
//! let run = reconstruct_fifo(&log);
//! let timeline = Timeline::new("FIFO Scheduler Process Execution Timeline", &run);
//! fs::write("timeline.json", serde_json::to_string_pretty(&timeline)?)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Library error types.
pub mod error;
/// Shared interval data model.
pub mod ir;
/// Per-format line grammar recognition.
pub mod matcher;
/// Format-specific reconstructors.
pub mod reconstruct;
/// Normalization into the renderer-facing payload.
pub mod timeline;

#[cfg(test)]
mod tests;

pub use error::TimelineError;
pub use matcher::LogFormat;
pub use reconstruct::{
    DEFAULT_QUANTUM_MS, reconstruct, reconstruct_fifo, reconstruct_lifo, reconstruct_round_robin,
};
pub use timeline::Timeline;

/// Schema version for the serialized timeline payload.
///
/// Follows semantic versioning:
/// - MAJOR: breaking changes to the payload structure
/// - MINOR: new optional fields
/// - PATCH: reconstruction bug fixes with no schema change
pub const SCHEMA_VERSION: &str = "1.0.0";
