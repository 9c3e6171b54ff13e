use thiserror::Error;

/// Errors surfaced by the reconstruction API.
///
/// Almost everything this crate encounters is policy rather than error:
/// unparseable lines are skipped, orphan closes discarded, and empty runs
/// flow through as empty timelines. Only genuinely invalid configuration
/// is reported.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimelineError {
    /// A format selector that names none of the supported grammars.
    #[error("unknown log format `{0}` (expected fifo, lifo, or rr)")]
    UnknownFormat(String),

    /// Round-robin reconstruction with a zero quantum cannot advance the
    /// virtual clock.
    #[error("time quantum must be greater than zero")]
    ZeroQuantum,
}
