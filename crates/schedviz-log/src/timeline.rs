use serde::{Deserialize, Serialize};

use crate::ir::RunData;

/// One closed, normalized execution slice, ready for chart layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub label: String,
    pub number: u32,
    pub pid: u32,
    pub start: u64,
    pub end: u64,
}

/// An interval whose closing event never arrived.
///
/// Surfaced here instead of drawn: rendering an absent end as a zero-width
/// or unbounded bar would misrepresent the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedSlice {
    pub pid: u32,
    pub start: u64,
}

/// The renderer-facing payload for one scheduler run.
///
/// Segments are normalized (`x - base_time`) and sorted by start time; an
/// empty segment list means the renderer should show its "no data"
/// placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub title: String,
    pub segments: Vec<Segment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unresolved: Vec<UnresolvedSlice>,
}

impl Timeline {
    pub fn new(title: impl Into<String>, run: &RunData) -> Self {
        let mut segments = Vec::new();
        let mut unresolved = Vec::new();
        for record in run.records.values() {
            for interval in &record.intervals {
                match interval.end {
                    Some(end) => segments.push(Segment {
                        label: record.key.label(),
                        number: record.key.number,
                        pid: record.key.pid,
                        // Saturating: a log with out-of-order timestamps can
                        // put a later slice before the run's base.
                        start: interval.start.saturating_sub(run.base_time),
                        end: end.saturating_sub(run.base_time),
                    }),
                    None => unresolved.push(UnresolvedSlice {
                        pid: record.key.pid,
                        start: interval.start.saturating_sub(run.base_time),
                    }),
                }
            }
        }
        segments.sort_by(|a, b| a.start.cmp(&b.start).then(a.pid.cmp(&b.pid)));
        Self {
            title: title.into(),
            segments,
            unresolved,
        }
    }

    /// True when the renderer should show its "no data" placeholder.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
