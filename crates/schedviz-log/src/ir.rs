use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identity of one simulated process.
///
/// `number` is the simulator's display ordinal ("Process 3"); `pid` is the
/// operating-system process id. Two keys denote the same process iff their
/// pids match; the ordinal is display-only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProcessKey {
    pub number: u32,
    pub pid: u32,
}

impl ProcessKey {
    pub fn new(number: u32, pid: u32) -> Self {
        Self { number, pid }
    }

    /// Chart row label, e.g. `P3 (PID 5003)`.
    pub fn label(&self) -> String {
        format!("P{} (PID {})", self.number, self.pid)
    }
}

impl PartialEq for ProcessKey {
    fn eq(&self, other: &Self) -> bool {
        self.pid == other.pid
    }
}

impl Eq for ProcessKey {}

impl std::hash::Hash for ProcessKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.pid.hash(state);
    }
}

/// A span of execution in milliseconds; `end == None` while the closing
/// event has not been observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: u64,
    pub end: Option<u64>,
}

impl Interval {
    pub fn open_at(start: u64) -> Self {
        Self { start, end: None }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Resolves the interval. A close time before the start is clamped so
    /// that `start <= end` always holds once resolved.
    pub fn close(&mut self, end: u64) {
        self.end = Some(end.max(self.start));
    }

    /// `None` while the interval is still open.
    pub fn duration(&self) -> Option<u64> {
        self.end.map(|end| end - self.start)
    }
}

/// Ordered execution history of one process within a run.
///
/// Intervals are kept in insertion order, which is chronological start
/// order for any log processed front to back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub key: ProcessKey,
    /// Timestamp of the first observed start event.
    pub first_seen: u64,
    pub intervals: Vec<Interval>,
}

impl ProcessRecord {
    pub fn new(key: ProcessKey, first_seen: u64) -> Self {
        Self {
            key,
            first_seen,
            intervals: Vec::new(),
        }
    }

    /// Appends a new open interval starting at `t`.
    pub fn open_at(&mut self, t: u64) {
        self.intervals.push(Interval::open_at(t));
    }

    /// Closes the most recently opened interval that is still open.
    ///
    /// Returns `false` when every interval is already resolved — an orphan
    /// close, which callers discard.
    pub fn close_last_at(&mut self, t: u64) -> bool {
        if let Some(interval) = self.intervals.iter_mut().rev().find(|iv| iv.is_open()) {
            interval.close(t);
            true
        } else {
            false
        }
    }

    pub fn has_open(&self) -> bool {
        self.intervals.iter().any(Interval::is_open)
    }
}

/// Everything reconstructed from one scheduler run.
///
/// `records` is keyed by pid; `base_time` is the reference timestamp
/// subtracted during normalization so the earliest event lands at zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunData {
    pub records: BTreeMap<u32, ProcessRecord>,
    pub base_time: u64,
}

impl RunData {
    /// Builds a run whose base is the earliest `first_seen`, or 0 for an
    /// empty run. Never panics on zero records.
    pub fn from_records(records: BTreeMap<u32, ProcessRecord>) -> Self {
        let base_time = records.values().map(|r| r.first_seen).min().unwrap_or(0);
        Self { records, base_time }
    }

    /// Builds a run whose clock is already relative, so the base stays 0.
    pub fn with_zero_base(records: BTreeMap<u32, ProcessRecord>) -> Self {
        Self {
            records,
            base_time: 0,
        }
    }

    /// The "no data" sentinel: a run in which no process was ever observed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
