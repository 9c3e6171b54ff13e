use std::collections::BTreeMap;

use crate::error::TimelineError;
use crate::ir::{ProcessKey, ProcessRecord, RunData};
use crate::matcher::{self, LogFormat, SchedAction};

/// Virtual-time slice granted per dispatch under round-robin, in ms.
pub const DEFAULT_QUANTUM_MS: u64 = 100;

/// Reconstructs a run from any of the supported formats.
///
/// `quantum` is only consulted for [`LogFormat::RoundRobin`].
pub fn reconstruct(
    input: &str,
    format: LogFormat,
    quantum: u64,
) -> Result<RunData, TimelineError> {
    match format {
        LogFormat::Fifo => Ok(reconstruct_fifo(input)),
        LogFormat::Lifo => Ok(reconstruct_lifo(input)),
        LogFormat::RoundRobin => reconstruct_round_robin(input, quantum),
    }
}

/// Reconstructs a FIFO simulator log from its timestamped start/finish lines.
pub fn reconstruct_fifo(input: &str) -> RunData {
    fold_timestamped(input, LogFormat::Fifo)
}

/// Reconstructs a LIFO simulator log. Identical fold to FIFO; the two
/// simulators phrase their lines differently but share the
/// starting/finished event model.
pub fn reconstruct_lifo(input: &str) -> RunData {
    fold_timestamped(input, LogFormat::Lifo)
}

fn fold_timestamped(input: &str, format: LogFormat) -> RunData {
    let mut records: BTreeMap<u32, ProcessRecord> = BTreeMap::new();
    for line in input.lines() {
        let Some(event) = matcher::match_line(line, format) else {
            continue;
        };
        let Some(ts) = event.timestamp else { continue };
        match event.action {
            SchedAction::Starting => {
                let record = records.entry(event.pid).or_insert_with(|| {
                    ProcessRecord::new(ProcessKey::new(event.number, event.pid), ts)
                });
                record.open_at(ts);
            }
            SchedAction::Finished => {
                // Orphan finishes (unknown pid, or no open interval left)
                // are dropped.
                if let Some(record) = records.get_mut(&event.pid) {
                    record.close_last_at(ts);
                }
            }
            _ => {}
        }
    }
    RunData::from_records(records)
}

/// Reconstructs a round-robin simulator log.
///
/// The log carries no timestamps, so this is a discrete-event clock
/// simulation over a single shared virtual clock: every pause or finish
/// consumes exactly one `quantum`, closing the slice at
/// `current_time + quantum` before the clock advances. The terminal marker
/// (and, in its absence, end of input) closes any dangling open slice at
/// `current_time + quantum` without advancing the clock further.
///
/// A process that finishes mid-slice is still charged the full quantum;
/// the simulator's timer only fires on quantum expiry, so the log cannot
/// say otherwise.
pub fn reconstruct_round_robin(input: &str, quantum: u64) -> Result<RunData, TimelineError> {
    if quantum == 0 {
        return Err(TimelineError::ZeroQuantum);
    }
    let mut records: BTreeMap<u32, ProcessRecord> = BTreeMap::new();
    let mut current_time: u64 = 0;
    for line in input.lines() {
        if matcher::is_terminal_line(line) {
            flush_open(&mut records, current_time + quantum);
            continue;
        }
        let Some(event) = matcher::match_line(line, LogFormat::RoundRobin) else {
            continue;
        };
        match event.action {
            SchedAction::Started | SchedAction::Resumed => {
                let record = records.entry(event.pid).or_insert_with(|| {
                    ProcessRecord::new(ProcessKey::new(event.number, event.pid), current_time)
                });
                record.open_at(current_time);
            }
            SchedAction::Paused | SchedAction::Finished => {
                // The clock only moves when a real open slice was closed;
                // an orphan pause/finish is discarded outright.
                if let Some(record) = records.get_mut(&event.pid)
                    && record.close_last_at(current_time + quantum)
                {
                    current_time += quantum;
                }
            }
            SchedAction::Starting => {}
        }
    }
    // A log missing its terminal marker still flushes dangling slices.
    flush_open(&mut records, current_time + quantum);
    Ok(RunData::with_zero_base(records))
}

fn flush_open(records: &mut BTreeMap<u32, ProcessRecord>, end: u64) {
    for record in records.values_mut() {
        while record.has_open() {
            record.close_last_at(end);
        }
    }
}
