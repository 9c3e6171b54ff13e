use crate::ir::{Interval, ProcessKey, ProcessRecord};
use crate::reconstruct::{reconstruct_fifo, reconstruct_lifo, reconstruct_round_robin};
use crate::timeline::Timeline;

#[test]
fn empty_log_is_empty_run() {
    let run = reconstruct_fifo("");
    assert!(run.is_empty());
    assert_eq!(run.base_time, 0);
}

#[test]
fn banner_only_log_is_empty_run() {
    let log = "Starting FIFO scheduler run\nAll child processes have completed.\n";
    let run = reconstruct_fifo(log);
    assert!(run.is_empty());
    assert_eq!(run.base_time, 0);
}

#[test]
fn fifo_simple_pair() {
    let log = "Process 1 (PID=100) starting work at 500\n\
               Process 1 (PID=100) finished work at 1500\n";
    let run = reconstruct_fifo(log);
    assert_eq!(run.records.len(), 1);
    assert_eq!(run.base_time, 500);
    let record = &run.records[&100];
    assert_eq!(record.first_seen, 500);
    assert_eq!(record.intervals, vec![Interval { start: 500, end: Some(1500) }]);
}

#[test]
fn lifo_priority_is_captured_but_not_required() {
    let log = "Process 2 (PID 200) starting work with priority 3 at 200\n\
               Process 1 (PID 100) starting work at 300\n\
               Process 2 (PID 200) finished work at 900\n\
               Process 1 (PID 100) finished work at 1000\n";
    let run = reconstruct_lifo(log);
    assert_eq!(run.records.len(), 2);
    assert_eq!(run.base_time, 200);
    assert_eq!(run.records[&200].intervals[0].duration(), Some(700));
    assert_eq!(run.records[&100].intervals[0].duration(), Some(700));
}

#[test]
fn reparse_is_idempotent() {
    let log = "Process 1 (PID=100) starting work at 500\n\
               Process 2 (PID=101) starting work at 600\n\
               Process 1 (PID=100) finished work at 1500\n\
               Process 2 (PID=101) finished work at 1700\n";
    assert_eq!(reconstruct_fifo(log), reconstruct_fifo(log));

    let rr = "Process 1 (PID=1) started\nProcess 1 (PID=1) finished\n";
    assert_eq!(
        reconstruct_round_robin(rr, 100).unwrap(),
        reconstruct_round_robin(rr, 100).unwrap()
    );
}

#[test]
fn process_key_equality_is_pid_only() {
    assert_eq!(ProcessKey::new(1, 100), ProcessKey::new(2, 100));
    assert_ne!(ProcessKey::new(1, 100), ProcessKey::new(1, 101));
    assert_eq!(ProcessKey::new(3, 5003).label(), "P3 (PID 5003)");
}

#[test]
fn close_targets_most_recent_open() {
    let mut record = ProcessRecord::new(ProcessKey::new(1, 10), 100);
    record.open_at(100);
    record.open_at(200);
    assert!(record.close_last_at(300));
    assert_eq!(record.intervals[1], Interval { start: 200, end: Some(300) });
    // The earlier interval is still open and closes next.
    assert!(record.has_open());
    assert!(record.close_last_at(400));
    assert_eq!(record.intervals[0], Interval { start: 100, end: Some(400) });
    assert!(!record.close_last_at(500));
}

#[test]
fn interval_close_clamps_to_start() {
    let mut interval = Interval::open_at(500);
    interval.close(400);
    assert_eq!(interval.end, Some(500));
    assert_eq!(interval.duration(), Some(0));
}

#[test]
fn empty_run_timeline_is_no_data() {
    let run = reconstruct_lifo("");
    let timeline = Timeline::new("LIFO Scheduler Process Execution Timeline", &run);
    assert!(timeline.is_empty());
    assert!(timeline.segments.is_empty());
    assert!(timeline.unresolved.is_empty());
}

#[test]
fn unfinished_process_is_flagged_not_rendered() {
    let log = "Process 1 (PID=100) starting work at 500\n\
               Process 2 (PID=101) starting work at 600\n\
               Process 2 (PID=101) finished work at 1600\n";
    let run = reconstruct_fifo(log);
    let timeline = Timeline::new("FIFO Scheduler Process Execution Timeline", &run);
    assert_eq!(timeline.segments.len(), 1);
    assert_eq!(timeline.segments[0].pid, 101);
    assert_eq!(timeline.unresolved.len(), 1);
    assert_eq!(timeline.unresolved[0].pid, 100);
    assert_eq!(timeline.unresolved[0].start, 0);
}
