use std::fmt::Write;

use schedviz_log::Timeline;
use schedviz_log::reconstruct::{reconstruct_fifo, reconstruct_round_robin};

#[test]
fn large_fifo_log() {
    let mut log = String::new();
    for i in 0..500u64 {
        let pid = 1000 + i;
        let start = 100_000 + i * 10;
        let end = start + 3000;
        writeln!(log, "Process {} (PID={pid}) starting work at {start} ms", i + 1).unwrap();
        writeln!(log, "Process {} (PID={pid}) finished work at {end} ms", i + 1).unwrap();
    }
    let run = reconstruct_fifo(&log);
    assert_eq!(run.records.len(), 500);
    assert_eq!(run.base_time, 100_000);

    let timeline = Timeline::new("FIFO Scheduler Process Execution Timeline", &run);
    assert_eq!(timeline.segments.len(), 500);
    assert_eq!(timeline.segments[0].start, 0);
    assert_eq!(timeline.segments[499].start, 4990);
    assert!(timeline.unresolved.is_empty());
}

#[test]
fn long_round_robin_session() {
    let quantum = 100u64;
    let processes = 8u32;
    let rounds = 125u64;

    let mut log = String::from("Starting FIFO Round-Robin Scheduler...\n");
    for round in 0..rounds {
        for p in 0..processes {
            let pid = 9000 + p;
            let dispatch = if round == 0 { "started" } else { "resumed" };
            writeln!(log, "Process {} (PID={pid}) {dispatch}", p + 1).unwrap();
            if round + 1 == rounds {
                writeln!(log, "Process {} (PID={pid}) finished execution.", p + 1).unwrap();
            } else {
                writeln!(
                    log,
                    "Process {} (PID={pid}) paused, remaining time: {} ms",
                    p + 1,
                    (rounds - round - 1) * quantum
                )
                .unwrap();
            }
        }
    }
    log.push_str("All processes completed.\n");

    let run = reconstruct_round_robin(&log, quantum).unwrap();
    assert_eq!(run.records.len(), processes as usize);
    for p in 0..processes {
        let record = &run.records[&(9000 + p)];
        assert_eq!(record.intervals.len(), rounds as usize);
        assert!(!record.has_open());
    }

    // The final slice ends exactly at slices * quantum.
    let total_slices = rounds * processes as u64;
    let timeline = Timeline::new("Round-Robin Scheduler Process Execution Timeline", &run);
    let last = timeline.segments.last().unwrap();
    assert_eq!(last.end, total_slices * quantum);
}
