use std::str::FromStr;

use crate::error::TimelineError;

/// Which simulator produced a log file.
///
/// Selection is by reconstructor choice (effectively by filename), never by
/// sniffing content: a line that happens to fit another format's grammar is
/// simply not matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Fifo,
    Lifo,
    RoundRobin,
}

impl FromStr for LogFormat {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(Self::Fifo),
            "lifo" => Ok(Self::Lifo),
            "rr" | "round-robin" | "roundrobin" => Ok(Self::RoundRobin),
            _ => Err(TimelineError::UnknownFormat(s.to_string())),
        }
    }
}

/// State transition named by a log line.
///
/// `Starting` belongs to the timestamped FIFO/LIFO grammars; the other four
/// verbs belong to round-robin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedAction {
    Starting,
    Started,
    Resumed,
    Paused,
    Finished,
}

/// One matched log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedEvent {
    pub number: u32,
    pub pid: u32,
    pub action: SchedAction,
    /// Wall-clock ms for FIFO/LIFO; `None` for round-robin, whose time is
    /// derived from the virtual clock.
    pub timestamp: Option<u64>,
    /// LIFO-only scheduling priority clause.
    pub priority: Option<u32>,
}

/// How the pid appears in the process header.
#[derive(Clone, Copy, PartialEq, Eq)]
enum PidStyle {
    /// `(PID=1234)` — FIFO and round-robin.
    Equals,
    /// `(PID 1234)` — LIFO.
    Space,
}

/// Matches one line against the given format's grammar.
///
/// Blank lines, banners, summary lines, and lines fitting another format
/// return `None`; that is a silent skip, never an error.
pub fn match_line(line: &str, format: LogFormat) -> Option<SchedEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match format {
        LogFormat::Fifo => match_timestamped(line, PidStyle::Equals),
        LogFormat::Lifo => {
            // Progress chatter, not a state transition.
            if line.contains("is working") {
                return None;
            }
            match_timestamped(line, PidStyle::Space)
        }
        LogFormat::RoundRobin => match_round_robin(line),
    }
}

/// Recognizes the round-robin run's terminal marker.
pub fn is_terminal_line(line: &str) -> bool {
    line.contains("All processes completed")
}

/// `Process {num} (PID={pid}) {starting|finished} work [with priority {n}] at {ts}[ ms]`
fn match_timestamped(line: &str, style: PidStyle) -> Option<SchedEvent> {
    let (number, pid, rest) = match_header(line, style)?;
    let rest = rest.strip_prefix(' ')?;
    let (action, rest) = if let Some(rest) = rest.strip_prefix("starting work") {
        (SchedAction::Starting, rest)
    } else if let Some(rest) = rest.strip_prefix("finished work") {
        (SchedAction::Finished, rest)
    } else {
        return None;
    };
    let (priority, rest) = if style == PidStyle::Space
        && let Some(rest) = rest.strip_prefix(" with priority ")
    {
        let (priority, rest) = take_number::<u32>(rest)?;
        (Some(priority), rest)
    } else {
        (None, rest)
    };
    let rest = rest.strip_prefix(" at ")?;
    let (timestamp, rest) = take_number::<u64>(rest)?;
    match rest.trim() {
        "" | "ms" => {}
        _ => return None,
    }
    Some(SchedEvent {
        number,
        pid,
        action,
        timestamp: Some(timestamp),
        priority,
    })
}

/// `Process {num} (PID={pid}) {started|resumed|paused|finished} ...`
///
/// The verb may be followed by chatter (`, remaining time: 200 ms`,
/// ` execution.`, ` first.`) which carries no reconstruction information.
fn match_round_robin(line: &str) -> Option<SchedEvent> {
    if is_terminal_line(line) {
        return None;
    }
    let (number, pid, rest) = match_header(line, PidStyle::Equals)?;
    let rest = rest.strip_prefix(' ')?;
    let verb = rest
        .split(|c: char| c == ',' || c.is_whitespace())
        .next()?
        .trim_end_matches('.');
    let action = match verb {
        "started" => SchedAction::Started,
        "resumed" => SchedAction::Resumed,
        "paused" => SchedAction::Paused,
        "finished" => SchedAction::Finished,
        _ => return None,
    };
    Some(SchedEvent {
        number,
        pid,
        action,
        timestamp: None,
        priority: None,
    })
}

/// Parses `Process {num} (PID…{pid})`, returning the remainder after `)`.
fn match_header(line: &str, style: PidStyle) -> Option<(u32, u32, &str)> {
    let rest = line.strip_prefix("Process ")?;
    let (number, rest) = take_number::<u32>(rest)?;
    let rest = rest.strip_prefix(" (PID")?;
    let rest = match style {
        PidStyle::Equals => rest.strip_prefix('=')?,
        PidStyle::Space => rest.strip_prefix(' ')?,
    };
    let (pid, rest) = take_number::<u32>(rest)?;
    let rest = rest.strip_prefix(')')?;
    Some((number, pid, rest))
}

/// Splits a leading run of ASCII digits off `s` and parses it.
fn take_number<T: FromStr>(s: &str) -> Option<(T, &str)> {
    let digits_end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    if digits_end == 0 {
        return None;
    }
    let value = s[..digits_end].parse().ok()?;
    Some((value, &s[digits_end..]))
}
