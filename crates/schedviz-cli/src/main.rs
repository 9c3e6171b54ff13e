use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use schedviz_log::reconstruct::{
    DEFAULT_QUANTUM_MS, reconstruct, reconstruct_fifo, reconstruct_lifo, reconstruct_round_robin,
};
use schedviz_log::{LogFormat, Timeline};

#[derive(Parser)]
#[command(name = "schedviz")]
#[command(about = "Scheduler simulation log timeline tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct one scheduler log and emit its timeline as JSON
    Parse {
        /// Log format: fifo, lifo, or rr
        #[arg(short, long)]
        format: LogFormat,
        /// Round-robin time quantum in ms
        #[arg(long, default_value_t = DEFAULT_QUANTUM_MS)]
        quantum: u64,
        /// Path to the scheduler log file
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
    /// Reconstruct all three scheduler runs into one chart payload
    Chart {
        /// FIFO scheduler log
        #[arg(long, default_value = "fifo_scheduler.log")]
        fifo: PathBuf,
        /// LIFO scheduler log
        #[arg(long, default_value = "lifo_scheduler.log")]
        lifo: PathBuf,
        /// Round-robin scheduler log
        #[arg(long, default_value = "rr_scheduler.log")]
        rr: PathBuf,
        /// Round-robin time quantum in ms
        #[arg(long, default_value_t = DEFAULT_QUANTUM_MS)]
        quantum: u64,
        /// Write the payload here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Parse {
            format,
            quantum,
            path,
        } => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let run = reconstruct(&content, *format, *quantum)?;
            let timeline = Timeline::new(run_title(*format), &run);
            println!("{}", serde_json::to_string_pretty(&timeline)?);
        }
        Commands::Chart {
            fifo,
            lifo,
            rr,
            quantum,
            output,
        } => {
            let fifo_run = read_log(fifo)
                .map(|text| reconstruct_fifo(&text))
                .unwrap_or_default();
            let lifo_run = read_log(lifo)
                .map(|text| reconstruct_lifo(&text))
                .unwrap_or_default();
            let rr_run = match read_log(rr) {
                Some(text) => reconstruct_round_robin(&text, *quantum)?,
                None => Default::default(),
            };

            let timelines = vec![
                Timeline::new(run_title(LogFormat::Fifo), &fifo_run),
                Timeline::new(run_title(LogFormat::Lifo), &lifo_run),
                Timeline::new(run_title(LogFormat::RoundRobin), &rr_run),
            ];
            for timeline in &timelines {
                if timeline.is_empty() {
                    log::info!("{}: no data", timeline.title);
                }
                if !timeline.unresolved.is_empty() {
                    log::warn!(
                        "{}: {} unresolved slice(s) left out of the chart",
                        timeline.title,
                        timeline.unresolved.len()
                    );
                }
            }

            let payload = serde_json::json!({
                "schema_version": schedviz_log::SCHEMA_VERSION,
                "timelines": timelines,
            });
            let rendered = serde_json::to_string_pretty(&payload)?;
            match output {
                Some(path) => fs::write(path, rendered)
                    .with_context(|| format!("writing {}", path.display()))?,
                None => println!("{rendered}"),
            }
        }
    }
    Ok(())
}

/// Reads one run's log; a missing or unreadable file downgrades to an empty
/// run so the other runs still chart.
fn read_log(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(err) => {
            log::warn!(
                "could not read {}: {err}; treating run as empty",
                path.display()
            );
            None
        }
    }
}

fn run_title(format: LogFormat) -> &'static str {
    match format {
        LogFormat::Fifo => "FIFO Scheduler Process Execution Timeline",
        LogFormat::Lifo => "LIFO Scheduler Process Execution Timeline",
        LogFormat::RoundRobin => "Round-Robin Scheduler Process Execution Timeline",
    }
}
