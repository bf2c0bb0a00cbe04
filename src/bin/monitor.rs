//! Monitor entry point
//!
//! Creates the ingestion channel if needed, then runs the demultiplexing
//! pipeline until the sensor side closes the stream.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use aquamon::{channel, pipeline, MonitorError, PipelineConfig};

#[derive(Parser, Debug)]
#[command(
    name = "monitor",
    version,
    about = "Demultiplexes tagged sensor readings into per-sensor record logs"
)]
struct Args {
    /// Capacity shared by both sensor queues
    #[arg(short = 'b', long = "buffer-size")]
    buffer_size: NonZeroUsize,

    /// Path of the named pipe the sensors write to
    #[arg(short = 'p', long = "pipe")]
    pipe: PathBuf,

    /// Append-only log for in-range temperature readings
    #[arg(short = 't', long = "temperature-log")]
    temperature_log: PathBuf,

    /// Append-only log for in-range pH readings
    #[arg(long = "ph-log")]
    ph_log: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), MonitorError> {
    channel::ensure_fifo(&args.pipe)?;

    let config = PipelineConfig {
        queue_capacity: args.buffer_size,
        channel_path: args.pipe.clone(),
        temperature_log: args.temperature_log.clone(),
        ph_log: args.ph_log.clone(),
    };

    let report = pipeline::run(&config)?;
    log::info!(
        "monitor finished: {} temperature and {} pH readings recorded, {} alerts, {} malformed",
        report.temperature.recorded,
        report.ph.recorded,
        report.temperature.alerts + report.ph.alerts,
        report.collector.malformed,
    );
    Ok(())
}
