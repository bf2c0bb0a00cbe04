//! Sensor entry point
//!
//! Reads raw sample values from a source file and emits tagged readings to
//! the monitor's ingestion channel at a fixed cadence.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use aquamon::channel;
use aquamon::emitter::SensorEmitter;
use aquamon::SensorType;

#[derive(Parser, Debug)]
#[command(
    name = "sensor",
    version,
    about = "Emits tagged sensor readings to the monitor's ingestion channel"
)]
struct Args {
    /// Sensor type: 1/temperature or 2/ph
    #[arg(short = 's', long = "sensor-type")]
    sensor_type: SensorType,

    /// Seconds to pause between readings
    #[arg(short = 't', long = "interval", default_value_t = 1)]
    interval: u64,

    /// Line-oriented file of raw sample values
    #[arg(short = 'f', long = "file")]
    file: PathBuf,

    /// Path of the named pipe the monitor reads from
    #[arg(short = 'p', long = "pipe")]
    pipe: PathBuf,
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

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let source = File::open(&args.file)
        .map_err(|err| format!("failed to open sample file {}: {err}", args.file.display()))?;

    // Blocks until the monitor opens the reading end.
    let channel = channel::open_writer(&args.pipe)?;
    log::info!("ingestion channel opened: {}", args.pipe.display());

    let emitter = SensorEmitter::new(args.sensor_type, Duration::from_secs(args.interval));
    let stats = emitter.run(BufReader::new(source), channel)?;
    log::info!(
        "{} sensor done: {} readings emitted, {} skipped",
        args.sensor_type.name(),
        stats.emitted,
        stats.skipped,
    );
    Ok(())
}
