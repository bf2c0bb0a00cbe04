//! Pipeline wiring and lifecycle
//!
//! ## Overview
//!
//! [`run`] assembles and drives the whole monitoring pipeline: it opens the
//! ingestion channel and both record logs (fatal on failure), builds the two
//! bounded queues, spawns the collector and the two workers as named OS
//! threads, and joins all three deterministically once the ingestion stream
//! ends.
//!
//! ```text
//! channel ─→ [collector] ─→ temperature queue ─→ [temperature-worker]
//!                       └─→ pH queue          ─→ [ph-worker]
//! ```
//!
//! The threads communicate only through the queues. Shutdown is driven by
//! the collector closing both queues at end-of-input; each worker drains its
//! queue and returns its stats, and `run` returns once every thread has been
//! joined. There are no timed delays anywhere in the teardown path.

use std::io::BufReader;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use crate::alert::ConsoleAlerts;
use crate::channel;
use crate::collector::{Collector, CollectorStats};
use crate::errors::MonitorError;
use crate::queue::BoundedQueue;
use crate::reading::{Reading, SensorType};
use crate::recorder::RecordLog;
use crate::validators::{PhValidator, TemperatureValidator};
use crate::worker::{SensorWorker, WorkerStats};

/// Configuration consumed by the core pipeline
///
/// Owned and parsed by the bootstrap layer (the `monitor` binary); the core
/// reads nothing else from the environment.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Capacity shared by both sensor queues
    pub queue_capacity: NonZeroUsize,
    /// Path of the ingestion channel
    pub channel_path: PathBuf,
    /// Append-only log for in-range temperature readings
    pub temperature_log: PathBuf,
    /// Append-only log for in-range pH readings
    pub ph_log: PathBuf,
}

/// Aggregated counters from one pipeline run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MonitorReport {
    /// Collector counters
    pub collector: CollectorStats,
    /// Temperature worker counters
    pub temperature: WorkerStats,
    /// pH worker counters
    pub ph: WorkerStats,
}

/// Run the pipeline until the ingestion stream ends
///
/// Blocks the calling thread for the lifetime of the run. Returns the
/// aggregated report once the collector has seen end-of-input and both
/// workers have drained their queues.
pub fn run(config: &PipelineConfig) -> Result<MonitorReport, MonitorError> {
    let input = channel::open_reader(&config.channel_path)?;
    let temperature_log = RecordLog::open(&config.temperature_log)?;
    let ph_log = RecordLog::open(&config.ph_log)?;

    let temperature_queue = Arc::new(BoundedQueue::<Reading>::new(config.queue_capacity));
    let ph_queue = Arc::new(BoundedQueue::<Reading>::new(config.queue_capacity));
    log::info!(
        "pipeline starting: queue capacity {} per sensor",
        config.queue_capacity
    );

    let collector = Collector::new(Arc::clone(&temperature_queue), Arc::clone(&ph_queue));
    let temperature_worker = SensorWorker::new(
        SensorType::Temperature,
        temperature_queue,
        TemperatureValidator::default(),
        temperature_log,
        ConsoleAlerts,
    );
    let ph_worker = SensorWorker::new(
        SensorType::Ph,
        ph_queue,
        PhValidator::default(),
        ph_log,
        ConsoleAlerts,
    );

    thread::scope(|scope| {
        let collector_handle = thread::Builder::new()
            .name("collector".into())
            .spawn_scoped(scope, move || collector.run(BufReader::new(input)))
            .map_err(|source| MonitorError::Spawn { name: "collector", source })?;
        let temperature_handle = thread::Builder::new()
            .name("temperature-worker".into())
            .spawn_scoped(scope, move || temperature_worker.run())
            .map_err(|source| MonitorError::Spawn { name: "temperature-worker", source })?;
        let ph_handle = thread::Builder::new()
            .name("ph-worker".into())
            .spawn_scoped(scope, move || ph_worker.run())
            .map_err(|source| MonitorError::Spawn { name: "ph-worker", source })?;

        let collector_stats = collector_handle
            .join()
            .map_err(|_| MonitorError::ThreadPanicked { name: "collector" })??;
        let temperature = temperature_handle
            .join()
            .map_err(|_| MonitorError::ThreadPanicked { name: "temperature-worker" })?;
        let ph = ph_handle
            .join()
            .map_err(|_| MonitorError::ThreadPanicked { name: "ph-worker" })?;

        Ok(MonitorReport {
            collector: collector_stats,
            temperature,
            ph,
        })
    })
}
