//! Environmental monitoring pipeline for temperature and pH sensor streams
//!
//! Aquamon ingests a shared stream of tagged sensor readings from a named
//! channel, demultiplexes them into per-sensor bounded queues, validates each
//! reading against an acceptable range, and durably records valid readings
//! while raising alerts for out-of-range ones.
//!
//! The data flow is a classic producer-consumer arrangement across three
//! long-lived threads:
//!
//! ```text
//! emitter → ingestion channel → Collector → BoundedQueue ×2 → SensorWorker ×2
//!                                   ↓                              ↓
//!                              malformed log              record log / alerts
//! ```
//!
//! ```no_run
//! use aquamon::{pipeline, PipelineConfig};
//! use std::num::NonZeroUsize;
//!
//! let config = PipelineConfig {
//!     queue_capacity: NonZeroUsize::new(8).unwrap(),
//!     channel_path: "/tmp/aquamon.pipe".into(),
//!     temperature_log: "temperature.log".into(),
//!     ph_log: "ph.log".into(),
//! };
//!
//! let report = pipeline::run(&config)?;
//! println!("recorded {} temperature readings", report.temperature.recorded);
//! # Ok::<(), aquamon::MonitorError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod alert;
pub mod channel;
pub mod collector;
pub mod emitter;
pub mod errors;
pub mod pipeline;
pub mod queue;
pub mod reading;
pub mod recorder;
pub mod validators;
pub mod worker;

// Public API
pub use errors::{MonitorError, ValidationError, ValidationResult};
pub use pipeline::{MonitorReport, PipelineConfig};
pub use queue::BoundedQueue;
pub use reading::{Reading, SensorType};
pub use validators::{PhValidator, TemperatureValidator, Validator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
