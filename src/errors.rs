//! Error Types for the Monitoring Pipeline
//!
//! ## Taxonomy
//!
//! The crate distinguishes three kinds of failure:
//!
//! 1. **Fatal/startup** ([`MonitorError`]): the ingestion channel or an output
//!    log cannot be opened, or a pipeline thread cannot be spawned. These
//!    abort the run; there is no retry.
//!
//! 2. **Recoverable/steady-state**: a malformed record, a mis-routed record at
//!    a worker, or a failed log append. These are logged and contained within
//!    the worker that hit them; they never terminate the pipeline or block
//!    peer workers.
//!
//! 3. **Domain signal, not an error** ([`ValidationError::OutOfRange`]): an
//!    out-of-range reading. It raises an alert and is not persisted, but the
//!    loop continues.
//!
//! [`ValidationError`] is kept small and `Copy` since it is returned on the
//! per-reading hot path.

use std::io;

use thiserror::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Per-reading validation failures
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    /// Value outside the acceptable range for its sensor type
    #[error("value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// The reading that failed validation
        value: f32,
        /// Lower bound of the acceptable range (inclusive)
        min: f32,
        /// Upper bound of the acceptable range (inclusive)
        max: f32,
    },

    /// Value is not a finite number (NaN or infinity)
    #[error("invalid value: not a finite number")]
    InvalidValue,
}

/// Fatal pipeline errors
///
/// Any of these terminates the whole monitor process with a diagnostic.
#[derive(Error, Debug)]
pub enum MonitorError {
    /// The ingestion channel could not be created
    #[error("failed to create ingestion channel {path}: {source}")]
    ChannelCreate {
        /// Channel path as given in the configuration
        path: String,
        /// Underlying OS error
        source: io::Error,
    },

    /// The ingestion channel could not be opened
    #[error("failed to open ingestion channel {path}: {source}")]
    ChannelOpen {
        /// Channel path as given in the configuration
        path: String,
        /// Underlying OS error
        source: io::Error,
    },

    /// An output record log could not be opened in append mode
    #[error("failed to open record log {path}: {source}")]
    LogOpen {
        /// Log path as given in the configuration
        path: String,
        /// Underlying OS error
        source: io::Error,
    },

    /// A pipeline thread could not be spawned
    #[error("failed to spawn {name} thread: {source}")]
    Spawn {
        /// Thread name ("collector", "temperature-worker", "ph-worker")
        name: &'static str,
        /// Underlying OS error
        source: io::Error,
    },

    /// A pipeline thread panicked before it could report its stats
    #[error("{name} thread panicked")]
    ThreadPanicked {
        /// Thread name
        name: &'static str,
    },

    /// Reading from the ingestion channel failed mid-stream
    #[error("ingestion channel read failed: {0}")]
    ChannelRead(#[from] io::Error),
}
