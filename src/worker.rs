//! Validating Sensor Workers
//!
//! ## Overview
//!
//! One worker exists per sensor type. Each continuously dequeues from its
//! bounded queue, validates the reading against its range policy, and either
//! appends a timestamped record to its log or raises an alert:
//!
//! ```text
//! queue.get() ──→ tag check ──→ validate ──→ in range  → record log (flushed)
//!                     │                  └─→ out of range → alert sink
//!                     └─→ mis-routed → warn, skip
//! ```
//!
//! The tag check is defensive. The collector routes by sensor type, so a
//! mismatched or malformed record here indicates a demultiplexing bug; it is
//! logged rather than silently dropped.
//!
//! ## Error containment
//!
//! A failed log append is a recoverable event: the worker logs the failure
//! with the record's value preserved in the message and keeps consuming.
//! Nothing a worker encounters in steady state terminates the pipeline or
//! blocks its peer. The loop ends only when the queue reports closed and
//! drained.

use std::sync::Arc;

use crate::alert::AlertSink;
use crate::errors::ValidationError;
use crate::queue::BoundedQueue;
use crate::reading::{Reading, SensorType};
use crate::recorder::RecordLog;
use crate::validators::Validator;

/// Counters reported by one worker run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorkerStats {
    /// In-range readings appended to the record log
    pub recorded: u64,
    /// Out-of-range readings surfaced as alerts
    pub alerts: u64,
    /// Readings discarded (mis-routed, invalid, or append failure)
    pub discarded: u64,
}

/// Consumer side of one sensor pipeline
pub struct SensorWorker<V: Validator, A: AlertSink> {
    sensor_type: SensorType,
    queue: Arc<BoundedQueue<Reading>>,
    validator: V,
    records: RecordLog,
    alerts: A,
}

impl<V: Validator, A: AlertSink> SensorWorker<V, A> {
    /// Create a worker for one sensor type
    pub fn new(
        sensor_type: SensorType,
        queue: Arc<BoundedQueue<Reading>>,
        validator: V,
        records: RecordLog,
        alerts: A,
    ) -> Self {
        Self {
            sensor_type,
            queue,
            validator,
            records,
            alerts,
        }
    }

    /// Consume the queue until it is closed and drained
    pub fn run(mut self) -> WorkerStats {
        let mut stats = WorkerStats::default();

        while let Some(reading) = self.queue.get() {
            let value = match (self.sensor_type, &reading) {
                (SensorType::Temperature, Reading::Temperature(value)) => *value,
                (SensorType::Ph, Reading::Ph(value)) => *value,
                _ => {
                    log::warn!(
                        "{} worker received mis-routed record {reading:?}, skipping",
                        self.sensor_type.name()
                    );
                    stats.discarded += 1;
                    continue;
                }
            };

            match self.validator.validate(value) {
                Ok(()) => match self.records.append(value) {
                    Ok(()) => stats.recorded += 1,
                    Err(err) => {
                        // Recoverable: surface the failure with the record
                        // preserved in the operator log, then keep consuming.
                        log::error!(
                            "failed to append {} record {value:.6} to {}: {err}",
                            self.sensor_type.name(),
                            self.records.path().display()
                        );
                        stats.discarded += 1;
                    }
                },
                Err(ValidationError::OutOfRange { .. }) => {
                    self.alerts.alert(self.sensor_type, value);
                    stats.alerts += 1;
                }
                Err(err) => {
                    log::warn!(
                        "{} reading rejected: {err}",
                        self.sensor_type.name()
                    );
                    stats.discarded += 1;
                }
            }
        }

        log::info!("{} worker drained, stopping", self.sensor_type.name());
        stats
    }
}
