//! Demultiplexing Collector
//!
//! ## Overview
//!
//! The collector converts the unstructured byte stream on the ingestion
//! channel into a sequence of routed [`Reading`]s. It reads the stream line
//! by line (a line is the record unit), parses each line once at this
//! boundary, and routes the tagged result to the queue of the matching
//! sensor type:
//!
//! ```text
//! "1:25.00\n2:7.10\nabc:12\n"
//!        │
//!        ▼ parse + route
//! 1:25.00 ──→ temperature queue
//! 2:7.10  ──→ pH queue
//! abc:12  ──→ error log, discarded
//! ```
//!
//! A malformed record never blocks or terminates the pipeline; it is logged
//! to the operator console and skipped.
//!
//! ## Shutdown
//!
//! When the ingestion stream signals end-of-input (the producer closed its
//! end), the collector closes both queues. The workers drain whatever is
//! still buffered and then stop on their own, so termination is
//! deterministic; no timed delay is involved. A mid-stream read error takes
//! the same path before surfacing the error to the caller.

use std::io::{self, BufRead};
use std::sync::Arc;

use crate::queue::BoundedQueue;
use crate::reading::Reading;

/// Counters reported by one collector run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CollectorStats {
    /// Readings routed to the temperature queue
    pub routed_temperature: u64,
    /// Readings routed to the pH queue
    pub routed_ph: u64,
    /// Lines logged and discarded as malformed
    pub malformed: u64,
}

/// Routes incoming records to the per-sensor queues
///
/// Owns write access to both queues; each worker owns read access to exactly
/// one. The queues are the only state shared with the workers.
pub struct Collector {
    temperature: Arc<BoundedQueue<Reading>>,
    ph: Arc<BoundedQueue<Reading>>,
}

impl Collector {
    /// Create a collector feeding the two sensor queues
    pub fn new(temperature: Arc<BoundedQueue<Reading>>, ph: Arc<BoundedQueue<Reading>>) -> Self {
        Self { temperature, ph }
    }

    /// Consume the ingestion stream until end-of-input
    ///
    /// Blocks in `put` while the target queue is full; that backpressure is
    /// what keeps a slow worker from losing readings. Always closes both
    /// queues before returning, on success and on read error alike.
    pub fn run<R: BufRead>(&self, input: R) -> io::Result<CollectorStats> {
        let mut stats = CollectorStats::default();

        for line in input.lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    self.shutdown();
                    return Err(err);
                }
            };

            match Reading::parse(&line) {
                Reading::Malformed(raw) => {
                    log::error!("incorrect measurement received, discarding {raw:?}");
                    stats.malformed += 1;
                }
                reading @ Reading::Temperature(_) => {
                    if self.temperature.put(reading).is_err() {
                        log::warn!("temperature queue closed, stopping collector");
                        break;
                    }
                    stats.routed_temperature += 1;
                }
                reading @ Reading::Ph(_) => {
                    if self.ph.put(reading).is_err() {
                        log::warn!("ph queue closed, stopping collector");
                        break;
                    }
                    stats.routed_ph += 1;
                }
            }
        }

        self.shutdown();
        Ok(stats)
    }

    fn shutdown(&self) {
        log::info!("ingestion stream ended, closing sensor queues");
        self.temperature.close();
        self.ph.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::SensorType;
    use std::io::Cursor;
    use std::num::NonZeroUsize;

    fn queues(capacity: usize) -> (Arc<BoundedQueue<Reading>>, Arc<BoundedQueue<Reading>>) {
        let capacity = NonZeroUsize::new(capacity).unwrap();
        (
            Arc::new(BoundedQueue::new(capacity)),
            Arc::new(BoundedQueue::new(capacity)),
        )
    }

    fn drain(queue: &BoundedQueue<Reading>) -> Vec<Reading> {
        let mut readings = Vec::new();
        while let Some(reading) = queue.get() {
            readings.push(reading);
        }
        readings
    }

    #[test]
    fn routes_by_sensor_type() {
        let (temperature, ph) = queues(8);
        let collector = Collector::new(Arc::clone(&temperature), Arc::clone(&ph));

        let stats = collector
            .run(Cursor::new("1:25.00\n2:7.10\n1:30.00\n"))
            .unwrap();

        assert_eq!(stats.routed_temperature, 2);
        assert_eq!(stats.routed_ph, 1);
        assert_eq!(stats.malformed, 0);
        assert_eq!(
            drain(&temperature),
            vec![Reading::Temperature(25.0), Reading::Temperature(30.0)]
        );
        assert_eq!(drain(&ph), vec![Reading::Ph(7.1)]);
    }

    #[test]
    fn malformed_lines_are_skipped_without_blocking() {
        let (temperature, ph) = queues(8);
        let collector = Collector::new(Arc::clone(&temperature), Arc::clone(&ph));

        let stats = collector
            .run(Cursor::new("abc:12\n3:5.0\n1:25.00\n"))
            .unwrap();

        assert_eq!(stats.malformed, 2);
        assert_eq!(stats.routed_temperature, 1);
        // The valid line after the garbage still arrived.
        assert_eq!(drain(&temperature), vec![Reading::Temperature(25.0)]);
        assert!(drain(&ph).is_empty());
    }

    #[test]
    fn end_of_input_closes_both_queues() {
        let (temperature, ph) = queues(4);
        let collector = Collector::new(Arc::clone(&temperature), Arc::clone(&ph));

        collector.run(Cursor::new("")).unwrap();

        assert!(temperature.is_closed());
        assert!(ph.is_closed());
        assert_eq!(temperature.get(), None);
        assert_eq!(ph.get(), None);
    }

    #[test]
    fn routed_readings_carry_parsed_values() {
        let (temperature, ph) = queues(4);
        let collector = Collector::new(Arc::clone(&temperature), Arc::clone(&ph));

        collector.run(Cursor::new("2:6.50\n")).unwrap();

        let reading = ph.get().unwrap();
        assert_eq!(reading.sensor_type(), Some(SensorType::Ph));
        assert_eq!(reading.value(), Some(6.5));
    }
}
