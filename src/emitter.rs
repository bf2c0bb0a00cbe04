//! Sensor-side reading emitter
//!
//! The emitter is the producing collaborator of the pipeline: it tokenizes a
//! line-oriented source file of raw sample values and writes one tagged
//! record per sample to the ingestion channel, pausing a configured interval
//! between writes. Negative samples are skipped (the sensors cannot produce
//! them, so a negative value means a corrupt source line), as are lines that
//! do not parse as a number at all.
//!
//! Wire format per record: `<tag>:<value with two fractional digits>\n`.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::reading::SensorType;

/// Counters reported by one emitter run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EmitterStats {
    /// Records written to the channel
    pub emitted: u64,
    /// Source lines skipped (negative or unparseable)
    pub skipped: u64,
}

/// Emits tagged readings from a sample source to the ingestion channel
#[derive(Debug, Clone)]
pub struct SensorEmitter {
    sensor_type: SensorType,
    interval: Duration,
}

impl SensorEmitter {
    /// Create an emitter for one sensor type
    pub fn new(sensor_type: SensorType, interval: Duration) -> Self {
        Self {
            sensor_type,
            interval,
        }
    }

    /// Emit every usable sample from `source` to `channel`
    ///
    /// Each record is flushed before the inter-write pause so the monitor
    /// sees readings at the configured cadence, not in batches.
    pub fn run<R: BufRead, W: Write>(&self, source: R, mut channel: W) -> io::Result<EmitterStats> {
        let mut stats = EmitterStats::default();

        for line in source.lines() {
            let line = line?;
            let value: f32 = match line.trim().parse() {
                Ok(value) => value,
                Err(_) => {
                    log::warn!("skipping unreadable sample {line:?}");
                    stats.skipped += 1;
                    continue;
                }
            };

            if value < 0.0 {
                stats.skipped += 1;
                continue;
            }

            writeln!(channel, "{}:{:.2}", self.sensor_type.tag(), value)?;
            channel.flush()?;
            stats.emitted += 1;
            log::debug!("sensor sends {}: {value:.2}", self.sensor_type.name());

            if !self.interval.is_zero() {
                thread::sleep(self.interval);
            }
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn emit(sensor_type: SensorType, source: &str) -> (EmitterStats, String) {
        let emitter = SensorEmitter::new(sensor_type, Duration::ZERO);
        let mut channel = Vec::new();
        let stats = emitter.run(Cursor::new(source), &mut channel).unwrap();
        (stats, String::from_utf8(channel).unwrap())
    }

    #[test]
    fn emits_tagged_two_decimal_records() {
        let (stats, wire) = emit(SensorType::Temperature, "25.5\n31.6\n");
        assert_eq!(wire, "1:25.50\n1:31.60\n");
        assert_eq!(stats.emitted, 2);
    }

    #[test]
    fn ph_uses_tag_two() {
        let (_, wire) = emit(SensorType::Ph, "7\n");
        assert_eq!(wire, "2:7.00\n");
    }

    #[test]
    fn skips_negative_samples() {
        let (stats, wire) = emit(SensorType::Temperature, "25.0\n-3.2\n26.0\n");
        assert_eq!(wire, "1:25.00\n1:26.00\n");
        assert_eq!(stats, EmitterStats { emitted: 2, skipped: 1 });
    }

    #[test]
    fn skips_unreadable_samples() {
        let (stats, wire) = emit(SensorType::Ph, "oops\n7.2\n");
        assert_eq!(wire, "2:7.20\n");
        assert_eq!(stats.skipped, 1);
    }
}
