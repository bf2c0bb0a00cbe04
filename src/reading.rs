//! Sensor Reading Data Model and Wire Protocol
//!
//! ## Overview
//!
//! The ingestion channel carries a line-based textual protocol. Each line is
//! one record:
//!
//! ```text
//! <sensorType>:<value>\n
//! ```
//!
//! where `sensorType` is `1` (temperature) or `2` (pH) and `value` is any
//! valid decimal representation. The emitter renders two fractional digits,
//! but the parser does not depend on that.
//!
//! ## Parse Once, Route Typed
//!
//! Readings are parsed exactly once, at the collector boundary, into a tagged
//! [`Reading`] variant. Everything downstream of the queues works with the
//! structured value; workers never re-derive the sensor type from a string
//! prefix. A line that does not match `{1,2}:<number>` becomes
//! [`Reading::Malformed`] carrying the raw text, so the operator log can show
//! exactly what arrived.

use std::fmt;
use std::str::FromStr;

/// Sensor type enumeration
///
/// Maps to the wire tag, a validator, and an output record log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SensorType {
    /// Water temperature in degrees Celsius
    Temperature = 1,
    /// Acidity on the pH scale
    Ph = 2,
}

impl SensorType {
    /// Wire tag used on the ingestion channel
    pub const fn tag(&self) -> u8 {
        *self as u8
    }

    /// Lowercase name for log messages and thread names
    pub const fn name(&self) -> &'static str {
        match self {
            SensorType::Temperature => "temperature",
            SensorType::Ph => "ph",
        }
    }

    /// Display label used in alert lines
    pub const fn label(&self) -> &'static str {
        match self {
            SensorType::Temperature => "Temperature",
            SensorType::Ph => "pH",
        }
    }

    /// Unit of measurement
    pub const fn unit(&self) -> &'static str {
        match self {
            SensorType::Temperature => "°C",
            SensorType::Ph => "pH",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "1" => Some(SensorType::Temperature),
            "2" => Some(SensorType::Ph),
            _ => None,
        }
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SensorType {
    type Err = String;

    /// Accepts the wire tag or the lowercase name, for CLI use
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "1" | "temperature" => Ok(SensorType::Temperature),
            "2" | "ph" => Ok(SensorType::Ph),
            other => Err(format!(
                "invalid sensor type {other:?}: expected 1/temperature or 2/ph"
            )),
        }
    }
}

/// One parsed sensor observation
///
/// Produced by [`Reading::parse`] from one line of the ingestion stream.
/// Only the tagged variants travel through the queues; `Malformed` records
/// are logged and discarded at the collector.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    /// Temperature reading in degrees Celsius
    Temperature(f32),
    /// pH reading
    Ph(f32),
    /// Line that did not match the wire protocol, kept verbatim
    Malformed(String),
}

impl Reading {
    /// Parse one line of the ingestion stream
    ///
    /// Tolerates a trailing `\r` and surrounding whitespace on the value
    /// field. Non-finite values (NaN, infinity) are treated as malformed
    /// since no sensor produces them.
    pub fn parse(line: &str) -> Self {
        let line = line.strip_suffix('\r').unwrap_or(line);

        let Some((tag, raw)) = line.split_once(':') else {
            return Reading::Malformed(line.to_owned());
        };
        let Some(sensor_type) = SensorType::from_tag(tag) else {
            return Reading::Malformed(line.to_owned());
        };

        match raw.trim().parse::<f32>() {
            Ok(value) if value.is_finite() => match sensor_type {
                SensorType::Temperature => Reading::Temperature(value),
                SensorType::Ph => Reading::Ph(value),
            },
            _ => Reading::Malformed(line.to_owned()),
        }
    }

    /// Sensor type of a well-formed reading
    pub fn sensor_type(&self) -> Option<SensorType> {
        match self {
            Reading::Temperature(_) => Some(SensorType::Temperature),
            Reading::Ph(_) => Some(SensorType::Ph),
            Reading::Malformed(_) => None,
        }
    }

    /// Numeric payload of a well-formed reading
    pub fn value(&self) -> Option<f32> {
        match self {
            Reading::Temperature(value) | Reading::Ph(value) => Some(*value),
            Reading::Malformed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_temperature() {
        assert_eq!(Reading::parse("1:25.00"), Reading::Temperature(25.0));
        assert_eq!(Reading::parse("1:31.6"), Reading::Temperature(31.6));
    }

    #[test]
    fn parse_ph() {
        assert_eq!(Reading::parse("2:7"), Reading::Ph(7.0));
        assert_eq!(Reading::parse("2:6.95"), Reading::Ph(6.95));
    }

    #[test]
    fn parse_tolerates_carriage_return() {
        assert_eq!(Reading::parse("1:22.50\r"), Reading::Temperature(22.5));
    }

    #[test]
    fn parse_tolerates_any_decimal_form() {
        assert_eq!(Reading::parse("1:2.5e1"), Reading::Temperature(25.0));
        assert_eq!(Reading::parse("2: 7.0 "), Reading::Ph(7.0));
    }

    #[test]
    fn unknown_tag_is_malformed() {
        assert_eq!(Reading::parse("3:5.0"), Reading::Malformed("3:5.0".into()));
    }

    #[test]
    fn garbage_is_malformed() {
        assert_eq!(Reading::parse("abc:12"), Reading::Malformed("abc:12".into()));
        assert_eq!(Reading::parse("no delimiter"), Reading::Malformed("no delimiter".into()));
        assert_eq!(Reading::parse("1:"), Reading::Malformed("1:".into()));
        assert_eq!(Reading::parse("1:nan"), Reading::Malformed("1:nan".into()));
    }

    #[test]
    fn accessors() {
        let reading = Reading::parse("2:7.5");
        assert_eq!(reading.sensor_type(), Some(SensorType::Ph));
        assert_eq!(reading.value(), Some(7.5));
        assert_eq!(Reading::Malformed("x".into()).sensor_type(), None);
        assert_eq!(Reading::Malformed("x".into()).value(), None);
    }

    #[test]
    fn sensor_type_from_str() {
        assert_eq!("1".parse::<SensorType>().unwrap(), SensorType::Temperature);
        assert_eq!("PH".parse::<SensorType>().unwrap(), SensorType::Ph);
        assert!("4".parse::<SensorType>().is_err());
    }
}
