//! Alert surface for out-of-range readings
//!
//! An alert is surfaced immediately and never persisted. The trait exists so
//! workers can be exercised in tests without capturing stdout.

use crate::reading::SensorType;

/// Sink for out-of-range alerts
pub trait AlertSink {
    /// Surface one alert for an out-of-range reading
    fn alert(&mut self, sensor_type: SensorType, value: f32);
}

impl<A: AlertSink + ?Sized> AlertSink for &mut A {
    fn alert(&mut self, sensor_type: SensorType, value: f32) {
        (**self).alert(sensor_type, value);
    }
}

/// Writes alerts to the operator console
///
/// Output format: `Alert: Temperature out of range! 35.0`
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleAlerts;

impl AlertSink for ConsoleAlerts {
    fn alert(&mut self, sensor_type: SensorType, value: f32) {
        println!("Alert: {} out of range! {:.1}", sensor_type.label(), value);
    }
}

/// Collects alerts in memory, for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryAlerts {
    /// Alerts in the order they were raised
    pub raised: Vec<(SensorType, f32)>,
}

impl AlertSink for MemoryAlerts {
    fn alert(&mut self, sensor_type: SensorType, value: f32) {
        self.raised.push((sensor_type, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_records_in_order() {
        let mut alerts = MemoryAlerts::default();
        alerts.alert(SensorType::Temperature, 35.0);
        alerts.alert(SensorType::Ph, 9.0);

        assert_eq!(
            alerts.raised,
            vec![(SensorType::Temperature, 35.0), (SensorType::Ph, 9.0)]
        );
    }
}
