use serde::Serialize;

use crate::simulator::{GaugeState, TEMPERATURE_MAX, TEMPERATURE_MIN};

/// Display-ready view of a single gauge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeReadout {
    pub label: &'static str,
    pub value: String,
    pub fill_percent: f64,
}

pub fn temperature_fill(gauges: &GaugeState) -> f64 {
    (gauges.temperature - TEMPERATURE_MIN) / (TEMPERATURE_MAX - TEMPERATURE_MIN) * 100.0
}

pub fn readouts(gauges: &GaugeState) -> [GaugeReadout; 3] {
    [
        GaugeReadout {
            label: "Temperature",
            value: format!("{:.1}°F", gauges.temperature),
            fill_percent: temperature_fill(gauges),
        },
        GaugeReadout {
            label: "Flood Risk",
            value: format!("{:.0}%", gauges.flood_risk),
            fill_percent: gauges.flood_risk,
        },
        GaugeReadout {
            label: "Air Quality",
            value: format!("{:.0}%", gauges.air_quality),
            fill_percent: gauges.air_quality,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_readouts() {
        let [temperature, flood, air] = readouts(&GaugeState::default());
        assert_eq!(temperature.value, "72.0°F");
        assert!((temperature.fill_percent - 48.0).abs() < 1e-9);
        assert_eq!(flood.value, "45%");
        assert_eq!(air.value, "65%");
        assert_eq!(air.fill_percent, 65.0);
    }

    #[test]
    fn temperature_fill_spans_the_domain() {
        let mut gauges = GaugeState::default();
        gauges.temperature = TEMPERATURE_MIN;
        assert_eq!(temperature_fill(&gauges), 0.0);
        gauges.temperature = TEMPERATURE_MAX;
        assert_eq!(temperature_fill(&gauges), 100.0);
    }
}
