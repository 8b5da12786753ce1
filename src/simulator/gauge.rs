use serde::{Deserialize, Serialize};

use super::element::ElementEffect;

pub const TEMPERATURE_MIN: f64 = 60.0;
pub const TEMPERATURE_MAX: f64 = 85.0;
pub const PERCENT_MIN: f64 = 0.0;
pub const PERCENT_MAX: f64 = 100.0;

/// Environmental readings driven by the element counts.
///
/// Temperature lives in `[60, 85]` degrees, flood risk and air quality in
/// `[0, 100]` percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeState {
    pub temperature: f64,
    pub flood_risk: f64,
    pub air_quality: f64,
}

impl Default for GaugeState {
    fn default() -> Self {
        Self {
            temperature: 72.0,
            flood_risk: 45.0,
            air_quality: 65.0,
        }
    }
}

impl GaugeState {
    /// Addition only guards the bound each delta moves toward: the
    /// temperature floor, the flood-risk floor and the air-quality ceiling.
    pub(crate) fn with_added(self, effect: ElementEffect) -> Self {
        Self {
            temperature: (self.temperature + effect.temperature).max(TEMPERATURE_MIN),
            flood_risk: (self.flood_risk + effect.flood_risk).max(PERCENT_MIN),
            air_quality: (self.air_quality + effect.air_quality).min(PERCENT_MAX),
        }
    }

    /// Mirror of [`GaugeState::with_added`]. The clamps differ from addition,
    /// so an add followed by a remove near a bound does not restore the
    /// earlier reading.
    pub(crate) fn with_removed(self, effect: ElementEffect) -> Self {
        Self {
            temperature: (self.temperature - effect.temperature).min(TEMPERATURE_MAX),
            flood_risk: (self.flood_risk - effect.flood_risk).min(PERCENT_MAX),
            air_quality: (self.air_quality - effect.air_quality).max(PERCENT_MIN),
        }
    }

    pub fn within_bounds(&self) -> bool {
        (TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&self.temperature)
            && (PERCENT_MIN..=PERCENT_MAX).contains(&self.flood_risk)
            && (PERCENT_MIN..=PERCENT_MAX).contains(&self.air_quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::ElementKind;

    #[test]
    fn addition_clamps_toward_improvement() {
        let gauges = GaugeState {
            temperature: 61.0,
            flood_risk: 5.0,
            air_quality: 98.0,
        }
        .with_added(ElementKind::Mangrove.effect());
        assert_eq!(gauges.temperature, 60.0);
        assert_eq!(gauges.flood_risk, 0.0);
        assert_eq!(gauges.air_quality, 100.0);
    }

    #[test]
    fn removal_clamps_toward_degradation() {
        let gauges = GaugeState {
            temperature: 84.5,
            flood_risk: 95.0,
            air_quality: 2.0,
        }
        .with_removed(ElementKind::Wetland.effect());
        assert_eq!(gauges.temperature, 85.0);
        assert_eq!(gauges.flood_risk, 100.0);
        assert_eq!(gauges.air_quality, 0.0);
    }

    #[test]
    fn default_readings_are_in_bounds() {
        assert!(GaugeState::default().within_bounds());
    }
}
