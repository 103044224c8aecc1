use crate::sensors::traits::SocEstimator;
use crate::types::{Percent, Volts};
use serde::{Deserialize, Serialize};

/// Linear state-of-charge approximation from terminal voltage.
///
/// A crude model: real li-ion discharge curves are flat in the middle, but
/// for a gauge readout a straight line between the empty and full terminal
/// voltages is enough.
#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct SocCurve {
    empty: Volts,
    full: Volts,
}

impl SocCurve {
    pub fn new(empty: Volts, full: Volts) -> Result<Self, String> {
        if empty >= full {
            return Err(format!(
                "empty voltage {} must be below full voltage {}",
                empty, full
            ));
        }
        Ok(SocCurve { empty, full })
    }
}

impl Default for SocCurve {
    fn default() -> Self {
        SocCurve {
            empty: crate::config::BATTERY_EMPTY,
            full: crate::config::BATTERY_FULL,
        }
    }
}

impl SocEstimator for SocCurve {
    fn voltage_to_percent(&self, voltage: Volts) -> Percent {
        if voltage >= self.full {
            return 100;
        }
        if voltage <= self.empty {
            return 0;
        }
        // Rounded half away from zero, matching the thresholds above at the ends.
        let percent = (voltage - self.empty) / (self.full - self.empty) * 100.0;
        percent.round() as Percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve() -> SocCurve {
        SocCurve::new(3.0, 4.2).unwrap()
    }

    #[test]
    fn test_boundaries_are_exact() {
        assert_eq!(curve().voltage_to_percent(4.2), 100);
        assert_eq!(curve().voltage_to_percent(3.0), 0);
    }

    #[test]
    fn test_out_of_range_clamps() {
        // charging overshoot and noise below empty are cosmetic, not errors
        assert_eq!(curve().voltage_to_percent(5.0), 100);
        assert_eq!(curve().voltage_to_percent(2.0), 0);
        assert_eq!(curve().voltage_to_percent(-1.0), 0);
    }

    #[test]
    fn test_interpolation_rounds_to_nearest() {
        // (4.096 - 3.0) / 1.2 * 100 = 91.33 -> 91
        assert_eq!(curve().voltage_to_percent(4.096), 91);
        // midpoint: (3.6 - 3.0) / 1.2 * 100 = 50
        assert_eq!(curve().voltage_to_percent(3.6), 50);
    }

    #[test]
    fn test_known_voltages() {
        let curve = curve();
        let voltages = [3.06, 3.3, 3.48, 3.9, 4.14];
        let expected = [5, 25, 40, 75, 95];
        let percents: Vec<Percent> = voltages
            .iter()
            .map(|v| curve.voltage_to_percent(*v))
            .collect();
        assert_eq!(percents, expected);
    }

    #[test]
    fn test_monotonically_non_decreasing() {
        let curve = curve();
        let mut last = curve.voltage_to_percent(2.5);
        let mut voltage = 2.5;
        while voltage < 4.5 {
            let percent = curve.voltage_to_percent(voltage);
            assert!(percent >= last);
            last = percent;
            voltage += 0.01;
        }
    }

    #[test]
    fn test_deterministic() {
        let curve = curve();
        for _ in 0..3 {
            assert_eq!(curve.voltage_to_percent(3.7), curve.voltage_to_percent(3.7));
        }
    }

    #[test]
    fn test_rejects_inverted_range() {
        assert!(SocCurve::new(4.2, 3.0).is_err());
        assert!(SocCurve::new(3.7, 3.7).is_err());
    }
}
