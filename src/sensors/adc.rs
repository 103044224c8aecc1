use crate::types::{Ohms, Volts};
use serde::{Deserialize, Serialize};

/// Resistor divider sitting between the battery terminal and the ADC input.
#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Divider {
    pub r1: Ohms,
    pub r2: Ohms,
}

impl Divider {
    /// Attenuation undone: battery voltage = node voltage * ratio.
    pub fn ratio(&self) -> f32 {
        (self.r1 + self.r2) / self.r2
    }
}

impl Default for Divider {
    fn default() -> Self {
        Divider {
            r1: crate::config::DIVIDER_R1,
            r2: crate::config::DIVIDER_R2,
        }
    }
}

/// Converts a signed 16-bit one-shot sample into the battery voltage.
///
/// The scale factor is fixed by the programmed gain: full scale volts over
/// 2^15 counts. Stateless, linear in the raw count.
pub struct Converter {
    volts_per_count: f32,
    divider_ratio: f32,
}

impl Converter {
    pub fn new(full_scale: Volts, divider: Divider) -> Self {
        let volts_per_count = full_scale / 32768.0;
        Self {
            volts_per_count,
            divider_ratio: divider.ratio(),
        }
    }

    /// Voltage at the divider midpoint, as seen by the ADC.
    pub fn raw_to_node_voltage(&self, raw: i16) -> Volts {
        raw as f32 * self.volts_per_count
    }

    /// True battery voltage, divider attenuation undone.
    pub fn raw_to_battery_voltage(&self, raw: i16) -> Volts {
        self.raw_to_node_voltage(raw) * self.divider_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converter() -> Converter {
        Converter::new(
            4.096,
            Divider {
                r1: 100_000.0,
                r2: 100_000.0,
            },
        )
    }

    #[test]
    fn test_zero_count_is_zero_volts() {
        assert_eq!(converter().raw_to_battery_voltage(0), 0.0);
    }

    #[test]
    fn test_half_scale_count() {
        // 16384 counts * 4.096 / 32768 = 2.048 V at the node, 4.096 V at the battery
        let converter = converter();
        assert!((converter.raw_to_node_voltage(16384) - 2.048).abs() < 1e-6);
        assert!((converter.raw_to_battery_voltage(16384) - 4.096).abs() < 1e-6);
    }

    #[test]
    fn test_conversion_is_linear() {
        let converter = converter();
        for raw in [-12000i16, -100, 1, 500, 16000] {
            let single = converter.raw_to_node_voltage(raw);
            let double = converter.raw_to_node_voltage(raw * 2);
            assert!((double - 2.0 * single).abs() < 1e-6);
        }
    }

    #[test]
    fn test_negative_counts_map_below_ground() {
        assert!(converter().raw_to_battery_voltage(-16384) < 0.0);
    }

    #[test]
    fn test_asymmetric_divider_ratio() {
        // 100k over 22k, the usual li-ion sense divider
        let divider = Divider {
            r1: 100_000.0,
            r2: 22_000.0,
        };
        assert!((divider.ratio() - 122.0 / 22.0).abs() < 1e-6);
    }
}
