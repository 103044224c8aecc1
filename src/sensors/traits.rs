use crate::types::{Percent, Volts};

pub trait SocEstimator {
    /// Total over all finite voltages; out-of-range inputs clamp to 0 or 100.
    fn voltage_to_percent(&self, voltage: Volts) -> Percent;
}
