use crate::types::*;
use std::time::Duration;

// Divider between the battery terminal and the ADC input node
pub const DIVIDER_R1: Ohms = 100_000.0;
pub const DIVIDER_R2: Ohms = 100_000.0;

// Terminal voltage of a single cell considered empty / full
pub const BATTERY_EMPTY: Volts = 3.0;
pub const BATTERY_FULL: Volts = 4.2;

// ADS1115 full scale at gain one, 4.096 / 32768 = 125 uV per count
pub const ADC_FULL_SCALE: Volts = 4.096;

pub const READ_INTERVAL: Duration = Duration::from_millis(1000);

pub struct Display {}

impl Display {
    pub const WIDTH: u32 = 128;
    pub const HEIGHT: u32 = 64;
    pub const SPI_BAUDRATE_HZ: u32 = 8_000_000;
}
