use crate::sensors::adc::Converter;
use crate::types::Volts;
use ads1x1x::ic::{Ads1115, Resolution16Bit};
use ads1x1x::mode::OneShot;
use ads1x1x::{channel, Ads1x1x, FullScaleRange, TargetAddr};
use embedded_hal::i2c::I2c;

/// Battery voltage acquisition through an ADS1115 on the I2C bus.
///
/// Channel A0 is wired to the midpoint of the divider; everything after the
/// raw sample is pure math in [`Converter`].
pub struct BatteryMonitor<I2C> {
    adc: Ads1x1x<I2C, Ads1115, Resolution16Bit, OneShot>,
    converter: Converter,
}

impl<I2C> BatteryMonitor<I2C>
where
    I2C: I2c,
{
    /// Probes the ADS1115 and programs gain one (±4.096 V full scale).
    pub fn new(i2c: I2C, converter: Converter) -> Result<Self, ads1x1x::Error<I2C::Error>> {
        let mut adc = Ads1x1x::new_ads1115(i2c, TargetAddr::default());
        adc.set_full_scale_range(FullScaleRange::Within4_096V)?;
        Ok(Self { adc, converter })
    }

    /// One blocking single-ended conversion, returned as the battery voltage.
    pub fn read(&mut self) -> Result<Volts, ads1x1x::Error<I2C::Error>> {
        let raw = nb::block!(self.adc.read(channel::SingleA0))?;
        log::debug!("Raw battery sample: {}", raw);
        Ok(self.converter.raw_to_battery_voltage(raw))
    }
}
