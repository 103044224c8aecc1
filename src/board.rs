use crate::config;
use crate::display::screen::Screen;
use crate::sensors::adc::{Converter, Divider};
use crate::sensors::battery::BatteryMonitor;
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::spi::{config::Config as SpiConfig, SpiDeviceDriver, SpiDriver, SpiDriverConfig};
use esp_idf_svc::hal::delay::Delay;
use esp_idf_svc::hal::gpio::{AnyIOPin, Gpio16, Gpio17, Output, PinDriver};
use esp_idf_svc::hal::prelude::*;
use esp_idf_sys::EspError;
use ssd1306::prelude::SPIInterface;

pub type Oled = Screen<
    SPIInterface<SpiDeviceDriver<'static, SpiDriver<'static>>, PinDriver<'static, Gpio16, Output>>,
    PinDriver<'static, Gpio17, Output>,
>;

#[derive(Debug)]
pub enum Error {
    I2c(EspError),
    Spi(EspError),
    Adc(String),
    Display(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C bus setup failed: {:?}", e),
            Error::Spi(e) => write!(f, "SPI bus setup failed: {:?}", e),
            Error::Adc(e) => write!(f, "ADS1115 not found: {}", e),
            Error::Display(e) => write!(f, "SSD1306 setup failed: {}", e),
        }
    }
}

impl std::error::Error for Error {}

/// Every hardware handle of the device, owned in one place. There are two:
/// the battery monitor on I2C and the OLED on SPI.
pub struct Board {
    pub battery: BatteryMonitor<I2cDriver<'static>>,
    pub screen: Oled,
}

impl Board {
    pub fn new(peripherals: Peripherals) -> Result<Self, Error> {
        log::info!("Setting up battery monitor");
        let i2c = I2cDriver::new(
            peripherals.i2c0,
            peripherals.pins.gpio21, // sda
            peripherals.pins.gpio22, // scl
            &I2cConfig::new().baudrate(400.kHz().into()),
        )
        .map_err(Error::I2c)?;

        let converter = Converter::new(config::ADC_FULL_SCALE, Divider::default());
        let battery = BatteryMonitor::new(i2c, converter)
            .map_err(|e| Error::Adc(format!("{:?}", e)))?;
        log::info!("ADS1115 initialized");

        log::info!("Setting up display");
        let spi = SpiDriver::new(
            peripherals.spi2,
            peripherals.pins.gpio18, // clk
            peripherals.pins.gpio23, // din
            Option::<AnyIOPin>::None,
            &SpiDriverConfig::new(),
        )
        .map_err(Error::Spi)?;
        let spi = SpiDeviceDriver::new(
            spi,
            Some(peripherals.pins.gpio5), // cs
            &SpiConfig::new().baudrate(config::Display::SPI_BAUDRATE_HZ.Hz()),
        )
        .map_err(Error::Spi)?;
        let dc = PinDriver::output(peripherals.pins.gpio16).map_err(Error::Spi)?;
        let rst = PinDriver::output(peripherals.pins.gpio17).map_err(Error::Spi)?;

        let mut delay = Delay::default();
        let screen = Screen::new(SPIInterface::new(spi, dc), rst, &mut delay)
            .map_err(Error::Display)?;
        log::info!("SSD1306 initialized");

        Ok(Board { battery, screen })
    }
}
