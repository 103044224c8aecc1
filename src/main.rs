use anyhow::Result;
use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::hal::prelude::Peripherals;

mod board;
mod config;
mod display;
mod sensors;
mod types;

use sensors::soc::SocCurve;
use sensors::traits::SocEstimator;

fn main() -> Result<()> {
    // It is necessary to call this function once. Otherwise some patches to the runtime
    // implemented by esp-idf-sys might not link properly. See https://github.com/esp-rs/esp-idf-template/issues/71
    esp_idf_svc::sys::link_patches();
    // Bind the log crate to the ESP Logging facilities
    esp_idf_svc::log::EspLogger::initialize_default();

    let peripherals = Peripherals::take()?;
    let mut board = match board::Board::new(peripherals) {
        Ok(board) => board,
        Err(e) => {
            // No recovery path on this device, park here until a power cycle
            log::error!("Hardware setup failed: {}", e);
            halt();
        }
    };
    log::info!("Board setup complete");

    let soc = SocCurve::new(config::BATTERY_EMPTY, config::BATTERY_FULL)
        .expect("battery range must satisfy empty < full");

    loop {
        match board.battery.read() {
            Ok(voltage) => {
                let percent = soc.voltage_to_percent(voltage);
                log::debug!("Battery: {:.2} V, {} %", voltage, percent);
                if let Err(e) = board.screen.render(voltage, percent) {
                    log::error!("Failed to update display: {:?}", e);
                }
            }
            Err(e) => log::error!("Failed to read battery voltage: {:?}", e),
        }

        FreeRtos::delay_ms(config::READ_INTERVAL.as_millis() as u32);
    }
}

fn halt() -> ! {
    loop {
        FreeRtos::delay_ms(1000);
    }
}
