use crate::config;
use crate::types::{Percent, Volts};
use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10},
        MonoTextStyle,
    },
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use ssd1306::{
    mode::BufferedGraphicsMode,
    prelude::{DisplayError, DisplayRotation, DisplaySize128x64, WriteOnlyDataCommand},
    Ssd1306,
};

/// The 128x64 OLED. Sole output of the device; owns the panel driver and the
/// reset pin.
pub struct Screen<DI, RST> {
    display: Ssd1306<DI, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>,
    // held so the pin driver is not torn down (and the panel re-reset) on drop
    _rst: RST,
}

impl<DI, RST> Screen<DI, RST>
where
    DI: WriteOnlyDataCommand,
    RST: OutputPin,
{
    pub fn new<D: DelayNs>(interface: DI, mut rst: RST, delay: &mut D) -> Result<Self, String> {
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display
            .reset(&mut rst, delay)
            .map_err(|e| format!("reset failed: {:?}", e))?;
        display.init().map_err(|e| format!("init failed: {:?}", e))?;
        Ok(Self {
            display,
            _rst: rst,
        })
    }

    /// Redraws the whole frame: both readings as text plus a charge bar.
    pub fn render(
        &mut self,
        voltage: Volts,
        percent: Percent,
    ) -> Result<(), DisplayError> {
        let label_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        let value_style = MonoTextStyle::new(&FONT_10X20, BinaryColor::On);

        self.display.clear_buffer();

        Text::with_baseline("BATTERY", Point::zero(), label_style, Baseline::Top)
            .draw(&mut self.display)?;

        Text::with_baseline(
            &format!("{:.2} V", voltage),
            Point::new(0, 13),
            value_style,
            Baseline::Top,
        )
        .draw(&mut self.display)?;

        Text::with_baseline(
            &format!("{} %", percent),
            Point::new(0, 33),
            value_style,
            Baseline::Top,
        )
        .draw(&mut self.display)?;

        self.draw_charge_bar(percent)?;

        self.display.flush()
    }

    fn draw_charge_bar(&mut self, percent: Percent) -> Result<(), DisplayError> {
        const BAR_HEIGHT: u32 = 8;
        let width = config::Display::WIDTH;
        let top = (config::Display::HEIGHT - BAR_HEIGHT) as i32;

        Rectangle::new(Point::new(0, top), Size::new(width, BAR_HEIGHT))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut self.display)?;

        let fill = (percent as u32 * (width - 4)) / 100;
        if fill > 0 {
            Rectangle::new(Point::new(2, top + 2), Size::new(fill, BAR_HEIGHT - 4))
                .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                .draw(&mut self.display)?;
        }

        Ok(())
    }
}
