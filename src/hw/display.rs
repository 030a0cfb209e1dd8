//! SSD1306 OLED display wrapper.

use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use crate::config::GLYPH_WIDTH;
use crate::ui::{Glyph, Screen};

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// [`Screen`] implementation over the buffered SSD1306 driver.
///
/// Draw errors are ignored: there is no supervisor to recover into, and
/// a failed I²C flush just leaves the previous frame on the panel.
pub struct Oled<I2C> {
    display: Display<I2C>,
}

impl<I2C> Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Initialise the SSD1306 and clear the panel.
    pub fn new(i2c: I2C) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        let _ = display.init();
        display.clear_buffer();
        let _ = display.flush();
        Self { display }
    }
}

fn text_style() -> embedded_graphics::mono_font::MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

impl<I2C> Screen for Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear(&mut self) {
        self.display.clear_buffer();
    }

    fn draw_glyph(&mut self, x: i32, y: i32, glyph: Glyph) {
        let raw = ImageRaw::<BinaryColor>::new(glyph.bitmap(), GLYPH_WIDTH as u32);
        let _ = Image::new(&raw, Point::new(x, y)).draw(&mut self.display);
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        let _ = Text::new(text, Point::new(x, y), text_style()).draw(&mut self.display);
    }

    fn flush(&mut self) {
        let _ = self.display.flush();
    }
}
