//! Display capability and frame composition.
//!
//! The renderer composes every view out of three primitives: 16x16
//! monochrome glyphs, ASCII status lines, and a frame flush. The game
//! core never touches pixels; the embedded [`Screen`] impl
//! (`crate::hw::display`) maps glyphs onto the SSD1306 frame buffer.

pub mod glyphs;
pub mod screens;

use crate::game::ColorIndex;

/// The fixed 16x16 bitmaps the renderer can place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    /// 紅 - red color label.
    Red,
    /// 黃 - yellow color label.
    Yellow,
    /// 綠 - green color label.
    Green,
    /// Selection box outline.
    Box,
    /// Cursor arrow shown under the highlighted box.
    Arrow,
    /// Confirmation check mark drawn over the chosen box.
    Check,
}

impl Glyph {
    /// Bitmap data: 16 rows, 2 bytes per row, MSB first.
    pub fn bitmap(self) -> &'static [u8; 32] {
        match self {
            Glyph::Red => &glyphs::RED,
            Glyph::Yellow => &glyphs::YELLOW,
            Glyph::Green => &glyphs::GREEN,
            Glyph::Box => &glyphs::BOX,
            Glyph::Arrow => &glyphs::ARROW,
            Glyph::Check => &glyphs::CHECK,
        }
    }

    /// Label glyph for a game color.
    pub const fn for_color(color: ColorIndex) -> Self {
        match color {
            ColorIndex::Red => Glyph::Red,
            ColorIndex::Yellow => Glyph::Yellow,
            ColorIndex::Green => Glyph::Green,
        }
    }
}

/// 128x64 monochrome frame-buffer display.
///
/// Draw calls only touch the buffer; nothing reaches the panel until
/// [`Screen::flush`]. Adapter faults are not surfaced here - there is
/// no supervisor to recover into.
pub trait Screen {
    /// Blank the frame buffer.
    fn clear(&mut self);

    /// Place a glyph with its top-left corner at (x, y).
    fn draw_glyph(&mut self, x: i32, y: i32, glyph: Glyph);

    /// Draw an ASCII status line with its baseline at (x, y).
    fn draw_text(&mut self, x: i32, y: i32, text: &str);

    /// Push the frame buffer to the physical panel.
    fn flush(&mut self);
}
