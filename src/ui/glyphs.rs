//! Static 16x16 glyph bitmaps.
//!
//! Each table is 16 rows of 2 bytes, MSB-first - the same row layout
//! `embedded_graphics::image::ImageRaw<BinaryColor>` consumes, so the
//! embedded renderer can wrap these directly. The CJK color labels are
//! hand-drawn; everything else is simple line art.

/// 紅 (red).
pub static RED: [u8; 32] = [
    0x00, 0x00, //
    0x08, 0x00, //
    0x10, 0x00, //
    0x12, 0xFE, //
    0x64, 0x10, //
    0x3C, 0x10, //
    0x1A, 0x10, //
    0x12, 0x10, //
    0x3F, 0x10, //
    0x7D, 0x10, //
    0x09, 0x90, //
    0x2A, 0x10, //
    0x6B, 0x10, //
    0x49, 0x10, //
    0x48, 0x10, //
    0x09, 0xFF, //
];

/// 黃 (yellow).
pub static YELLOW: [u8; 32] = [
    0x00, 0x00, //
    0x04, 0x20, //
    0x3F, 0xFC, //
    0x04, 0x20, //
    0x07, 0xE0, //
    0x00, 0x00, //
    0xFF, 0xFE, //
    0x1F, 0xF8, //
    0x11, 0x08, //
    0x11, 0x08, //
    0x1F, 0xF8, //
    0x11, 0x08, //
    0x1F, 0xF8, //
    0x04, 0x30, //
    0x38, 0x4C, //
    0x40, 0x06, //
];

/// 綠 (green).
pub static GREEN: [u8; 32] = [
    0x00, 0x00, //
    0x10, 0x40, //
    0x30, 0xFC, //
    0x2C, 0x88, //
    0xC8, 0xF8, //
    0x38, 0x88, //
    0x35, 0xFE, //
    0x2C, 0x20, //
    0xF7, 0x26, //
    0x10, 0xBC, //
    0x54, 0xF0, //
    0x52, 0x68, //
    0x53, 0xAC, //
    0xD3, 0x26, //
    0x10, 0xE0, //
    0x00, 0x00, //
];

/// Selection box outline (visible frame 20x10 within the cell).
pub static BOX: [u8; 32] = [
    0x00, 0x00, //
    0x00, 0x00, //
    0x3F, 0xFE, //
    0x20, 0x02, //
    0x20, 0x02, //
    0x20, 0x02, //
    0x20, 0x02, //
    0x20, 0x02, //
    0x20, 0x02, //
    0x20, 0x02, //
    0x20, 0x02, //
    0x20, 0x02, //
    0x20, 0x02, //
    0x20, 0x02, //
    0x20, 0x02, //
    0x3F, 0xFE, //
];

/// Upward cursor arrow.
pub static ARROW: [u8; 32] = [
    0x00, 0x00, //
    0x01, 0x00, //
    0x03, 0x80, //
    0x03, 0x80, //
    0x05, 0x40, //
    0x09, 0x20, //
    0x01, 0x00, //
    0x01, 0x00, //
    0x01, 0x00, //
    0x01, 0x00, //
    0x01, 0x00, //
    0x01, 0x00, //
    0x01, 0x00, //
    0x01, 0x00, //
    0x01, 0x00, //
    0x01, 0x00, //
];

/// Confirmation check mark.
pub static CHECK: [u8; 32] = [
    0x00, 0x00, //
    0x00, 0x00, //
    0x00, 0x00, //
    0x00, 0x80, //
    0x00, 0xC0, //
    0x01, 0x80, //
    0x03, 0x00, //
    0x02, 0x00, //
    0x04, 0x00, //
    0x0C, 0x00, //
    0x08, 0x00, //
    0x88, 0x00, //
    0xD0, 0x00, //
    0x50, 0x00, //
    0x70, 0x00, //
    0x20, 0x00, //
];
