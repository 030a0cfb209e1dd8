//! Application-wide constants and compile-time configuration.
//!
//! All timing parameters, game bounds, and display layout coordinates
//! live here so they can be tuned in one place.

// Game

/// Maximum sequence length. Reaching it is the win condition.
pub const MAX_GAME_LENGTH: usize = 100;

// Input

/// Settle delay applied after a press edge is first observed (ms).
///
/// This is the only debounce filtering: a noisy transition inside the
/// settle window is not corrected.
pub const DEBOUNCE_SETTLE_MS: u64 = 50;

/// Idle polling interval for button sampling (ms).
pub const POLL_INTERVAL_MS: u64 = 10;

// Sequence replay

/// How long each LED stays lit during replay (ms).
pub const REPLAY_PULSE_MS: u64 = 500;

/// Gap between replayed steps (ms).
pub const REPLAY_GAP_MS: u64 = 100;

/// Blank-screen pause between replay and input collection (ms).
pub const REPLAY_CLEAR_MS: u64 = 500;

// Selection

/// How long the confirmation check mark stays on screen (ms).
pub const CONFIRM_HOLD_MS: u64 = 500;

// Effects and banners

/// On/off time of the correct-answer double blink (ms).
pub const FEEDBACK_BLINK_MS: u64 = 100;

/// Per-LED on time of the level-up sweep (ms).
pub const LEVEL_UP_STEP_MS: u64 = 100;

/// How long the level banner is shown before replay (ms).
pub const ANNOUNCE_PAUSE_MS: u64 = 1500;

/// How long the success banner is shown after a cleared level (ms).
pub const SUCCESS_PAUSE_MS: u64 = 1500;

/// How long the game-over banner is shown (ms).
pub const GAMEOVER_PAUSE_MS: u64 = 2000;

/// On/off time of the all-LED game-over flash (ms).
pub const GAMEOVER_FLASH_MS: u64 = 200;

/// Number of all-LED flashes on game over.
pub const GAMEOVER_FLASHES: usize = 3;

/// How long the congratulations banner is shown on a full win (ms).
pub const WIN_PAUSE_MS: u64 = 3000;

// Display layout
//
// The panel is 128x64 monochrome. All glyphs are 16x16 bitmaps; the box
// glyph's visible frame is 20x10, which is what the centering below is
// based on.

/// Panel width in pixels.
pub const OLED_WIDTH: i32 = 128;

/// Panel height in pixels.
pub const OLED_HEIGHT: i32 = 64;

/// Glyph bitmap width in pixels.
pub const GLYPH_WIDTH: i32 = 16;

/// Glyph bitmap height in pixels.
pub const GLYPH_HEIGHT: i32 = 16;

/// Visible width of the box frame inside its glyph.
pub const BOX_FRAME_WIDTH: i32 = 20;

/// Visible height of the box frame inside its glyph.
pub const BOX_FRAME_HEIGHT: i32 = 10;

/// X positions of the three color labels, spread across the panel.
pub const LABEL_XS: [i32; 3] = [10, 46, 82];

/// Y position of the color label row.
pub const LABEL_Y: i32 = 5;

/// X positions of the selection boxes, centered under their labels.
pub const BOX_XS: [i32; 3] = [
    LABEL_XS[0] + GLYPH_WIDTH / 2 - BOX_FRAME_WIDTH / 2,
    LABEL_XS[1] + GLYPH_WIDTH / 2 - BOX_FRAME_WIDTH / 2,
    LABEL_XS[2] + GLYPH_WIDTH / 2 - BOX_FRAME_WIDTH / 2,
];

/// Y position of the selection box row, below the labels.
pub const BOX_Y: i32 = LABEL_Y + GLYPH_HEIGHT + 5;

/// X positions of the selection arrow, centered under each box.
pub const ARROW_XS: [i32; 3] = [
    BOX_XS[0] + BOX_FRAME_WIDTH / 2 - GLYPH_WIDTH / 2,
    BOX_XS[1] + BOX_FRAME_WIDTH / 2 - GLYPH_WIDTH / 2,
    BOX_XS[2] + BOX_FRAME_WIDTH / 2 - GLYPH_WIDTH / 2,
];

/// Y position of the selection arrow row, below the boxes.
pub const ARROW_Y: i32 = BOX_Y + BOX_FRAME_HEIGHT + 5;

/// Y position of the confirmation check mark, overlapping the box frame.
pub const CHECK_Y: i32 = BOX_Y + BOX_FRAME_HEIGHT / 2 - GLYPH_HEIGHT / 2 + 2;

/// Baseline of the bottom status line ("Step N").
pub const STATUS_Y: i32 = OLED_HEIGHT - 2;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` pins are
// selected in `main.rs`. Adjust for your custom PCB.
//
//   LED red        → P0.03 (active-high, external)
//   LED yellow     → P0.04
//   LED green      → P0.28
//   Button CYCLE   → P0.11 (active-low, internal pull-up)
//   Button CONFIRM → P0.12
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
