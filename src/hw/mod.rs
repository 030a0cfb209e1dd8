//! nRF52840 implementations of the I/O capabilities.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C ([`display`])
//! - **Buttons**: 2 tactile switches, active-low with pull-ups ([`buttons`])
//! - **LEDs**: 3 active-high outputs ([`leds`])

pub mod buttons;
pub mod display;
pub mod leds;

use embassy_time::{block_for, Duration};

use crate::io::Delay;

/// Wall-clock delay over the Embassy time driver. Blocks the single
/// control flow; there is no concurrent task to starve.
pub struct BlockingDelay;

impl Delay for BlockingDelay {
    fn delay_ms(&mut self, ms: u64) {
        block_for(Duration::from_millis(ms));
    }
}
