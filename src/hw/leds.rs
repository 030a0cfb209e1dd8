//! GPIO LED outputs.

use embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive};

use crate::game::ColorIndex;
use crate::io::Leds;

/// The three game LEDs, indexed by color position. Active-high,
/// all off after construction.
pub struct GameLeds {
    pins: [Output<'static>; 3],
}

impl GameLeds {
    pub fn new(red: AnyPin, yellow: AnyPin, green: AnyPin) -> Self {
        let off = |pin| Output::new(pin, Level::Low, OutputDrive::Standard);
        Self {
            pins: [off(red), off(yellow), off(green)],
        }
    }
}

impl Leds for GameLeds {
    fn set(&mut self, color: ColorIndex, on: bool) {
        if on {
            self.pins[color.index()].set_high();
        } else {
            self.pins[color.index()].set_low();
        }
    }
}
