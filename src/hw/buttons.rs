//! GPIO button line sampling.
//!
//! Two physical buttons (active-low with internal pull-up):
//!   - CYCLE   - advances the selection cursor
//!   - CONFIRM - locks in the current selection
//!
//! Only the raw level lives here; debouncing is done by
//! [`crate::io::debounce::Debouncer`] on top of this sampler.

use embassy_nrf::gpio::{AnyPin, Input, Pull};

use crate::io::{Button, ButtonLines};

/// The two button input lines, indexed by [`Button`].
pub struct ButtonPins {
    pins: [Input<'static>; 2],
}

impl ButtonPins {
    pub fn new(cycle: AnyPin, confirm: AnyPin) -> Self {
        Self {
            pins: [Input::new(cycle, Pull::Up), Input::new(confirm, Pull::Up)],
        }
    }
}

impl ButtonLines for ButtonPins {
    fn pressed(&self, button: Button) -> bool {
        // Active-low line, inverted to the pressed boolean here.
        self.pins[button.index()].is_low()
    }
}
