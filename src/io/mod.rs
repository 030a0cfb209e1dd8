//! Physical I/O capability traits.
//!
//! The game state machine only ever talks to these traits; the embedded
//! implementations live under [`crate::hw`], and host tests substitute
//! scripted fakes. Everything is synchronous and blocking - there is a
//! single control flow and no background task.

pub mod debounce;
pub mod rng;

use crate::game::ColorIndex;

/// The two physical push-buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Advances the selection cursor (cursor = cursor + 1 mod 3).
    Cycle,
    /// Locks in the cursor's color as the answer for the current step.
    Confirm,
}

impl Button {
    /// All buttons, in sampling order.
    pub const ALL: [Button; 2] = [Button::Cycle, Button::Confirm];

    /// Position of this button's line, 0..1.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Three independent digital LED outputs, active-high, all off at boot.
pub trait Leds {
    /// Drive the LED at the color's position on or off.
    fn set(&mut self, color: ColorIndex, on: bool);

    /// Drive all three LEDs at once.
    fn set_all(&mut self, on: bool) {
        for color in ColorIndex::ALL {
            self.set(color, on);
        }
    }
}

/// Raw button line sampler.
///
/// Implementations must expose `true` = pressed; the physical lines are
/// active-low with pull-ups, so the hardware impl inverts before
/// exposing the boolean.
pub trait ButtonLines {
    fn pressed(&self, button: Button) -> bool;
}

/// Discrete press events on top of the raw lines.
///
/// All waits are unbounded: the device is a kiosk with no idle timeout,
/// so the game makes no progress without external input.
// TODO: idle-timeout back to the title screen would be a reasonable
// enhancement for battery-powered builds.
pub trait InputSource {
    /// Single unfiltered sample of one button's state.
    fn is_pressed(&mut self, button: Button) -> bool;

    /// Block until the given button is pressed and released again.
    fn wait_for_press(&mut self, button: Button);

    /// Block until either button is pressed and released; reports which.
    fn wait_for_any(&mut self) -> Button;
}

/// Blocking timing primitive.
///
/// Injected so host tests can run on virtual time instead of sleeping.
pub trait Delay {
    fn delay_ms(&mut self, ms: u64);
}
