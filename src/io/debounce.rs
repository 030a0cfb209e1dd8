//! Press detection with settle-delay debouncing.
//!
//! Polls the raw lines at a fixed interval, applies a settle delay once
//! a press edge is observed, then waits for the release before
//! reporting the event. A single noisy transition inside the settle
//! window is not corrected - the settle delay is the whole filter.

use crate::config::{DEBOUNCE_SETTLE_MS, POLL_INTERVAL_MS};
use crate::io::{Button, ButtonLines, Delay, InputSource};

/// Debounced press-event reader over a pair of raw button lines.
pub struct Debouncer<L, D> {
    lines: L,
    delay: D,
}

impl<L: ButtonLines, D: Delay> Debouncer<L, D> {
    pub fn new(lines: L, delay: D) -> Self {
        Self { lines, delay }
    }

    /// Read access to the delay, for virtual-time inspection in tests.
    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Settle after an observed press edge, then poll until release.
    fn settle_and_wait_release(&mut self, button: Button) {
        self.delay.delay_ms(DEBOUNCE_SETTLE_MS);
        while self.lines.pressed(button) {
            self.delay.delay_ms(POLL_INTERVAL_MS);
        }
    }
}

impl<L: ButtonLines, D: Delay> InputSource for Debouncer<L, D> {
    fn is_pressed(&mut self, button: Button) -> bool {
        self.lines.pressed(button)
    }

    fn wait_for_press(&mut self, button: Button) {
        while !self.lines.pressed(button) {
            self.delay.delay_ms(POLL_INTERVAL_MS);
        }
        self.settle_and_wait_release(button);
    }

    fn wait_for_any(&mut self) -> Button {
        loop {
            for button in Button::ALL {
                if self.lines.pressed(button) {
                    self.settle_and_wait_release(button);
                    return button;
                }
            }
            self.delay.delay_ms(POLL_INTERVAL_MS);
        }
    }
}
