//! Cycle-and-confirm selection protocol.
//!
//! Converts button presses into one chosen color per step: the cycle
//! button moves the highlight cursor 0 → 1 → 2 → 0, the confirm button
//! locks the cursor in and shows a check mark for a moment.

use crate::config::CONFIRM_HOLD_MS;
use crate::game::ColorIndex;
use crate::io::{Button, Delay, InputSource};
use crate::ui::screens;
use crate::ui::Screen;

/// Transient per-step selection state.
///
/// The cursor starts at `Red` for every step - deliberately never
/// carried over from the previous confirmation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionState {
    pub cursor: ColorIndex,
    pub confirmed: Option<ColorIndex>,
}

impl SelectionState {
    pub const fn new() -> Self {
        Self {
            cursor: ColorIndex::Red,
            confirmed: None,
        }
    }

    /// Move the highlight to the next box.
    pub fn advance(&mut self) {
        self.cursor = self.cursor.next();
    }

    /// Lock the cursor in as the answer.
    pub fn confirm(&mut self) {
        self.confirmed = Some(self.cursor);
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect the player's answer for one step.
///
/// Blocks until the confirm button is pressed; there is no way to back
/// out of a step once it starts.
pub fn collect_step<S, I, D>(screen: &mut S, input: &mut I, delay: &mut D, step: usize) -> ColorIndex
where
    S: Screen,
    I: InputSource,
    D: Delay,
{
    let mut selection = SelectionState::new();
    screens::draw_selection(screen, selection.cursor, step, None);

    loop {
        match input.wait_for_any() {
            Button::Cycle => {
                selection.advance();
                screens::draw_selection(screen, selection.cursor, step, None);
            }
            Button::Confirm => {
                selection.confirm();
                screens::draw_selection(screen, selection.cursor, step, selection.confirmed);
                delay.delay_ms(CONFIRM_HOLD_MS);
                return selection.cursor;
            }
        }
    }
}
