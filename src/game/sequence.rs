//! The growing color sequence and its timed LED replay.

use heapless::Vec;

use crate::config::{MAX_GAME_LENGTH, REPLAY_GAP_MS, REPLAY_PULSE_MS};
use crate::game::{ColorIndex, SequenceFull};
use crate::io::rng::Rng;
use crate::io::{Delay, Leds};

/// The ordered list of colors the player must reproduce.
///
/// Append-only during a game (via [`Sequence::extend`]); cleared
/// entirely on game over. Bounded by [`MAX_GAME_LENGTH`].
pub struct Sequence {
    steps: Vec<ColorIndex, MAX_GAME_LENGTH>,
}

impl Sequence {
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Current length; also the current level.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Color at `step`, if the sequence is that long.
    pub fn get(&self, step: usize) -> Option<ColorIndex> {
        self.steps.get(step).copied()
    }

    /// Discard the whole sequence (game-over reset).
    pub fn clear(&mut self) {
        self.steps.clear();
    }

    /// Append one uniformly-random color and return it.
    ///
    /// `SequenceFull` once the bound is reached - the win condition,
    /// handled by the state machine, never a crash.
    pub fn extend(&mut self, rng: &mut impl Rng) -> Result<ColorIndex, SequenceFull> {
        if self.steps.is_full() {
            return Err(SequenceFull);
        }
        let color = rng.color();
        // Capacity was just checked; push cannot fail.
        let _ = self.steps.push(color);
        Ok(color)
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Replay the first `length` entries as timed LED pulses.
///
/// Each LED is lit for [`REPLAY_PULSE_MS`], switched off, then followed
/// by a [`REPLAY_GAP_MS`] gap. Fully blocking and uninterruptible.
pub fn replay<L: Leds, D: Delay>(leds: &mut L, delay: &mut D, sequence: &Sequence, length: usize) {
    for step in 0..length {
        let Some(color) = sequence.get(step) else {
            break;
        };
        leds.set(color, true);
        delay.delay_ms(REPLAY_PULSE_MS);
        leds.set(color, false);
        delay.delay_ms(REPLAY_GAP_MS);
    }
}
