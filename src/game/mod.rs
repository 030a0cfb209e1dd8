//! Game core - color domain types, sequence engine, selection protocol,
//! and the round state machine.

pub mod machine;
pub mod select;
pub mod sequence;

#[cfg(test)]
mod tests;

/// One of the three game colors, mapped 1:1 to LED/box position 0..2.
///
/// Always in range by construction; raw indices only enter through
/// [`ColorIndex::from_index`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorIndex {
    Red = 0,
    Yellow = 1,
    Green = 2,
}

impl ColorIndex {
    /// All colors, in LED/box position order.
    pub const ALL: [ColorIndex; 3] = [ColorIndex::Red, ColorIndex::Yellow, ColorIndex::Green];

    /// Position of this color's LED and selection box, 0..2.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color at the given position, if in range.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(ColorIndex::Red),
            1 => Some(ColorIndex::Yellow),
            2 => Some(ColorIndex::Green),
            _ => None,
        }
    }

    /// Next color in cursor-cycling order (0 → 1 → 2 → 0).
    pub const fn next(self) -> Self {
        match self {
            ColorIndex::Red => ColorIndex::Yellow,
            ColorIndex::Yellow => ColorIndex::Green,
            ColorIndex::Green => ColorIndex::Red,
        }
    }
}

/// The sequence is already at [`crate::config::MAX_GAME_LENGTH`].
///
/// A terminal win signal, not a recoverable error: the caller routes
/// into the congratulations/reset path with maximum score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequenceFull;

/// Which view and which I/O loop is active.
///
/// Transitions are strictly sequential; only `GameOver` loops back to
/// `AwaitingStart`. `level` is the current sequence length and the
/// player's displayed progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GamePhase {
    /// Title screen; blocked on any button press.
    AwaitingStart,
    /// Level banner is on screen.
    Announcing(usize),
    /// Sequence engine appends one color and replays the whole sequence.
    Replaying(usize),
    /// Selection protocol is collecting the player's answer for `step`.
    Collecting { level: usize, step: usize },
    /// Comparing the confirmed answer against the sequence.
    Judging {
        level: usize,
        step: usize,
        chosen: ColorIndex,
    },
    /// Level cleared; LED sweep and success banner.
    LevelUp(usize),
    /// Final score on screen; resets and waits for a restart press.
    GameOver(usize),
}
