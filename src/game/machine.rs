//! Round orchestration: generate → show → collect → judge → advance/reset.
//!
//! [`Game`] is a plain struct threaded through one blocking transition
//! method, so the whole machine is unit-testable without hardware. Each
//! call to [`Game::step`] runs the current phase to completion
//! (including its blocking I/O) and advances to the next phase.

use crate::config::{
    ANNOUNCE_PAUSE_MS, FEEDBACK_BLINK_MS, GAMEOVER_FLASHES, GAMEOVER_FLASH_MS, GAMEOVER_PAUSE_MS,
    LEVEL_UP_STEP_MS, MAX_GAME_LENGTH, REPLAY_CLEAR_MS, SUCCESS_PAUSE_MS, WIN_PAUSE_MS,
};
use crate::game::sequence::{self, Sequence};
use crate::game::{select, ColorIndex, GamePhase, SequenceFull};
use crate::io::rng::Rng;
use crate::io::{Delay, InputSource, Leds};
use crate::ui::screens;
use crate::ui::Screen;

/// The physical capabilities the game runs against.
pub struct Board<L, I, S, D, R> {
    pub leds: L,
    pub input: I,
    pub screen: S,
    pub delay: D,
    pub rng: R,
}

/// The game state machine. Owns the sequence exclusively.
pub struct Game {
    sequence: Sequence,
    phase: GamePhase,
}

impl Game {
    pub const fn new() -> Self {
        Self {
            sequence: Sequence::new(),
            phase: GamePhase::AwaitingStart,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Run the current phase to completion and advance.
    ///
    /// Blocking: input waits are unbounded and replay cannot be
    /// interrupted. The firmware calls this in an endless loop.
    pub fn step<L, I, S, D, R>(&mut self, board: &mut Board<L, I, S, D, R>)
    where
        L: Leds,
        I: InputSource,
        S: Screen,
        D: Delay,
        R: Rng,
    {
        self.phase = match self.phase {
            GamePhase::AwaitingStart => {
                screens::draw_title(&mut board.screen);
                board.input.wait_for_any();
                GamePhase::Announcing(1)
            }

            GamePhase::Announcing(level) => {
                screens::draw_announce(&mut board.screen, level);
                board.delay.delay_ms(ANNOUNCE_PAUSE_MS);
                GamePhase::Replaying(level)
            }

            GamePhase::Replaying(level) => match self.sequence.extend(&mut board.rng) {
                Ok(_) => {
                    debug_assert_eq!(self.sequence.len(), level);
                    sequence::replay(&mut board.leds, &mut board.delay, &self.sequence, level);
                    // Blank frame between replay and input collection.
                    board.screen.clear();
                    board.screen.flush();
                    board.delay.delay_ms(REPLAY_CLEAR_MS);
                    GamePhase::Collecting { level, step: 0 }
                }
                Err(SequenceFull) => {
                    // All 100 levels cleared: celebrate, then reuse the
                    // game-over reset path with the maximum score.
                    screens::draw_win(&mut board.screen);
                    board.delay.delay_ms(WIN_PAUSE_MS);
                    GamePhase::GameOver(MAX_GAME_LENGTH)
                }
            },

            GamePhase::Collecting { level, step } => {
                let chosen = select::collect_step(
                    &mut board.screen,
                    &mut board.input,
                    &mut board.delay,
                    step,
                );
                GamePhase::Judging {
                    level,
                    step,
                    chosen,
                }
            }

            GamePhase::Judging {
                level,
                step,
                chosen,
            } => {
                if self.sequence.get(step) == Some(chosen) {
                    correct_feedback(&mut board.leds, &mut board.delay, chosen);
                    if step + 1 == level {
                        GamePhase::LevelUp(level)
                    } else {
                        GamePhase::Collecting {
                            level,
                            step: step + 1,
                        }
                    }
                } else {
                    // First mismatch ends the game; later inputs are
                    // never consulted. Score is the last completed level.
                    GamePhase::GameOver(level - 1)
                }
            }

            GamePhase::LevelUp(level) => {
                level_up_effect(&mut board.leds, &mut board.delay);
                screens::draw_success(&mut board.screen, level);
                board.delay.delay_ms(SUCCESS_PAUSE_MS);
                GamePhase::Announcing(level + 1)
            }

            GamePhase::GameOver(score) => {
                screens::draw_game_over(&mut board.screen, score);
                board.delay.delay_ms(GAMEOVER_PAUSE_MS);
                game_over_flash(&mut board.leds, &mut board.delay);
                self.sequence.clear();
                screens::draw_restart_prompt(&mut board.screen);
                board.input.wait_for_any();
                GamePhase::AwaitingStart
            }
        };
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Double blink of the matched LED after a correct answer.
fn correct_feedback<L: Leds, D: Delay>(leds: &mut L, delay: &mut D, color: ColorIndex) {
    for _ in 0..2 {
        leds.set(color, true);
        delay.delay_ms(FEEDBACK_BLINK_MS);
        leds.set(color, false);
        delay.delay_ms(FEEDBACK_BLINK_MS);
    }
}

/// Ascending-then-descending sweep over all LEDs after a cleared level.
fn level_up_effect<L: Leds, D: Delay>(leds: &mut L, delay: &mut D) {
    for color in ColorIndex::ALL {
        leds.set(color, true);
        delay.delay_ms(LEVEL_UP_STEP_MS);
        leds.set(color, false);
    }
    delay.delay_ms(LEVEL_UP_STEP_MS);
    for color in ColorIndex::ALL.iter().rev() {
        leds.set(*color, true);
        delay.delay_ms(LEVEL_UP_STEP_MS);
        leds.set(*color, false);
    }
}

/// All-LED flash played on game over.
fn game_over_flash<L: Leds, D: Delay>(leds: &mut L, delay: &mut D) {
    for _ in 0..GAMEOVER_FLASHES {
        leds.set_all(true);
        delay.delay_ms(GAMEOVER_FLASH_MS);
        leds.set_all(false);
        delay.delay_ms(GAMEOVER_FLASH_MS);
    }
}
