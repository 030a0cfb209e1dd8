//! Frame composition, one function per view.
//!
//! Every function clears the buffer, draws the full frame, and flushes,
//! so callers never have to reason about what was on screen before.

use core::fmt::Write;

use heapless::String;

use crate::config::{
    ARROW_XS, ARROW_Y, BOX_XS, BOX_Y, CHECK_Y, LABEL_XS, LABEL_Y, STATUS_Y,
};
use crate::game::ColorIndex;
use crate::ui::{Glyph, Screen};

/// Title screen shown while waiting for the first press.
pub fn draw_title<S: Screen>(screen: &mut S) {
    screen.clear();
    screen.draw_text(0, 10, "Memory challenge");
    screen.draw_text(0, 24, "Press any key");
    screen.draw_text(0, 38, "to start");
    screen.flush();
}

/// Level banner shown before the sequence replay.
pub fn draw_announce<S: Screen>(screen: &mut S, level: usize) {
    let mut line: String<16> = String::new();
    let _ = write!(line, "Level {level}");

    screen.clear();
    screen.draw_text(0, 10, &line);
    screen.draw_text(0, 24, "Watch me!");
    screen.flush();
}

/// Selection view: color labels, boxes, cursor arrow, optional check
/// mark, and the "Step N" status line.
pub fn draw_selection<S: Screen>(
    screen: &mut S,
    cursor: ColorIndex,
    step: usize,
    confirmed: Option<ColorIndex>,
) {
    screen.clear();

    for color in ColorIndex::ALL {
        let i = color.index();
        screen.draw_glyph(LABEL_XS[i], LABEL_Y, Glyph::for_color(color));
        screen.draw_glyph(BOX_XS[i], BOX_Y, Glyph::Box);
    }

    screen.draw_glyph(ARROW_XS[cursor.index()], ARROW_Y, Glyph::Arrow);

    if let Some(choice) = confirmed {
        screen.draw_glyph(ARROW_XS[choice.index()], CHECK_Y, Glyph::Check);
    }

    // Steps are 0-indexed internally, 1-indexed for the player.
    let mut line: String<16> = String::new();
    let _ = write!(line, "Step {}", step + 1);
    screen.draw_text(0, STATUS_Y, &line);

    screen.flush();
}

/// Success banner after a cleared level.
pub fn draw_success<S: Screen>(screen: &mut S, level: usize) {
    let mut line: String<16> = String::new();
    let _ = write!(line, "Level {level}");

    screen.clear();
    screen.draw_text(0, 10, &line);
    screen.draw_text(0, 24, "Success!");
    screen.flush();
}

/// Game-over banner with the final score.
pub fn draw_game_over<S: Screen>(screen: &mut S, score: usize) {
    let mut line: String<16> = String::new();
    let _ = write!(line, "Score: {score}");

    screen.clear();
    screen.draw_text(0, 10, "Game over!");
    screen.draw_text(0, 24, &line);
    screen.flush();
}

/// Congratulations banner after clearing every level.
pub fn draw_win<S: Screen>(screen: &mut S) {
    screen.clear();
    screen.draw_text(0, 10, "Congratulations!");
    screen.draw_text(0, 24, "All levels clear");
    screen.flush();
}

/// Restart prompt shown after the game-over reset.
pub fn draw_restart_prompt<S: Screen>(screen: &mut S) {
    screen.clear();
    screen.draw_text(0, 10, "Press any key");
    screen.draw_text(0, 24, "to restart");
    screen.flush();
}
