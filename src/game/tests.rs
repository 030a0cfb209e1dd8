//! State-machine tests against scripted fakes of every capability.

use std::collections::VecDeque;

use crate::config::{
    ANNOUNCE_PAUSE_MS, CONFIRM_HOLD_MS, MAX_GAME_LENGTH, REPLAY_GAP_MS, REPLAY_PULSE_MS,
    WIN_PAUSE_MS,
};
use crate::game::machine::{Board, Game};
use crate::game::select::collect_step;
use crate::game::{ColorIndex, GamePhase};
use crate::io::rng::Rng;
use crate::io::{Button, Delay, InputSource, Leds};
use crate::ui::{Glyph, Screen};

// ════════════════════════════════════════════════════════════════════════
// Scripted capabilities
// ════════════════════════════════════════════════════════════════════════

/// Records every LED transition.
#[derive(Default)]
struct RecLeds {
    events: Vec<(ColorIndex, bool)>,
}

impl Leds for RecLeds {
    fn set(&mut self, color: ColorIndex, on: bool) {
        self.events.push((color, on));
    }
}

/// Replays a fixed queue of press events; panics when the machine would
/// block forever on input that never comes.
struct ScriptInput {
    queue: VecDeque<Button>,
}

impl ScriptInput {
    fn new(presses: impl IntoIterator<Item = Button>) -> Self {
        Self {
            queue: presses.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptInput {
    fn is_pressed(&mut self, _button: Button) -> bool {
        false
    }

    fn wait_for_press(&mut self, button: Button) {
        let next = self.queue.pop_front().expect("input queue is empty");
        assert_eq!(next, button, "waited on the wrong button");
    }

    fn wait_for_any(&mut self) -> Button {
        self.queue.pop_front().expect("input queue is empty")
    }
}

/// Frame sink that drops everything.
#[derive(Default)]
struct NullScreen;

impl Screen for NullScreen {
    fn clear(&mut self) {}
    fn draw_glyph(&mut self, _x: i32, _y: i32, _glyph: Glyph) {}
    fn draw_text(&mut self, _x: i32, _y: i32, _text: &str) {}
    fn flush(&mut self) {}
}

/// Virtual time: waits are logged, not slept.
#[derive(Default)]
struct VirtualDelay {
    log: Vec<u64>,
}

impl Delay for VirtualDelay {
    fn delay_ms(&mut self, ms: u64) {
        self.log.push(ms);
    }
}

/// Emits a scripted list of colors (raw value = color index, so the
/// uniform draw maps it straight through).
struct ScriptRng {
    values: VecDeque<u32>,
}

impl ScriptRng {
    fn colors(colors: &[ColorIndex]) -> Self {
        Self {
            values: colors.iter().map(|c| c.index() as u32).collect(),
        }
    }

    fn repeat(color: ColorIndex, count: usize) -> Self {
        Self {
            values: (0..count).map(|_| color.index() as u32).collect(),
        }
    }
}

impl Rng for ScriptRng {
    fn next_u32(&mut self) -> u32 {
        self.values.pop_front().expect("rng script exhausted")
    }
}

type SimBoard = Board<RecLeds, ScriptInput, NullScreen, VirtualDelay, ScriptRng>;

fn sim_board(colors: ScriptRng, presses: Vec<Button>) -> SimBoard {
    Board {
        leds: RecLeds::default(),
        input: ScriptInput::new(presses),
        screen: NullScreen,
        delay: VirtualDelay::default(),
        rng: colors,
    }
}

/// Cycle presses to reach `color` from the reset cursor, plus confirm.
fn confirm(color: ColorIndex) -> Vec<Button> {
    let mut presses = vec![Button::Cycle; color.index()];
    presses.push(Button::Confirm);
    presses
}

/// Step the machine until `stop` matches, with a runaway guard.
fn step_until(game: &mut Game, board: &mut SimBoard, stop: impl Fn(GamePhase) -> bool) {
    for _ in 0..100_000 {
        if stop(game.phase()) {
            return;
        }
        game.step(board);
    }
    panic!("machine never reached the expected phase");
}

// ════════════════════════════════════════════════════════════════════════
// Phase Transition Tests
// ════════════════════════════════════════════════════════════════════════

#[test]
fn boots_into_awaiting_start() {
    let game = Game::new();
    assert_eq!(game.phase(), GamePhase::AwaitingStart);
    assert!(game.sequence().is_empty());
}

#[test]
fn any_button_starts_level_one() {
    let mut board = sim_board(ScriptRng::colors(&[]), vec![Button::Confirm]);
    let mut game = Game::new();
    game.step(&mut board);
    assert_eq!(game.phase(), GamePhase::Announcing(1));
}

#[test]
#[should_panic(expected = "input queue is empty")]
fn awaiting_start_blocks_forever_without_input() {
    // Liveness property: no progress without external input. The fake
    // turns the unbounded wait into a panic.
    let mut board = sim_board(ScriptRng::colors(&[]), vec![]);
    Game::new().step(&mut board);
}

#[test]
fn announcing_pauses_then_replays() {
    let mut board = sim_board(ScriptRng::colors(&[]), vec![Button::Cycle]);
    let mut game = Game::new();
    game.step(&mut board); // AwaitingStart
    game.step(&mut board); // Announcing(1)
    assert_eq!(game.phase(), GamePhase::Replaying(1));
    assert!(board.delay.log.contains(&ANNOUNCE_PAUSE_MS));
}

#[test]
fn replaying_appends_one_color_and_pulses_its_led() {
    let mut board = sim_board(
        ScriptRng::colors(&[ColorIndex::Green]),
        vec![Button::Confirm],
    );
    let mut game = Game::new();
    step_until(&mut game, &mut board, |p| {
        p == GamePhase::Collecting { level: 1, step: 0 }
    });

    assert_eq!(game.sequence().len(), 1);
    assert_eq!(game.sequence().get(0), Some(ColorIndex::Green));
    assert_eq!(
        board.leds.events,
        vec![(ColorIndex::Green, true), (ColorIndex::Green, false)]
    );
    // Pulse width and inter-step gap.
    let pulse_at = board
        .delay
        .log
        .iter()
        .position(|&ms| ms == REPLAY_PULSE_MS)
        .expect("no replay pulse");
    assert_eq!(board.delay.log[pulse_at + 1], REPLAY_GAP_MS);
}

// ════════════════════════════════════════════════════════════════════════
// Scenario Tests
// ════════════════════════════════════════════════════════════════════════

#[test]
fn level_one_green_confirmed_reaches_level_up_then_level_two() {
    // Scenario: level=1, sequence=[Green]; user confirms Green.
    let mut presses = vec![Button::Confirm]; // start
    presses.extend(confirm(ColorIndex::Green));
    let mut board = sim_board(ScriptRng::colors(&[ColorIndex::Green]), presses);
    let mut game = Game::new();

    step_until(&mut game, &mut board, |p| p == GamePhase::LevelUp(1));
    game.step(&mut board);
    assert_eq!(game.phase(), GamePhase::Announcing(2));
}

#[test]
fn all_correct_confirms_never_hit_game_over() {
    // Three full levels of exact matches; the machine must only route
    // through LevelUp, never GameOver.
    let sequence = [ColorIndex::Red, ColorIndex::Yellow, ColorIndex::Green];
    let mut presses = vec![Button::Cycle]; // start
    for level in 1..=sequence.len() {
        for &color in &sequence[..level] {
            presses.extend(confirm(color));
        }
    }
    let mut board = sim_board(ScriptRng::colors(&sequence), presses);
    let mut game = Game::new();

    loop {
        assert!(!matches!(game.phase(), GamePhase::GameOver(_)));
        if game.phase() == GamePhase::Announcing(4) {
            break;
        }
        game.step(&mut board);
    }
    assert_eq!(game.sequence().len(), 3);
}

#[test]
fn mismatch_scores_the_completed_levels() {
    // Scenario: level=3, sequence=[Red, Yellow, Green]; user confirms
    // [Red, Green, ...]. Mismatch at step 1 → score 2, the levels
    // completed before this attempt.
    let sequence = [ColorIndex::Red, ColorIndex::Yellow, ColorIndex::Green];
    let mut presses = vec![Button::Confirm]; // start
    presses.extend(confirm(ColorIndex::Red)); // level 1
    presses.extend(confirm(ColorIndex::Red)); // level 2
    presses.extend(confirm(ColorIndex::Yellow));
    presses.extend(confirm(ColorIndex::Red)); // level 3, step 0
    presses.extend(confirm(ColorIndex::Green)); // step 1: diverges
    let mut board = sim_board(ScriptRng::colors(&sequence), presses);
    let mut game = Game::new();

    step_until(&mut game, &mut board, |p| {
        matches!(p, GamePhase::GameOver(_))
    });
    assert_eq!(game.phase(), GamePhase::GameOver(2));
}

#[test]
fn inputs_after_the_first_mismatch_are_never_consulted() {
    let mut presses = vec![Button::Confirm]; // start
    presses.extend(confirm(ColorIndex::Yellow)); // wrong: sequence is [Red]
    presses.extend([Button::Cycle, Button::Cycle, Button::Confirm]); // junk
    let junk = 3;
    let mut board = sim_board(ScriptRng::colors(&[ColorIndex::Red]), presses);
    let mut game = Game::new();

    step_until(&mut game, &mut board, |p| {
        matches!(p, GamePhase::GameOver(_))
    });
    assert_eq!(game.phase(), GamePhase::GameOver(0));
    assert_eq!(board.input.queue.len(), junk);
}

#[test]
fn game_over_resets_and_loops_back_to_the_title() {
    let mut presses = vec![Button::Confirm]; // start
    presses.extend(confirm(ColorIndex::Yellow)); // wrong: sequence is [Red]
    presses.push(Button::Cycle); // restart prompt
    let mut board = sim_board(ScriptRng::colors(&[ColorIndex::Red]), presses);
    let mut game = Game::new();

    step_until(&mut game, &mut board, |p| {
        matches!(p, GamePhase::GameOver(_))
    });
    game.step(&mut board); // runs banner, flash, reset, restart wait
    assert_eq!(game.phase(), GamePhase::AwaitingStart);
    assert!(game.sequence().is_empty());
}

#[test]
fn clearing_every_level_wins_with_maximum_score() {
    // 100 all-Red levels, every answer correct. The 101st extend must
    // route through the congratulations banner into GameOver with the
    // maximum score, reusing the reset path.
    let mut presses = vec![Button::Confirm]; // start
    for level in 1..=MAX_GAME_LENGTH {
        for _ in 0..level {
            presses.extend(confirm(ColorIndex::Red));
        }
    }
    let mut board = sim_board(ScriptRng::repeat(ColorIndex::Red, MAX_GAME_LENGTH), presses);
    let mut game = Game::new();

    step_until(&mut game, &mut board, |p| {
        matches!(p, GamePhase::GameOver(_))
    });
    assert_eq!(game.phase(), GamePhase::GameOver(MAX_GAME_LENGTH));
    assert!(board.delay.log.contains(&WIN_PAUSE_MS));
}

// ════════════════════════════════════════════════════════════════════════
// Selection Protocol Tests
// ════════════════════════════════════════════════════════════════════════

#[test]
fn collect_step_cycles_then_confirms() {
    let mut screen = NullScreen;
    let mut delay = VirtualDelay::default();
    let mut input = ScriptInput::new([Button::Cycle, Button::Cycle, Button::Confirm]);
    let chosen = collect_step(&mut screen, &mut input, &mut delay, 0);
    assert_eq!(chosen, ColorIndex::Green);
    assert!(delay.log.contains(&CONFIRM_HOLD_MS));
}

#[test]
fn cursor_resets_to_red_for_every_step() {
    // Confirm Green on one step, then immediately confirm on the next:
    // the cursor must be back at Red, not carried over.
    let mut screen = NullScreen;
    let mut delay = VirtualDelay::default();
    let mut input = ScriptInput::new([
        Button::Cycle,
        Button::Cycle,
        Button::Confirm,
        Button::Confirm,
    ]);
    assert_eq!(
        collect_step(&mut screen, &mut input, &mut delay, 0),
        ColorIndex::Green
    );
    assert_eq!(
        collect_step(&mut screen, &mut input, &mut delay, 1),
        ColorIndex::Red
    );
}

#[test]
fn cursor_wraps_back_to_red_after_green() {
    let mut screen = NullScreen;
    let mut delay = VirtualDelay::default();
    let mut input = ScriptInput::new([
        Button::Cycle,
        Button::Cycle,
        Button::Cycle,
        Button::Confirm,
    ]);
    assert_eq!(
        collect_step(&mut screen, &mut input, &mut delay, 0),
        ColorIndex::Red
    );
}
