//! Simon-style memory game for a three-LED, two-button, SSD1306 board.
//!
//! The game logic (sequence engine, selection protocol, state machine,
//! debounce, frame composition) is pure and lives in this library so it
//! can be tested on the host without hardware. All physical I/O goes
//! through small capability traits in [`io`] and [`ui`]; the `embedded`
//! cargo feature pulls in the nRF52840 implementations under [`hw`].
//!
//! Usage: `cargo test` for host tests,
//! `cargo build --features embedded --target thumbv7em-none-eabihf --release`
//! for the firmware binary (main.rs).

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod game;
pub mod io;
pub mod ui;

#[cfg(feature = "embedded")]
pub mod hw;
