//! Firmware entry point: boot straight into the game loop.
//!
//! Single-task, fully synchronous firmware. The Embassy executor runs
//! one task that blocks through every LED pulse, display flush, and
//! button wait - there is nothing else to schedule.

#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_nrf::gpio::Pin as _;
use embassy_nrf::{bind_interrupts, peripherals, twim};
use embassy_time::Instant;
use panic_probe as _;

use memoled::game::machine::{Board, Game};
use memoled::hw::buttons::ButtonPins;
use memoled::hw::display::Oled;
use memoled::hw::leds::GameLeds;
use memoled::hw::BlockingDelay;
use memoled::io::debounce::Debouncer;
use memoled::io::rng::Xorshift32;

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("memoled starting");

    // Pin assignments are documented in config.rs.
    let i2c = twim::Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let screen = Oled::new(i2c);
    let leds = GameLeds::new(p.P0_03.degrade(), p.P0_04.degrade(), p.P0_28.degrade());
    let lines = ButtonPins::new(p.P0_11.degrade(), p.P0_12.degrade());
    let input = Debouncer::new(lines, BlockingDelay);

    let rng = Xorshift32::new(Instant::now().as_ticks() as u32);

    let mut board = Board {
        leds,
        input,
        screen,
        delay: BlockingDelay,
        rng,
    };
    let mut game = Game::new();

    loop {
        info!("phase: {}", game.phase());
        game.step(&mut board);
    }
}
