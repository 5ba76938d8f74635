//! Platformer for the Disobey 2026 badge.
//!
//! - Tilt the analog stick left/right to walk, push it up to jump
//! - Collect every coin to clear a level; five levels, then it starts over
//! - Left LED bar fills with the coins collected, right bar shows the level
//! - The motor buzzes on pickups and level changes

#![no_std]
#![no_main]

use defmt::{
    info,
    warn,
};
use embassy_executor::Spawner;
use embassy_futures::join::join;
use embassy_sync::{
    blocking_mutex::raw::CriticalSectionRawMutex,
    channel::Channel,
};
use embassy_time::{
    Duration,
    Timer,
};
use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;
use esp_println as _;
use palette::Srgb;
use platformer::{
    Clock,
    Cue,
    Feedback,
    Game,
    Instant,
    config::{
        TICK_PERIOD,
        TOTAL_LEVELS,
    },
};
#[allow(clippy::wildcard_imports)]
use platformer_firmware::*;

extern crate alloc;

esp_bootloader_esp_idf::esp_app_desc!();

const COIN_COLOR: Srgb<u8> = Srgb::new(30, 22, 0);
const LEVEL_COLOR: Srgb<u8> = Srgb::new(0, 6, 30);
const WIN_COLOR: Srgb<u8> = Srgb::new(0, 30, 0);
const OFF: [Srgb<u8>; BAR_COUNT] = [Srgb::new(0, 0, 0); BAR_COUNT];

// ── Feedback cues ───────────────────────────────────────────────────────────

static CUES: Channel<CriticalSectionRawMutex, Cue, 8> = Channel::new();

/// Hands cues to [`feedback_task`] without ever waiting on it.
struct CueSender;

impl Feedback for CueSender {
    fn cue(&mut self, cue: Cue) {
        if CUES.try_send(cue).is_err() {
            warn!("feedback queue full, dropped {}", cue);
        }
    }
}

/// Milliseconds since boot from the embassy time driver.
struct Uptime;

impl Clock for Uptime {
    fn now(&self) -> Instant {
        Instant::from_ticks(embassy_time::Instant::now().as_millis())
    }
}

fn wait_for(pause: platformer::Duration) -> Timer {
    Timer::after(Duration::from_millis(pause.to_millis()))
}

// ── Tasks ───────────────────────────────────────────────────────────────────

#[embassy_executor::task]
async fn feedback_task(leds: &'static mut Leds<'static>, vibra: &'static mut Vibration) {
    info!("Feedback task started");
    leds.clear();
    leds.update().await;

    loop {
        match CUES.receive().await {
            Cue::Coin { collected, total } => {
                leds.set_left_bar(&gauge(collected, total, COIN_COLOR));
                join(leds.update(), vibra.pulse(Duration::from_millis(30))).await;
            }
            Cue::LevelStart(number) => {
                leds.set_left_bar(&OFF);
                leds.set_right_bar(&gauge(number, TOTAL_LEVELS, LEVEL_COLOR));
                let buzz = vibra.pulses(2, Duration::from_millis(60), Duration::from_millis(60));
                join(leds.update(), buzz).await;
            }
            Cue::GameComplete => {
                let buzz = vibra.pulse(Duration::from_millis(300));
                let flash = async {
                    for _ in 0..3 {
                        leds.fill(WIN_COLOR);
                        leds.update().await;
                        Timer::after(Duration::from_millis(200)).await;
                        leds.clear();
                        leds.update().await;
                        Timer::after(Duration::from_millis(200)).await;
                    }
                };
                join(flash, buzz).await;
            }
        }
    }
}

#[embassy_executor::task]
async fn game_task(screen: BadgeScreen<'static>, joystick: BadgeJoystick<'static>) {
    info!("Platformer started");
    let mut game = Game::new(joystick, screen, Uptime, CueSender);

    let opening = game.open();
    wait_for(opening.pause().unwrap_or(TICK_PERIOD)).await;

    loop {
        let step = game.tick();
        wait_for(step.pause().unwrap_or(TICK_PERIOD)).await;
    }
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let peripherals = platformer_firmware::init();
    let resources = split_resources!(peripherals);

    esp_alloc::heap_allocator!(size: 64 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let screen = BadgeScreen::new(resources.display.into(), resources.backlight);
    let joystick: BadgeJoystick<'static> = resources.joystick.into();
    let leds = mk_static!(Leds<'static>, resources.leds.into());
    let vibra = mk_static!(Vibration, resources.vibra.into());

    spawner.must_spawn(feedback_task(leds, vibra));
    spawner.must_spawn(game_task(screen, joystick));

    loop {
        Timer::after(Duration::from_secs(600)).await;
    }
}
