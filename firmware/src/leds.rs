//! WS2812 addressable LED driver using the RMT peripheral.
//!
//! The badge's ten LEDs form two vertical bars; the game uses them as
//! gauges (coins on the left, level on the right).

extern crate alloc;

use defmt::error;
use embassy_time::{
    Duration,
    Timer,
};
use esp_hal::{
    Blocking,
    gpio::Level,
    rmt::{
        PulseCode,
        Tx,
    },
};
use palette::Srgb;

/// Number of WS2812 LEDs on the badge.
/// Two bars of five, indexed counter clockwise from the bottom right:
/// 0 is bottom right, 4 top right, 5 top left, 9 bottom left.
pub const LED_COUNT: usize = 10;

/// Number of LEDs per bar (left or right).
pub const BAR_COUNT: usize = 5;

const OFF: Srgb<u8> = Srgb::new(0, 0, 0);

/// WS2812 strip driver with an in-memory framebuffer flushed by
/// [`update`](Leds::update).
pub struct Leds<'a> {
    channel: Option<esp_hal::rmt::Channel<'a, Blocking, Tx>>,
    framebuffer: [Srgb<u8>; LED_COUNT],
}

impl<'a> Leds<'a> {
    pub const fn new(channel: esp_hal::rmt::Channel<'a, Blocking, Tx>) -> Self {
        Self {
            channel: Some(channel),
            framebuffer: [OFF; LED_COUNT],
        }
    }

    /// Flush the framebuffer to the physical LEDs.
    pub async fn update(&mut self) {
        let Some(channel) = self.channel.take() else {
            error!("RMT channel lost during previous transmission");
            return;
        };

        let pulses = self
            .framebuffer
            .iter()
            .flat_map(|c| {
                // WS2812 expects GRB byte order
                [
                    Self::byte_to_pulses(c.green),
                    Self::byte_to_pulses(c.red),
                    Self::byte_to_pulses(c.blue),
                ]
                .into_iter()
                .flatten()
            })
            .chain(core::iter::once(PulseCode::end_marker()))
            .collect::<alloc::vec::Vec<_>>();

        let transaction = match channel.transmit(&pulses) {
            Ok(t) => t,
            Err(e) => {
                error!("RMT transmit failed: {}", e);
                return;
            }
        };

        self.channel = Some(match transaction.wait() {
            Ok(ch) => ch,
            Err((err, ch)) => {
                error!("RMT transaction failed: {}", err);
                ch
            }
        });

        // WS2812 reset time
        Timer::after(Duration::from_micros(50)).await;
    }

    /// Fill all LEDs with one colour.
    pub fn fill(&mut self, color: Srgb<u8>) {
        self.framebuffer.fill(color);
    }

    /// Turn all LEDs off.
    pub fn clear(&mut self) {
        self.fill(OFF);
    }

    /// Set the right bar, bottom-to-top (index 0 is the bottom LED).
    pub fn set_right_bar(&mut self, colors: &[Srgb<u8>; BAR_COUNT]) {
        // Hardware indices 0 (bottom) .. 4 (top) already run bottom-to-top.
        self.framebuffer[..BAR_COUNT].copy_from_slice(colors);
    }

    /// Set the left bar, bottom-to-top (index 0 is the bottom LED).
    pub fn set_left_bar(&mut self, colors: &[Srgb<u8>; BAR_COUNT]) {
        // Hardware index 5 = top, 9 = bottom.
        for (i, color) in colors.iter().enumerate() {
            self.framebuffer[LED_COUNT - 1 - i] = *color;
        }
    }

    // ── Internal helpers ────────────────────────────────────────────────

    /// WS2812 bit timing at 40 MHz RMT clock.
    const fn bit_to_pulse(bit: bool) -> PulseCode {
        if bit {
            // '1': 0.8 µs high (32 ticks), 0.45 µs low (18 ticks)
            PulseCode::new(Level::High, 32, Level::Low, 18)
        } else {
            // '0': 0.4 µs high (16 ticks), 0.85 µs low (34 ticks)
            PulseCode::new(Level::High, 16, Level::Low, 34)
        }
    }

    fn byte_to_pulses(byte: u8) -> [PulseCode; 8] {
        let mut pulses = [PulseCode::default(); 8];
        for (i, pulse) in pulses.iter_mut().enumerate() {
            *pulse = Self::bit_to_pulse((byte >> (7 - i)) & 1 != 0);
        }
        pulses
    }
}

/// A bar lit from the bottom in proportion to `filled / total`.
///
/// Any progress lights at least one LED; a full gauge lights all five.
#[must_use]
pub fn gauge(filled: u8, total: u8, color: Srgb<u8>) -> [Srgb<u8>; BAR_COUNT] {
    let lit = if total == 0 {
        0
    } else {
        (usize::from(filled.min(total)) * BAR_COUNT).div_ceil(usize::from(total))
    };

    let mut bar = [OFF; BAR_COUNT];
    bar[..lit].fill(color);
    bar
}
