//! Vibration motor for haptic cues.

use embassy_time::{
    Duration,
    Timer,
};
use esp_hal::gpio::{
    Level,
    Output,
    OutputConfig,
};

use crate::VibrationResources;

/// The onboard vibration motor, off until pulsed.
pub struct Vibration {
    pin: Output<'static>,
}

impl From<VibrationResources<'static>> for Vibration {
    fn from(res: VibrationResources<'static>) -> Self {
        Self {
            pin: Output::new(res.motor, Level::Low, OutputConfig::default()),
        }
    }
}

impl Vibration {
    /// Buzz for the given duration, then stop.
    pub async fn pulse(&mut self, duration: Duration) {
        self.pin.set_high();
        Timer::after(duration).await;
        self.pin.set_low();
    }

    /// `count` pulses separated by `gap`.
    pub async fn pulses(&mut self, count: u8, duration: Duration, gap: Duration) {
        for i in 0..count {
            if i > 0 {
                Timer::after(gap).await;
            }
            self.pulse(duration).await;
        }
    }
}
