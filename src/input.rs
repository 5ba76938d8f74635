//! Joystick collaborator and the mapping from raw axes to game commands.

use crate::config::{
    JOYSTICK_CENTER,
    JOYSTICK_DEAD_ZONE,
    JOYSTICK_THRESHOLD_HIGH,
    JOYSTICK_THRESHOLD_LOW,
    JUMP_EXTRA_TRAVEL,
};

/// One reading of both axes, in 12-bit ADC counts (`0..=4095`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisSample {
    pub x: u16,
    pub y: u16,
}

impl AxisSample {
    /// Stick at rest.
    pub const CENTERED: Self = Self {
        x: JOYSTICK_CENTER as u16,
        y: JOYSTICK_CENTER as u16,
    };
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Left,
    #[default]
    Idle,
    Right,
}

impl Direction {
    /// `-1`, `0` or `1`.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Self::Left => -1,
            Self::Idle => 0,
            Self::Right => 1,
        }
    }
}

/// What the player asked for this tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command {
    pub direction: Direction,
    pub jump: bool,
}

/// Source of raw stick readings.
pub trait Joystick {
    type Error;

    fn sample(&mut self) -> Result<AxisSample, Self::Error>;
}

/// Translate a raw reading into a command.
///
/// Horizontal input inside the dead zone is ignored; outside it the stick
/// must still cross the high or low threshold to register. Jumping needs
/// the vertical axis pushed up past the low threshold with extra travel.
#[must_use]
pub fn map_axes(sample: AxisSample) -> Command {
    let x = i32::from(sample.x);
    let y = i32::from(sample.y);

    let direction = if (x - JOYSTICK_CENTER).abs() < JOYSTICK_DEAD_ZONE {
        Direction::Idle
    } else if x < JOYSTICK_THRESHOLD_LOW {
        Direction::Left
    } else if x > JOYSTICK_THRESHOLD_HIGH {
        Direction::Right
    } else {
        Direction::Idle
    };

    Command {
        direction,
        jump: y < JOYSTICK_THRESHOLD_LOW - JUMP_EXTRA_TRAVEL,
    }
}

/// Median of a burst of reads, for rejecting ADC spikes.
///
/// Sorts `reads` in place.
///
/// # Panics
///
/// Panics if `reads` is empty.
pub fn median(reads: &mut [u16]) -> u16 {
    assert!(!reads.is_empty(), "median of no reads");
    reads.sort_unstable();
    reads[reads.len() / 2]
}
