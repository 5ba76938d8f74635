//! Gameplay tuning. Everything is fixed at compile time.

use crate::clock::Duration;

// ── Screen ──────────────────────────────────────────────────────────────────

/// Logical screen width in pixels.
pub const SCREEN_WIDTH: u16 = 128;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: u16 = 64;
/// Y coordinate of the ground line. Entities rest with their bottom edge on it.
pub const GROUND_HEIGHT: f32 = 50.0;

// ── Player ──────────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: u16 = 8;
pub const PLAYER_HEIGHT: u16 = 8;
/// Horizontal start position for every level.
pub const PLAYER_START_X: f32 = 20.0;

// ── Physics (units per tick) ────────────────────────────────────────────────

pub const GRAVITY: f32 = 0.5;
/// Initial vertical velocity of a jump. Negative is up.
pub const JUMP_FORCE: f32 = -6.0;
pub const MOVE_SPEED: f32 = 2.0;
/// Minimum time between two accepted jumps.
pub const JUMP_COOLDOWN: Duration = Duration::from_ticks(250);

// ── Level geometry ──────────────────────────────────────────────────────────

pub const PLATFORM_HEIGHT: u16 = 4;
pub const COIN_SIZE: u16 = 4;
pub const TOTAL_LEVELS: u8 = 5;

// ── Scoring ─────────────────────────────────────────────────────────────────

pub const COIN_VALUE: u32 = 100;

// ── Joystick (12-bit ADC counts) ────────────────────────────────────────────

pub const JOYSTICK_MAX: u16 = 4095;
pub const JOYSTICK_CENTER: i32 = 2048;
/// Readings closer than this to the center are treated as no input.
pub const JOYSTICK_DEAD_ZONE: i32 = 300;
pub const JOYSTICK_THRESHOLD_HIGH: i32 = JOYSTICK_CENTER + 1000;
pub const JOYSTICK_THRESHOLD_LOW: i32 = JOYSTICK_CENTER - 1000;
/// The vertical axis must be pushed past the low threshold by this much to jump.
pub const JUMP_EXTRA_TRAVEL: i32 = 200;

// ── Timing ──────────────────────────────────────────────────────────────────

/// Nominal period of one simulation/render step.
pub const TICK_PERIOD: Duration = Duration::from_ticks(20);
pub const LEVEL_START_HOLD: Duration = Duration::from_ticks(2000);
pub const GAME_COMPLETE_HOLD: Duration = Duration::from_ticks(3000);
/// Pause after a collaborator fault before the next tick.
pub const FAULT_BACKOFF: Duration = Duration::from_ticks(1000);
