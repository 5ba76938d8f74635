//! The player, platforms and coins.
//!
//! Each kind embeds a [`Rect`] by value; the shared capability is just
//! exposing those bounds. Behaviour lives in [`physics`](crate::physics)
//! and [`session`](crate::session).

use crate::{
    clock::Instant,
    config::{
        COIN_SIZE,
        GROUND_HEIGHT,
        PLATFORM_HEIGHT,
        PLAYER_HEIGHT,
        PLAYER_START_X,
        PLAYER_WIDTH,
    },
    geometry::Rect,
};

/// Anything with a box on screen.
pub trait Entity {
    fn bounds(&self) -> Rect;

    fn overlaps(&self, other: &impl Entity) -> bool
    where
        Self: Sized,
    {
        self.bounds().overlaps(&other.bounds())
    }
}

// ── Player ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Player {
    pub body: Rect,
    /// Vertical velocity in units per tick. Negative is up.
    pub vy: f32,
    pub is_jumping: bool,
    /// Sticky: only changes when the player actually walks.
    pub facing_right: bool,
    pub score: u32,
    /// Current level, `1..=TOTAL_LEVELS`.
    pub level: u8,
    /// When the last jump was accepted; `None` until the first one.
    pub last_jump: Option<Instant>,
}

impl Player {
    #[must_use]
    pub fn new() -> Self {
        Self {
            body: Rect::new(PLAYER_START_X, Self::standing_y(), PLAYER_WIDTH, PLAYER_HEIGHT),
            vy: 0.0,
            is_jumping: false,
            facing_right: true,
            score: 0,
            level: 1,
            last_jump: None,
        }
    }

    /// Back to the level start position, at rest. Score and level are kept.
    pub fn reset_position(&mut self) {
        self.body.x = PLAYER_START_X;
        self.body.y = Self::standing_y();
        self.vy = 0.0;
        self.is_jumping = false;
    }

    /// Full reset after the last level: score to zero, back to level 1.
    pub fn restart(&mut self) {
        self.score = 0;
        self.level = 1;
        self.reset_position();
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Y of a player standing on the ground.
    #[must_use]
    pub fn standing_y() -> f32 {
        GROUND_HEIGHT - f32::from(PLAYER_HEIGHT)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Player {
    fn bounds(&self) -> Rect {
        self.body
    }
}

// ── Platform ────────────────────────────────────────────────────────────────

/// A fixed ledge. Only takes part in vertical collision.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Platform {
    body: Rect,
}

impl Platform {
    #[must_use]
    pub fn new(x: f32, y: f32, width: u16) -> Self {
        Self {
            body: Rect::new(x, y, width, PLATFORM_HEIGHT),
        }
    }
}

impl Entity for Platform {
    fn bounds(&self) -> Rect {
        self.body
    }
}

// ── Coin ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Coin {
    body: Rect,
    collected: bool,
}

impl Coin {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            body: Rect::new(x, y, COIN_SIZE, COIN_SIZE),
            collected: false,
        }
    }

    #[must_use]
    pub const fn is_collected(&self) -> bool {
        self.collected
    }

    /// Mark the coin collected. Returns `true` only on the first call.
    pub fn collect(&mut self) -> bool {
        !core::mem::replace(&mut self.collected, true)
    }
}

impl Entity for Coin {
    fn bounds(&self) -> Rect {
        self.body
    }
}
