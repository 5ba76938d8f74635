//! Game session: owns the player and the live level and drives the
//! play → level complete → game complete state machine.
//!
//! [`Session::tick`] runs one simulation step. When the last coin of a level
//! is taken the session stops in [`Phase::LevelComplete`]; each call to
//! [`Session::advance`] then moves one stage forward and names the
//! announcement to show before play resumes.

use crate::{
    clock::{
        Duration,
        Instant,
    },
    config::{
        COIN_VALUE,
        GAME_COMPLETE_HOLD,
        LEVEL_START_HOLD,
        TOTAL_LEVELS,
    },
    entity::{
        Entity,
        Player,
    },
    input::Command,
    level::Level,
    physics,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Playing(u8),
    LevelComplete(u8),
    GameComplete,
}

/// Modal message shown between levels. No input is processed while it holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Announcement {
    LevelStart(u8),
    GameComplete,
}

impl Announcement {
    /// How long the announcement stays up.
    #[must_use]
    pub const fn hold(self) -> Duration {
        match self {
            Self::LevelStart(_) => LEVEL_START_HOLD,
            Self::GameComplete => GAME_COMPLETE_HOLD,
        }
    }
}

/// What happened during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    pub jumped: bool,
    /// Coins picked up this tick.
    pub coins: u8,
    /// The tick took the last coin of the level.
    pub cleared: bool,
}

#[derive(Clone, Debug)]
pub struct Session {
    player: Player,
    level: Level,
    phase: Phase,
}

impl Session {
    /// Fresh game on level 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            player: Player::new(),
            level: Level::load(1),
            phase: Phase::Playing(1),
        }
    }

    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub const fn level(&self) -> &Level {
        &self.level
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn is_playing(&self) -> bool {
        matches!(self.phase, Phase::Playing(_))
    }

    /// Run one simulation step: jump, walk, physics, coins, completion.
    ///
    /// Does nothing outside [`Phase::Playing`].
    pub fn tick(&mut self, command: Command, now: Instant) -> TickReport {
        let mut report = TickReport::default();
        if !self.is_playing() {
            debug!("tick ignored in {}", self.phase);
            return report;
        }

        if command.jump {
            report.jumped = physics::try_jump(&mut self.player, now);
        }
        physics::walk(&mut self.player, command.direction);
        physics::step(&mut self.player, &self.level.platforms);

        for coin in &mut self.level.coins {
            if !coin.is_collected() && coin.overlaps(&self.player) && coin.collect() {
                self.player.add_score(COIN_VALUE);
                report.coins += 1;
                debug!("coin collected, score {}", self.player.score);
            }
        }

        if self.level.is_complete() {
            info!("level {} complete, score {}", self.level.number, self.player.score);
            self.phase = Phase::LevelComplete(self.level.number);
            report.cleared = true;
        }

        report
    }

    /// Move one stage through a completion transition.
    ///
    /// Returns the announcement to show, or `None` while playing.
    pub fn advance(&mut self) -> Option<Announcement> {
        match self.phase {
            Phase::Playing(_) => None,
            Phase::LevelComplete(number) if number < TOTAL_LEVELS => {
                self.enter(number + 1);
                Some(Announcement::LevelStart(number + 1))
            }
            Phase::LevelComplete(_) => {
                info!("game complete, final score {}", self.player.score);
                self.phase = Phase::GameComplete;
                Some(Announcement::GameComplete)
            }
            Phase::GameComplete => {
                self.player.restart();
                self.enter(1);
                Some(Announcement::LevelStart(1))
            }
        }
    }

    fn enter(&mut self, number: u8) {
        self.level = Level::load(number);
        self.player.level = number;
        self.player.reset_position();
        self.phase = Phase::Playing(number);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
