//! # badge-platformer
//!
//! Hardware-independent core of a small platform game for a 128×64
//! monochrome screen and a two-axis analog joystick.
//!
//! - **Simulation**: [`physics`] integrates gravity and resolves ground and
//!   platform collisions for the [`Player`](entity::Player)
//! - **Levels**: [`level`] builds fresh platform/coin sets from a fixed table
//! - **Session**: [`session`] runs the play → level complete → game complete
//!   state machine
//! - **Collaborators**: [`Joystick`](input::Joystick), [`Screen`](frame::Screen),
//!   [`Clock`](clock::Clock) and [`Feedback`](feedback::Feedback) are injected
//!   into the [`Game`](game::Game) runner
//!
//! ## Quick start
//!
//! ```rust,ignore
//! let mut game = platformer::Game::new(joystick, screen, clock, feedback);
//! let opening = game.open();
//! wait(opening.pause().unwrap_or(platformer::config::TICK_PERIOD));
//!
//! loop {
//!     let step = game.tick();
//!     wait(step.pause().unwrap_or(platformer::config::TICK_PERIOD));
//! }
//! ```
//!
//! Enable the `defmt` feature to route the crate's logging through `defmt`.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Must stay first so the logging macros are visible to every module below.
mod fmt;

pub mod clock;
pub mod config;
pub mod entity;
pub mod feedback;
pub mod frame;
pub mod game;
pub mod geometry;
pub mod input;
pub mod level;
pub mod physics;
pub mod render;
pub mod session;

pub use clock::{
    Clock,
    Duration,
    Instant,
};
pub use feedback::{
    Cue,
    Feedback,
};
pub use frame::{
    Frame,
    Screen,
};
pub use game::{
    Fault,
    Game,
    Step,
};
pub use input::{
    AxisSample,
    Command,
    Direction,
    Joystick,
};
pub use session::{
    Announcement,
    Phase,
    Session,
    TickReport,
};
