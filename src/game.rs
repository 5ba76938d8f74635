//! The per-tick runner.
//!
//! [`Game`] owns the [`Session`] and every injected collaborator. Each
//! [`Game::tick`] is one complete, synchronous step; the caller only has to
//! wait [`Step::pause`] (or the nominal tick period) between calls.

use crate::{
    clock::{
        Clock,
        Duration,
    },
    config::FAULT_BACKOFF,
    feedback::{
        Cue,
        Feedback,
    },
    frame::{
        Frame,
        Screen,
    },
    input::{
        Joystick,
        map_axes,
    },
    render,
    session::{
        Announcement,
        Session,
        TickReport,
    },
};

/// Which collaborator failed during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    Input,
    Display,
}

impl Fault {
    /// Reason line for the on-screen diagnostic.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::Input => "joystick read",
            Self::Display => "display flush",
        }
    }
}

/// Outcome of one [`Game::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// A normal tick was simulated and drawn.
    Played(TickReport),
    /// An announcement is on screen; hold it before the next tick.
    Announced(Announcement),
    /// A collaborator failed; the diagnostic is on screen.
    Faulted(Fault),
}

impl Step {
    /// Extra wait the caller owes before the next tick, if any.
    #[must_use]
    pub const fn pause(&self) -> Option<Duration> {
        match self {
            Self::Played(_) => None,
            Self::Announced(announcement) => Some(announcement.hold()),
            Self::Faulted(_) => Some(FAULT_BACKOFF),
        }
    }
}

pub struct Game<J, S, C, F> {
    session: Session,
    frame: Frame,
    joystick: J,
    screen: S,
    clock: C,
    feedback: F,
}

impl<J, S, C, F> Game<J, S, C, F>
where
    J: Joystick,
    S: Screen,
    C: Clock,
    F: Feedback,
{
    pub fn new(joystick: J, screen: S, clock: C, feedback: F) -> Self {
        Self {
            session: Session::new(),
            frame: Frame::new(),
            joystick,
            screen,
            clock,
            feedback,
        }
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// The last frame handed to the screen.
    pub const fn frame(&self) -> &Frame {
        &self.frame
    }

    pub const fn screen(&self) -> &S {
        &self.screen
    }

    pub const fn feedback(&self) -> &F {
        &self.feedback
    }

    /// Show the opening announcement for the current level.
    pub fn open(&mut self) -> Step {
        let opening = Announcement::LevelStart(self.session.player().level);
        self.announce(opening)
    }

    /// Run one tick: input, simulation, transitions, render.
    pub fn tick(&mut self) -> Step {
        // Finish a transition left over from the previous tick.
        if let Some(next) = self.session.advance() {
            return self.announce(next);
        }

        let sample = match self.joystick.sample() {
            Ok(sample) => sample,
            Err(_) => return self.fault(Fault::Input),
        };

        let report = self.session.tick(map_axes(sample), self.clock.now());
        if report.coins > 0 {
            let level = self.session.level();
            self.feedback.cue(Cue::Coin {
                collected: saturate(level.collected()),
                total: saturate(level.coins.len()),
            });
        }

        if let Some(next) = self.session.advance() {
            return self.announce(next);
        }

        let Ok(()) = render::scene(&mut self.frame, &self.session);
        self.present().unwrap_or(Step::Played(report))
    }

    fn announce(&mut self, announcement: Announcement) -> Step {
        info!("announcing {}", announcement);
        self.feedback.cue(match announcement {
            Announcement::LevelStart(number) => Cue::LevelStart(number),
            Announcement::GameComplete => Cue::GameComplete,
        });

        let Ok(()) = render::announcement(&mut self.frame, announcement);
        self.present().unwrap_or(Step::Announced(announcement))
    }

    /// Commit the frame. Returns the fault step if the screen refused it.
    fn present(&mut self) -> Option<Step> {
        match self.screen.present(&self.frame) {
            Ok(()) => None,
            Err(_) => Some(self.fault(Fault::Display)),
        }
    }

    fn fault(&mut self, fault: Fault) -> Step {
        warn!("tick aborted: {} failed", fault);
        let Ok(()) = render::diagnostic(&mut self.frame, fault.reason());
        if self.screen.present(&self.frame).is_err() {
            error!("diagnostic could not be shown");
        }
        Step::Faulted(fault)
    }
}

fn saturate(count: usize) -> u8 {
    u8::try_from(count).unwrap_or(u8::MAX)
}
