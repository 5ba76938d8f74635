//! Scripted collaborators for driving `Game` on the host.

#![allow(dead_code)]

use std::{
    cell::{
        Cell,
        RefCell,
    },
    collections::VecDeque,
    rc::Rc,
};

use platformer::{
    AxisSample,
    Clock,
    Cue,
    Feedback,
    Frame,
    Game,
    Instant,
    Joystick,
    Screen,
    Step,
};

pub const NEUTRAL: AxisSample = AxisSample::CENTERED;
pub const RIGHT: AxisSample = AxisSample { x: 4095, y: 2048 };
pub const LEFT: AxisSample = AxisSample { x: 0, y: 2048 };
pub const UP_RIGHT: AxisSample = AxisSample { x: 4095, y: 0 };
pub const UP: AxisSample = AxisSample { x: 2048, y: 0 };
pub const UP_LEFT: AxisSample = AxisSample { x: 0, y: 0 };

/// Decode a compact input script: `.` rest, `R`/`L` walk, `U` jump,
/// `/` and `\` jump while walking right or left.
pub fn decode(script: &str) -> impl Iterator<Item = AxisSample> + '_ {
    script.chars().map(|c| match c {
        '.' => NEUTRAL,
        'R' => RIGHT,
        'L' => LEFT,
        'U' => UP,
        '/' => UP_RIGHT,
        '\\' => UP_LEFT,
        other => panic!("unknown script step {other:?}"),
    })
}

#[derive(Debug, PartialEq, Eq)]
pub struct StickFault;

/// Plays back queued readings, then rests at center.
#[derive(Clone, Default)]
pub struct ScriptedStick {
    script: Rc<RefCell<VecDeque<Result<AxisSample, StickFault>>>>,
}

impl ScriptedStick {
    pub fn push(&self, sample: AxisSample) {
        self.script.borrow_mut().push_back(Ok(sample));
    }

    pub fn push_many(&self, sample: AxisSample, count: usize) {
        for _ in 0..count {
            self.push(sample);
        }
    }

    pub fn push_script(&self, script: &str) {
        for sample in decode(script) {
            self.push(sample);
        }
    }

    pub fn fail_next(&self) {
        self.script.borrow_mut().push_back(Err(StickFault));
    }
}

impl Joystick for ScriptedStick {
    type Error = StickFault;

    fn sample(&mut self) -> Result<AxisSample, StickFault> {
        self.script.borrow_mut().pop_front().unwrap_or(Ok(NEUTRAL))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct FlushFault;

/// Keeps every presented frame; can be told to refuse the next ones.
#[derive(Default)]
pub struct RecordingScreen {
    pub frames: Vec<Frame>,
    failures: Rc<Cell<usize>>,
}

impl RecordingScreen {
    pub fn failures(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.failures)
    }

    pub fn last(&self) -> &Frame {
        self.frames.last().expect("nothing presented")
    }
}

impl Screen for RecordingScreen {
    type Error = FlushFault;

    fn present(&mut self, frame: &Frame) -> Result<(), FlushFault> {
        let pending = self.failures.get();
        if pending > 0 {
            self.failures.set(pending - 1);
            return Err(FlushFault);
        }
        self.frames.push(frame.clone());
        Ok(())
    }
}

/// Advanced by hand; shared with the test body.
#[derive(Clone, Default)]
pub struct ManualClock {
    ms: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn advance(&self, ms: u64) {
        self.ms.set(self.ms.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        Instant::from_ticks(self.ms.get())
    }
}

#[derive(Default)]
pub struct CueLog {
    pub cues: Vec<Cue>,
}

impl Feedback for CueLog {
    fn cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }
}

pub type TestGame = Game<ScriptedStick, RecordingScreen, ManualClock, CueLog>;

pub struct Rig {
    pub game: TestGame,
    pub stick: ScriptedStick,
    pub clock: ManualClock,
    pub screen_failures: Rc<Cell<usize>>,
}

impl Rig {
    pub fn new() -> Self {
        let stick = ScriptedStick::default();
        let clock = ManualClock::default();
        let screen = RecordingScreen::default();
        let screen_failures = screen.failures();
        let game = Game::new(stick.clone(), screen, clock.clone(), CueLog::default());
        Self {
            game,
            stick,
            clock,
            screen_failures,
        }
    }

    pub fn open(&mut self) -> Step {
        let step = self.game.open();
        self.settle(step);
        step
    }

    /// One tick of the fixed 20 ms loop, followed by any pause it asks for.
    pub fn tick(&mut self) -> Step {
        self.clock.advance(20);
        let step = self.game.tick();
        self.settle(step);
        step
    }

    fn settle(&self, step: Step) {
        if let Some(pause) = step.pause() {
            self.clock.advance(pause.to_millis());
        }
    }

    pub fn run(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.tick();
        }
    }
}
