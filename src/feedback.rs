//! Fire-and-forget cues for sound, haptics or lights.

/// Something worth signalling to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cue {
    /// A coin was picked up; `collected` of `total` are now taken.
    Coin { collected: u8, total: u8 },
    LevelStart(u8),
    GameComplete,
}

/// Receives cues from the game loop.
///
/// Implementations must return immediately: a cue that cannot be delivered
/// right away is dropped rather than stalling the tick.
pub trait Feedback {
    fn cue(&mut self, cue: Cue);
}

/// No feedback hardware.
impl Feedback for () {
    fn cue(&mut self, _cue: Cue) {}
}
