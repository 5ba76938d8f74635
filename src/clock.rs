//! Millisecond time base and the monotonic clock collaborator.

/// A point on the monotonic millisecond timeline.
pub type Instant = fugit::TimerInstantU64<1000>;

/// A span of milliseconds.
pub type Duration = fugit::MillisDurationU64;

/// Source of monotonic time, injected so cooldowns can be tested deterministically.
pub trait Clock {
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}
