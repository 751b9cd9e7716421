use jiff::Timestamp;

/// Time source for DateTime elements.
///
/// The orchestrator snapshots `now()` into each [`GenerationContext`]
/// rather than letting elements read the clock directly, so one attempt
/// renders every DateTime element from the same instant.
///
/// [`GenerationContext`]: crate::context::GenerationContext
pub trait Clock: Send + Sync {
    /// Returns the current time of the clock.
    fn now(&self) -> Timestamp;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}
