//! Leading-edge rate limiter for resize notification streams.
//!
//! The engine itself is cheap, but hosts feed it from high-frequency
//! resize events; callers gate those through a [`Throttle`] with a
//! configurable minimum interval. Time-explicit like the visibility
//! machine: the caller supplies millisecond timestamps.

#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: u64,
    open_at_ms: u64,
}

impl Throttle {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            open_at_ms: 0,
        }
    }

    /// Whether an invocation at `now_ms` may proceed.
    ///
    /// Leading-edge: the first call passes immediately, then the gate stays
    /// closed for the configured interval.
    pub fn ready(&mut self, now_ms: u64) -> bool {
        if now_ms >= self.open_at_ms {
            self.open_at_ms = now_ms + self.interval_ms;
            true
        } else {
            false
        }
    }
}
