//! Simulated-latency providers
//!
//! Each submitted command resolves after an artificial delay, for visual
//! realism only. The provider is injected into [`crate::session::Session`]
//! so tests and the non-interactive driver can force zero-delay execution.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Source of per-command simulated latency.
pub trait DelaySource: Send {
    /// Delay to apply to the next submitted command.
    fn next_delay(&mut self) -> Duration;
}

/// Uniformly jittered delay within a fixed window.
///
/// Jitter is derived from the wall clock's sub-second nanoseconds; the
/// delay is cosmetic, so distribution quality does not matter.
#[derive(Debug, Clone)]
pub struct UniformWindow {
    min: Duration,
    max: Duration,
}

impl UniformWindow {
    /// Window matching the original terminal's 200-700 ms feel.
    pub const DEFAULT_MIN_MS: u64 = 200;
    pub const DEFAULT_MAX_MS: u64 = 700;

    pub fn new(min: Duration, max: Duration) -> Self {
        let max = max.max(min);
        Self { min, max }
    }

    pub fn from_millis(min_ms: u64, max_ms: u64) -> Self {
        Self::new(Duration::from_millis(min_ms), Duration::from_millis(max_ms))
    }
}

impl Default for UniformWindow {
    fn default() -> Self {
        Self::from_millis(Self::DEFAULT_MIN_MS, Self::DEFAULT_MAX_MS)
    }
}

impl DelaySource for UniformWindow {
    fn next_delay(&mut self) -> Duration {
        let span_ms = (self.max - self.min).as_millis() as u64;
        if span_ms == 0 {
            return self.min;
        }
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0);
        self.min + Duration::from_millis(u64::from(nanos) % (span_ms + 1))
    }
}

/// Zero-delay provider for tests and `qterm exec`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl DelaySource for Immediate {
    fn next_delay(&mut self) -> Duration {
        Duration::ZERO
    }
}
