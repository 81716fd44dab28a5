//! Pause policy applied after every successful API request.

use std::time::Duration;

/// Decides how long to wait after a successful request.
///
/// The free API-Football plan throttles bursts, so the production client
/// waits a fixed interval between calls. Tests swap in [`NoDelay`].
pub trait RateLimit: Send + Sync {
    fn pause(&self) -> Duration;
}

/// Wait the same interval after every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay(pub Duration);

impl FixedDelay {
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::from_millis(500)
    }
}

impl RateLimit for FixedDelay {
    fn pause(&self) -> Duration {
        self.0
    }
}

/// Never wait.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDelay;

impl RateLimit for NoDelay {
    fn pause(&self) -> Duration {
        Duration::ZERO
    }
}
