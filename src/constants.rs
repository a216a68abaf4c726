//! Timing constants for the association flow.

/// Timeout and delay constants (in milliseconds/seconds)
pub mod timeouts {
    use std::time::Duration;

    pub const SETTLE_DELAY_MS: u64 = 1000;
    pub const ASSOCIATION_POLL_INTERVAL_MS: u64 = 500;
    pub const ASSOCIATION_TIMEOUT_SECS: u64 = 20;

    pub fn settle_delay() -> Duration {
        Duration::from_millis(SETTLE_DELAY_MS)
    }

    pub fn association_poll_interval() -> Duration {
        Duration::from_millis(ASSOCIATION_POLL_INTERVAL_MS)
    }

    pub fn association_timeout() -> Duration {
        Duration::from_secs(ASSOCIATION_TIMEOUT_SECS)
    }
}
