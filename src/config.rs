//! Runtime configuration for the interactive view.
//!
//! Built by the CLI from its flags; everything has a default so library
//! callers can use `Config::default()`.

use std::time::Duration;

use crate::error::{Error, Result};

/// Default per-character reveal delay.
pub const DEFAULT_REVEAL_MS: u64 = 50;

/// Default caret blink period.
pub const DEFAULT_BLINK_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Delay between two revealed characters.
    pub reveal_delay: Duration,
    /// Delay between two caret toggles.
    pub blink_delay: Duration,
    /// When false the terminal text starts fully revealed and no reveal
    /// timer is scheduled.
    pub animate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reveal_delay: Duration::from_millis(DEFAULT_REVEAL_MS),
            blink_delay: Duration::from_millis(DEFAULT_BLINK_MS),
            animate: true,
        }
    }
}

impl Config {
    /// Build from raw millisecond values, rejecting zero periods.
    pub fn from_millis(reveal_ms: u64, blink_ms: u64, animate: bool) -> Result<Self> {
        if reveal_ms == 0 {
            return Err(Error::InvalidConfig("reveal delay must be at least 1 ms".into()));
        }
        if blink_ms == 0 {
            return Err(Error::InvalidConfig("blink delay must be at least 1 ms".into()));
        }
        Ok(Self {
            reveal_delay: Duration::from_millis(reveal_ms),
            blink_delay: Duration::from_millis(blink_ms),
            animate,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
