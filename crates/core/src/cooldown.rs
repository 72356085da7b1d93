//! Per-key cooldown limiter for the commission contact form.
//!
//! Each key (the client IP) may perform one accepted action per window. The
//! check and the timestamp update happen under one lock, so two concurrent
//! requests for the same key cannot both pass. State lives only for the
//! lifetime of the process.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::error::CoreError;

/// Default cooldown between accepted commission requests from one key.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(60);

/// Key shared by every client whose address could not be determined.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Entries are pruned once the map grows past this many keys.
const PRUNE_THRESHOLD: usize = 1024;

pub struct CooldownLimiter {
    window: Duration,
    last_accepted: Mutex<HashMap<String, Instant>>,
}

impl CooldownLimiter {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: Mutex::new(HashMap::new()),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Check-and-record for `key` at the current instant.
    pub async fn acquire(&self, key: &str) -> Result<(), CoreError> {
        self.acquire_at(key, Instant::now()).await
    }

    /// Check-and-record for `key` at `now`.
    ///
    /// Returns [`CoreError::RateLimited`] with the remaining wait rounded up
    /// to whole seconds when the key's previous accepted request is still
    /// inside the window. Rejected attempts do not extend the window.
    pub async fn acquire_at(&self, key: &str, now: Instant) -> Result<(), CoreError> {
        let mut map = self.last_accepted.lock().await;

        if let Some(last) = map.get(key) {
            let elapsed = now.saturating_duration_since(*last);
            if elapsed < self.window {
                return Err(CoreError::RateLimited {
                    retry_after_secs: remaining_secs(self.window - elapsed),
                });
            }
        }

        if map.len() >= PRUNE_THRESHOLD {
            let window = self.window;
            map.retain(|_, last| now.saturating_duration_since(*last) < window);
        }

        map.insert(key.to_string(), now);
        Ok(())
    }
}

impl Default for CooldownLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}

/// `ceil(remaining_ms / 1000)`, with sub-millisecond remainders counted as a
/// full millisecond.
fn remaining_secs(remaining: Duration) -> u64 {
    let millis = remaining.as_nanos().div_ceil(1_000_000);
    millis.div_ceil(1_000) as u64
}
