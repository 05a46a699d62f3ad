//! Display-code cache entry for the attendance 2FA flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A display code minted for a single validity window.
///
/// A slot is immutable once minted: re-requesting the code for the same
/// window always observes the same value. The expiry is fixed at mint time
/// to the end of the last window in which the code may still verify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSlot {
    /// Partition key: `floor(mint_time_ms / window_ms)`
    pub window_id: i64,

    /// The minted display code
    pub code: u32,

    /// Instant after which the slot can no longer verify
    pub expires_at: DateTime<Utc>,
}

impl CodeSlot {
    /// Creates a new slot for a window
    pub fn new(window_id: i64, code: u32, expires_at: DateTime<Utc>) -> Self {
        Self {
            window_id,
            code,
            expires_at,
        }
    }

    /// Checks whether the slot has expired at the given instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
