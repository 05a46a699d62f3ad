//! Rotating display-code cache implementation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use tokio::task::JoinHandle;

use crate::domain::entities::code_slot::CodeSlot;
use crate::errors::DomainResult;

use super::config::RotatingCodeConfig;

/// Time-windowed one-time-code cache.
///
/// Wall-clock time is partitioned into fixed-width windows; each window gets
/// at most one code, minted lazily by the first caller that observes the
/// window empty. Verification accepts the current window plus
/// `retention_windows` predecessors. Entries beyond that horizon are pruned
/// on access, and a background sweep bounds residency between accesses.
///
/// All operations are synchronous computations over in-memory state; the
/// entry map is the only shared mutable resource and is owned exclusively by
/// this instance.
pub struct RotatingCodeCache {
    config: RotatingCodeConfig,
    slots: Mutex<HashMap<i64, CodeSlot>>,
    sweeper: Mutex<Option<JoinHandle<()>>>,
}

impl RotatingCodeCache {
    /// Creates a new cache, rejecting invalid configuration
    pub fn new(config: RotatingCodeConfig) -> DomainResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            slots: Mutex::new(HashMap::new()),
            sweeper: Mutex::new(None),
        })
    }

    /// The configuration this cache was built with
    pub fn config(&self) -> &RotatingCodeConfig {
        &self.config
    }

    /// Window id for the given instant: `floor(now_ms / window_ms)`.
    ///
    /// Euclidean division keeps the function total and non-decreasing over
    /// the whole timestamp domain, including pre-epoch instants.
    pub fn current_window_id(&self, now: DateTime<Utc>) -> i64 {
        now.timestamp_millis().div_euclid(self.config.window_millis())
    }

    /// Returns the display code for the current window, minting one if the
    /// window has none yet
    pub fn get_or_create_code(&self) -> u32 {
        self.get_or_create_code_at(Utc::now())
    }

    /// Clock-explicit variant of [`get_or_create_code`](Self::get_or_create_code)
    pub fn get_or_create_code_at(&self, now: DateTime<Utc>) -> u32 {
        let window_id = self.current_window_id(now);
        let mut slots = lock(&self.slots);
        self.prune_stale(&mut slots, window_id);

        // The first caller to observe the window empty wins the mint; every
        // concurrent or later caller sees the same slot.
        if let Some(slot) = slots.get(&window_id) {
            return slot.code;
        }

        let code = self.mint_code();
        let expires_at = self.window_expiry(window_id);
        slots.insert(window_id, CodeSlot::new(window_id, code, expires_at));
        tracing::info!(
            window_id,
            event = "code_minted",
            "Minted display code for new window"
        );
        code
    }

    /// Checks a candidate code against the current window and the configured
    /// lookback. A mismatch is a normal negative result, not an error.
    pub fn verify_code(&self, candidate: u32) -> bool {
        self.verify_code_at(candidate, Utc::now())
    }

    /// Clock-explicit variant of [`verify_code`](Self::verify_code)
    pub fn verify_code_at(&self, candidate: u32, now: DateTime<Utc>) -> bool {
        let window_id = self.current_window_id(now);
        let mut slots = lock(&self.slots);
        self.prune_stale(&mut slots, window_id);

        for lookback in 0..=i64::from(self.config.retention_windows) {
            if let Some(slot) = slots.get(&(window_id - lookback)) {
                if slot.code == candidate && !slot.is_expired_at(now) {
                    return true;
                }
            }
        }
        false
    }

    /// Removes every slot whose expiry has passed, returning the count removed
    pub fn sweep_expired(&self, now: DateTime<Utc>) -> usize {
        let mut slots = lock(&self.slots);
        let before = slots.len();
        slots.retain(|_, slot| !slot.is_expired_at(now));
        let removed = before - slots.len();
        if removed > 0 {
            tracing::debug!(removed, event = "sweep", "Swept expired code slots");
        }
        removed
    }

    /// Number of resident slots
    pub fn resident_slots(&self) -> usize {
        lock(&self.slots).len()
    }

    /// Launches the background sweep on the current tokio runtime.
    ///
    /// The task holds only a weak reference, so dropping the cache ends the
    /// sweep; calling this again replaces a previously started sweeper.
    pub fn start_sweeper(self: &Arc<Self>) {
        let Ok(interval) = self.config.sweep_interval.to_std() else {
            // Unreachable after validation; a non-positive interval never
            // gets past the constructor.
            return;
        };
        let weak: Weak<Self> = Arc::downgrade(self);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick completes immediately; skip it so sweeps run at
            // interval boundaries only.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                match weak.upgrade() {
                    Some(cache) => {
                        cache.sweep_expired(Utc::now());
                    }
                    None => break,
                }
            }
        });

        if let Some(previous) = lock(&self.sweeper).replace(handle) {
            previous.abort();
        }
    }

    /// Stops the background sweep, if one is running
    pub fn shutdown(&self) {
        if let Some(handle) = lock(&self.sweeper).take() {
            handle.abort();
        }
    }

    /// End of the last window in which a code minted for `window_id` may
    /// still verify. Pinning expiry here makes the sweep predicate agree
    /// exactly with the lookback distance check.
    fn window_expiry(&self, window_id: i64) -> DateTime<Utc> {
        let end_ms = (window_id + 1 + i64::from(self.config.retention_windows))
            .saturating_mul(self.config.window_millis());
        DateTime::from_timestamp_millis(end_ms).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Draws a code uniformly from `[code_min, code_max)`.
    ///
    /// Rejection sampling: draws at or above the largest whole multiple of
    /// the span that fits in 2^32 are redrawn rather than folded in, which
    /// would skew the low end of the range.
    fn mint_code(&self) -> u32 {
        let span = u64::from(self.config.code_max() - self.config.code_min());
        let cap = (1u64 << 32) / span * span;
        let mut rng = OsRng;
        loop {
            let draw = u64::from(rng.next_u32());
            if draw < cap {
                return self.config.code_min() + (draw % span) as u32;
            }
        }
    }

    /// Drops every slot more than `retention_windows` behind the current
    /// window
    fn prune_stale(&self, slots: &mut HashMap<i64, CodeSlot>, current_window: i64) {
        let horizon = current_window - i64::from(self.config.retention_windows);
        slots.retain(|&window_id, _| window_id >= horizon);
    }
}

impl Drop for RotatingCodeCache {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Locks the given mutex, recovering the guard if a holder panicked
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
