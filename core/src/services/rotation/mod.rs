//! Rotating display-code service for the attendance 2FA flow
//!
//! This module provides the time-windowed one-time-code scheme behind the
//! sign-in display:
//! - One code is minted per validity window, lazily on first access
//! - Re-requesting the code within a window returns the same value
//! - Verification accepts the current window plus a bounded lookback, so a
//!   code read off the display just before a rollover still validates
//! - Stale windows are pruned on access and by a cache-owned background sweep

mod cache;
mod config;


pub use cache::RotatingCodeCache;
pub use config::RotatingCodeConfig;
