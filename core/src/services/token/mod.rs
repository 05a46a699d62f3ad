//! Relay token service for the 2FA display session
//!
//! Issues and verifies the bearer tokens that authorize the sign-in display
//! to poll for codes and the relay to validate them.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
