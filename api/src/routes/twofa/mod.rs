//! 2FA code relay endpoints
//!
//! This module contains the endpoints behind the sign-in display:
//! - Fetching the rotating display code (guarded)
//! - Opening a display session with the shared password
//! - Validating a relay token or a display code

pub mod authenticate;
pub mod get_code;
pub mod validate;
