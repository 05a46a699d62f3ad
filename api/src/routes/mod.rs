//! Route handlers for the Basecamp API.

pub mod twofa;
