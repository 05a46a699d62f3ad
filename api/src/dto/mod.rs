pub mod twofa;

pub use twofa::*;
