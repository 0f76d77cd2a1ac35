//! Utility modules for DOM access and randomness.

pub mod dom;
pub mod random;
