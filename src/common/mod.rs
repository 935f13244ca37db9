//! Common, shared types.

pub mod error;
pub mod rng;
pub mod state;
pub mod tunables;
pub mod visuals;

#[cfg(test)]
pub mod test_utils;
