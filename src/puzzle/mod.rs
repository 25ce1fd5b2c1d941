//! Stones, rabbits and the rules of the leap.

pub mod error;
pub mod moves;
pub mod state;
pub mod symbol;
