//! Value objects

mod ids;

pub use ids::*;
