//! Domain enums

mod material_type;

pub use material_type::*;
