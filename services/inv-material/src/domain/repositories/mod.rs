//! Repository traits

mod material_repository;
mod supplier_repository;

pub use material_repository::*;
pub use supplier_repository::*;
