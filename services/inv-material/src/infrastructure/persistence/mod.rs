//! Persistence layer

mod converters;
mod memory;
mod postgres;
mod rows;

pub use memory::{InMemoryMaterialRepository, InMemorySupplierRepository};
pub use postgres::{connect, PostgresMaterialRepository, PostgresSupplierRepository};
