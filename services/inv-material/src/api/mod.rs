//! HTTP API

mod error;
mod requests;
mod responses;
mod routes;

pub use error::ApiError;
pub use routes::{routes, AppState};
