//! API module for the clinic service
//!
//! REST endpoints over the SQLite store, one handler file per resource.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use error::ApiError;
pub use routes::configure;
