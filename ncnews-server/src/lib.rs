//! ncnews-server: REST API for topics, articles, comments and users
//!
//! Layers, leaf first:
//! - [`models`]: parsing and validation of untrusted input
//! - [`db`]: Postgres pool, schema, seeding and one repository per entity
//! - [`http`]: Axum router, handlers and error mapping

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, create_pool_with_options, SeedData, SeedError};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
