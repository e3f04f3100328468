//! Database layer - connection pool, schema, seeding and repositories
//!
//! # Design Principles
//!
//! - Connection pool with bounded size and timeouts - no global handle
//! - All list operations use JOINs - no N+1 queries
//! - Mutations are single statements - no read-modify-write in Rust
//! - Seeding runs in one transaction

pub mod pool;
pub mod schema;
pub mod seed;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use seed::{SeedData, SeedError};
pub use repos::*;
pub use sqlx::PgPool;
