//! `db` crate — pure persistence layer.
//!
//! Provides environment-driven configuration, a connection pool, typed row
//! structs, and repository functions for the `clientes` table.  No HTTP or
//! business logic lives here.

pub mod config;
pub mod error;
pub mod models;
pub mod pool;
pub mod repository;

pub use config::DbConfig;
pub use error::{ConfigError, DbError};
pub use pool::DbPool;
