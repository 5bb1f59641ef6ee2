//! # Tasktrack Shared Library
//!
//! Storage-side building blocks for the Tasktrack API server.
//!
//! ## Module Organization
//!
//! - `models`: The task model, its inputs, and its SQL
//! - `gateway`: The `TaskGateway` contract with PostgreSQL and in-memory implementations
//! - `db`: Connection pooling and migrations

pub mod db;
pub mod gateway;
pub mod models;

/// Current version of the Tasktrack shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
