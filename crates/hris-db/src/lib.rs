//! HRIS Database — SurrealDB connection management and the storage
//! adapter for the employee repository contract.
//!
//! This crate provides:
//! - Connection management ([`DbManager`], [`DbConfig`])
//! - Schema initialization and migrations ([`run_migrations`])
//! - [`SurrealEmployeeRepository`], implementing
//!   [`hris_core::repository::EmployeeRepository`]
//! - Error types ([`DbError`])

mod connection;
mod error;
pub mod repository;
mod schema;

pub use connection::{DbConfig, DbManager};
pub use error::DbError;
pub use repository::SurrealEmployeeRepository;
pub use schema::run_migrations;
