//! SurrealDB repository implementations.

mod employee;

pub use employee::SurrealEmployeeRepository;
