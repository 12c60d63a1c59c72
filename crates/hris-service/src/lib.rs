//! HRIS Service — employee lifecycle and access-controlled listing
//! use cases.

pub mod config;
pub mod list;
pub mod password;
pub mod service;
mod timeout;

pub use config::{PasswordHashParams, ServiceConfig};
pub use list::{EmployeeListService, ListEmployeesInput};
pub use service::EmployeeService;
