//! HRIS Core — domain models, access policy, repository contract and
//! the error taxonomy shared by every HRIS crate.

pub mod clock;
pub mod error;
pub mod models;
pub mod policy;
pub mod repository;

pub use error::{HrisError, HrisResult};
