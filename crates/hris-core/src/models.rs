//! Domain models for HRIS.

pub mod access;
pub mod employee;
