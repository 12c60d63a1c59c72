//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Implementations must report a
//! missing record as [`HrisError::NotFound`](crate::error::HrisError::NotFound)
//! so callers can tell it apart from storage failures.

use uuid::Uuid;

use crate::error::HrisResult;
use crate::models::employee::Employee;

/// Upper bound on a single list page.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Page size used when the caller asks for none or for too many.
pub const DEFAULT_PAGE_SIZE: u64 = 50;

/// Pagination parameters for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
}

impl Pagination {
    /// Clamp caller-supplied bounds: a limit outside `1..=100` becomes
    /// the default of 50 and a negative offset becomes 0.
    pub fn normalized(offset: i64, limit: i64) -> Self {
        let limit = match u64::try_from(limit) {
            Ok(l) if (1..=MAX_PAGE_SIZE).contains(&l) => l,
            _ => DEFAULT_PAGE_SIZE,
        };
        Self {
            offset: u64::try_from(offset).unwrap_or(0),
            limit,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

pub trait EmployeeRepository: Send + Sync {
    /// Persist a fully materialized employee; returns its identifier.
    fn create(&self, employee: &Employee) -> impl Future<Output = HrisResult<Uuid>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = HrisResult<Employee>> + Send;
    fn get_by_email(&self, email: &str) -> impl Future<Output = HrisResult<Employee>> + Send;
    /// Overwrite every mutable column of the record keyed by
    /// `employee.id`. `created_at` is never written.
    fn update(&self, employee: &Employee) -> impl Future<Output = HrisResult<()>> + Send;
    fn delete(&self, id: Uuid) -> impl Future<Output = HrisResult<()>> + Send;
    /// Most recently created first.
    fn list(&self, pagination: Pagination) -> impl Future<Output = HrisResult<Vec<Employee>>> + Send;
}
