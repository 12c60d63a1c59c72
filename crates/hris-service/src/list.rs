//! Access-controlled employee listing.

use hris_core::error::{HrisError, HrisResult};
use hris_core::models::employee::Employee;
use hris_core::policy;
use hris_core::repository::{EmployeeRepository, Pagination};
use serde::Deserialize;
use tracing::warn;

use crate::config::ServiceConfig;
use crate::timeout::bounded;

/// Input for the list flow. `access_level` is the caller's level as
/// resolved by the authenticator; `offset` and `limit` come straight
/// from the query string and are normalized here.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEmployeesInput {
    pub access_level: String,
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub limit: i64,
}

#[derive(Clone)]
pub struct EmployeeListService<R: EmployeeRepository> {
    repo: R,
    config: ServiceConfig,
}

impl<R: EmployeeRepository> EmployeeListService<R> {
    pub fn new(repo: R, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    /// List employees, most recently created first.
    ///
    /// Fails with [`HrisError::Forbidden`] before touching storage when
    /// the caller's level lacks listing capability.
    pub async fn list(&self, input: ListEmployeesInput) -> HrisResult<Vec<Employee>> {
        if !policy::can_list_employees_raw(&input.access_level) {
            warn!(access_level = %input.access_level, "employee listing denied");
            return Err(HrisError::Forbidden {
                reason: "access level cannot list employees".into(),
            });
        }

        let pagination = Pagination::normalized(input.offset, input.limit);

        bounded(
            self.config.repo_timeout,
            "employee.list",
            self.repo.list(pagination),
        )
        .await
    }
}
