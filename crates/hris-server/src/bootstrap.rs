//! First-start provisioning of an HR account, so that someone is able
//! to list employees on an empty database.

use hris_core::error::HrisResult;
use hris_core::models::access::AccessLevel;
use hris_core::models::employee::{CreateEmployeeInput, EmployeeProfile};
use hris_core::repository::EmployeeRepository;
use hris_service::EmployeeService;
use tracing::info;
use uuid::Uuid;

use crate::config::BootstrapAccount;

/// Create the bootstrap account unless an employee with its email
/// already exists. Returns the id of the new account, if one was made.
pub async fn ensure_hr_account<R: EmployeeRepository>(
    employees: &EmployeeService<R>,
    account: BootstrapAccount,
) -> HrisResult<Option<Uuid>> {
    match employees.get_by_email(&account.email).await {
        Ok(existing) => {
            info!(employee_id = %existing.id, "bootstrap account already present");
            return Ok(None);
        }
        Err(e) if e.is_not_found() => {}
        Err(e) => return Err(e),
    }

    let created = employees
        .create(CreateEmployeeInput {
            name: account.name,
            email: account.email,
            password: account.password,
            access_level: AccessLevel::Hr.to_string(),
            profile: EmployeeProfile::default(),
        })
        .await?;

    info!(employee_id = %created.id, "bootstrap HR account created");
    Ok(Some(created.id))
}
