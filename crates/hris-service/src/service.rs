//! Employee use-case service — create, lookup, update and delete
//! orchestration.

use hris_core::clock;
use hris_core::error::{HrisError, HrisResult};
use hris_core::models::access::AccessLevel;
use hris_core::models::employee::{
    CreateEmployeeInput, CreatedEmployee, Employee, EmployeeResponse, UpdateEmployeeInput,
};
use hris_core::repository::EmployeeRepository;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::ServiceConfig;
use crate::password;
use crate::timeout::bounded;

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn require_identity(name: &str, email: &str) -> HrisResult<()> {
    if is_blank(name) || is_blank(email) {
        return Err(HrisError::validation("name/email are required"));
    }
    Ok(())
}

fn require_id(id: Uuid) -> HrisResult<()> {
    if id.is_nil() {
        return Err(HrisError::validation("id is required"));
    }
    Ok(())
}

/// Employee use-case service.
///
/// Generic over the repository implementation so that this layer has
/// no dependency on the database crate.
#[derive(Clone)]
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
    config: ServiceConfig,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repo: R, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    fn hash(&self, plaintext: &str) -> HrisResult<String> {
        password::hash_password(
            plaintext,
            self.config.pepper.as_deref(),
            &self.config.password_hash,
        )
    }

    /// Validate the input, hash the password and persist a new employee.
    ///
    /// No storage call is made when validation fails.
    pub async fn create(&self, input: CreateEmployeeInput) -> HrisResult<CreatedEmployee> {
        // 1. Required fields.
        if is_blank(&input.name) || is_blank(&input.email) || input.password.is_empty() {
            return Err(HrisError::validation("name/email/password are required"));
        }

        // 2. Access level membership.
        let access_level: AccessLevel = input.access_level.parse()?;

        // 3. One-way hash; the plaintext goes no further than here.
        let password_hash = self.hash(&input.password)?;

        // 4. Identity and timestamps.
        let id = Uuid::now_v7();
        let now = clock::now();

        let employee = Employee {
            id,
            name: input.name,
            email: input.email,
            password_hash,
            access_level,
            profile: input.profile,
            join_date: now,
            created_at: now,
            updated_at: now,
        };

        // 5. Persist.
        let id = bounded(
            self.config.repo_timeout,
            "employee.create",
            self.repo.create(&employee),
        )
        .await?;

        info!(employee_id = %id, access_level = %employee.access_level, "employee created");

        Ok(CreatedEmployee {
            id,
            created_at: employee.created_at,
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> HrisResult<EmployeeResponse> {
        let employee = bounded(
            self.config.repo_timeout,
            "employee.get_by_id",
            self.repo.get_by_id(id),
        )
        .await?;
        Ok(employee.into())
    }

    pub async fn get_by_email(&self, email: &str) -> HrisResult<EmployeeResponse> {
        if is_blank(email) {
            return Err(HrisError::validation("email is required"));
        }
        let employee = bounded(
            self.config.repo_timeout,
            "employee.get_by_email",
            self.repo.get_by_email(email),
        )
        .await?;
        Ok(employee.into())
    }

    /// Persist a full employee record whose password hash is already set.
    ///
    /// `updated_at` is restamped; `id` and `created_at` pass through
    /// untouched. Returns the record as written.
    pub async fn update(&self, mut employee: Employee) -> HrisResult<Employee> {
        require_id(employee.id)?;
        require_identity(&employee.name, &employee.email)?;
        if employee.password_hash.is_empty() {
            return Err(HrisError::validation("password hash is required"));
        }

        employee.updated_at = clock::now();

        bounded(
            self.config.repo_timeout,
            "employee.update",
            self.repo.update(&employee),
        )
        .await?;

        debug!(employee_id = %employee.id, "employee updated");
        Ok(employee)
    }

    /// Replace an employee's mutable attributes from a transport input.
    ///
    /// A supplied plaintext password is re-hashed; without one the
    /// stored hash is kept. Join date and creation time are preserved.
    pub async fn apply_update(&self, id: Uuid, input: UpdateEmployeeInput) -> HrisResult<Employee> {
        require_id(id)?;
        require_identity(&input.name, &input.email)?;
        let access_level: AccessLevel = input.access_level.parse()?;
        if input.password.as_deref().is_some_and(str::is_empty) {
            return Err(HrisError::validation("password must not be empty"));
        }

        let current = bounded(
            self.config.repo_timeout,
            "employee.get_by_id",
            self.repo.get_by_id(id),
        )
        .await?;

        let password_hash = match input.password.as_deref() {
            Some(plaintext) => self.hash(plaintext)?,
            None => current.password_hash,
        };

        self.update(Employee {
            id: current.id,
            name: input.name,
            email: input.email,
            password_hash,
            access_level,
            profile: input.profile,
            join_date: current.join_date,
            created_at: current.created_at,
            updated_at: current.updated_at,
        })
        .await
    }

    pub async fn delete(&self, id: Uuid) -> HrisResult<()> {
        require_id(id)?;
        bounded(
            self.config.repo_timeout,
            "employee.delete",
            self.repo.delete(id),
        )
        .await?;
        info!(employee_id = %id, "employee deleted");
        Ok(())
    }
}
