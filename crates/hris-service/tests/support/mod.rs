//! In-memory recording repository shared by the service tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use hris_core::error::{HrisError, HrisResult};
use hris_core::models::employee::Employee;
use hris_core::repository::{EmployeeRepository, Pagination};
use hris_service::{PasswordHashParams, ServiceConfig};
use uuid::Uuid;

/// A repository call as observed by [`RecordingRepository`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(Uuid),
    GetById(Uuid),
    GetByEmail(String),
    Update(Uuid),
    Delete(Uuid),
    List(Pagination),
}

#[derive(Default)]
struct State {
    employees: Vec<Employee>,
    calls: Vec<Call>,
    fail_with: Option<fn() -> HrisError>,
    delay: Option<Duration>,
}

/// Keeps employees in memory and records every call made to it.
/// Clones share state.
#[derive(Clone, Default)]
pub struct RecordingRepository {
    state: Arc<Mutex<State>>,
}

impl RecordingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with the error built by `err`.
    pub fn fail_with(&self, err: fn() -> HrisError) {
        self.state.lock().unwrap().fail_with = Some(err);
    }

    /// Make every subsequent call sleep before answering.
    pub fn delay(&self, by: Duration) {
        self.state.lock().unwrap().delay = Some(by);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn stored(&self, id: Uuid) -> Option<Employee> {
        self.state
            .lock()
            .unwrap()
            .employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
    }

    pub fn insert(&self, employee: Employee) {
        self.state.lock().unwrap().employees.push(employee);
    }

    async fn enter(&self, call: Call) -> HrisResult<()> {
        let (delay, fail_with) = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(call);
            (state.delay, state.fail_with)
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match fail_with {
            Some(err) => Err(err()),
            None => Ok(()),
        }
    }
}

fn not_found(id: impl ToString) -> HrisError {
    HrisError::NotFound {
        entity: "employee".into(),
        id: id.to_string(),
    }
}

impl EmployeeRepository for RecordingRepository {
    async fn create(&self, employee: &Employee) -> HrisResult<Uuid> {
        self.enter(Call::Create(employee.id)).await?;
        let mut state = self.state.lock().unwrap();
        if state.employees.iter().any(|e| e.email == employee.email) {
            return Err(HrisError::AlreadyExists {
                entity: "employee".into(),
            });
        }
        state.employees.push(employee.clone());
        Ok(employee.id)
    }

    async fn get_by_id(&self, id: Uuid) -> HrisResult<Employee> {
        self.enter(Call::GetById(id)).await?;
        self.stored(id).ok_or_else(|| not_found(id))
    }

    async fn get_by_email(&self, email: &str) -> HrisResult<Employee> {
        self.enter(Call::GetByEmail(email.to_string())).await?;
        let state = self.state.lock().unwrap();
        state
            .employees
            .iter()
            .find(|e| e.email == email)
            .cloned()
            .ok_or_else(|| not_found(format!("email={email}")))
    }

    async fn update(&self, employee: &Employee) -> HrisResult<()> {
        self.enter(Call::Update(employee.id)).await?;
        let mut state = self.state.lock().unwrap();
        let slot = state
            .employees
            .iter_mut()
            .find(|e| e.id == employee.id)
            .ok_or_else(|| not_found(employee.id))?;
        let created_at = slot.created_at;
        *slot = employee.clone();
        slot.created_at = created_at;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> HrisResult<()> {
        self.enter(Call::Delete(id)).await?;
        let mut state = self.state.lock().unwrap();
        let before = state.employees.len();
        state.employees.retain(|e| e.id != id);
        if state.employees.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn list(&self, pagination: Pagination) -> HrisResult<Vec<Employee>> {
        self.enter(Call::List(pagination)).await?;
        let state = self.state.lock().unwrap();
        let mut employees = state.employees.clone();
        employees.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(employees
            .into_iter()
            .skip(pagination.offset as usize)
            .take(pagination.limit as usize)
            .collect())
    }
}

/// Service config with a cheap Argon2 cost so tests stay fast.
pub fn test_config() -> ServiceConfig {
    ServiceConfig {
        repo_timeout: Duration::from_secs(2),
        pepper: None,
        password_hash: PasswordHashParams {
            memory_kib: 64,
            iterations: 1,
            parallelism: 1,
        },
    }
}
