//! Employee domain model and its transport-facing shapes.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{HrisError, HrisResult};
use crate::models::access::AccessLevel;

fn default_status() -> String {
    "active".into()
}

/// Administrative and profile attributes. Carried through the use-case
/// layer unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeeProfile {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub work_location: String,
    #[serde(default)]
    pub personal_id: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub photo_url: String,
    /// Tax identification number.
    #[serde(default)]
    pub tax_id: String,
    #[serde(default)]
    pub bank_name: String,
    #[serde(default)]
    pub bank_account: String,
    #[serde(default)]
    pub salary: f64,
    /// Employment status, e.g. `active`.
    #[serde(default = "default_status")]
    pub status: String,
}

impl Default for EmployeeProfile {
    fn default() -> Self {
        Self {
            position: String::new(),
            work_location: String::new(),
            personal_id: String::new(),
            address: String::new(),
            zip_code: String::new(),
            province: String::new(),
            city: String::new(),
            district: String::new(),
            phone_number: String::new(),
            photo_url: String::new(),
            tax_id: String::new(),
            bank_name: String::new(),
            bank_account: String::new(),
            salary: 0.0,
            status: default_status(),
        }
    }
}

/// A stored employee record.
///
/// `password_hash` is never serialized and is redacted from `Debug`
/// output.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub access_level: AccessLevel,
    #[serde(flatten)]
    pub profile: EmployeeProfile,
    pub join_date: DateTime<FixedOffset>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl fmt::Debug for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Employee")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("access_level", &self.access_level)
            .field("profile", &self.profile)
            .field("join_date", &self.join_date)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Public projection of an [`Employee`]. Credentials and profile
/// attributes are never included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub access_level: AccessLevel,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<&Employee> for EmployeeResponse {
    fn from(e: &Employee) -> Self {
        Self {
            id: e.id,
            name: e.name.clone(),
            email: e.email.clone(),
            access_level: e.access_level,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            name: e.name,
            email: e.email,
            access_level: e.access_level,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

/// Input for creating an employee.
#[derive(Clone, Deserialize)]
pub struct CreateEmployeeInput {
    pub name: String,
    pub email: String,
    /// Raw password (hashed with Argon2id before storage).
    pub password: String,
    /// Unparsed access level; validated against [`AccessLevel`].
    pub access_level: String,
    #[serde(flatten)]
    pub profile: EmployeeProfile,
}

impl fmt::Debug for CreateEmployeeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateEmployeeInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("access_level", &self.access_level)
            .field("profile", &self.profile)
            .finish()
    }
}

/// Input for replacing an employee's mutable attributes.
///
/// `password` is plaintext; `None` keeps the stored hash.
#[derive(Clone, Deserialize)]
pub struct UpdateEmployeeInput {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
    pub access_level: String,
    #[serde(flatten)]
    pub profile: EmployeeProfile,
}

impl fmt::Debug for UpdateEmployeeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateEmployeeInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("access_level", &self.access_level)
            .field("profile", &self.profile)
            .finish()
    }
}

/// Result of a successful create.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatedEmployee {
    pub id: Uuid,
    pub created_at: DateTime<FixedOffset>,
}

/// Parse an employee identifier from its canonical string form.
pub fn parse_employee_id(raw: &str) -> HrisResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| HrisError::validation("invalid employee id"))
}
