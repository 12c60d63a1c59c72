//! SurrealDB implementation of [`EmployeeRepository`].
//!
//! Timestamps are stored as UTC datetimes and re-expressed in the civil
//! offset on the way out. The unique index on `email` is what enforces
//! email uniqueness; a violation surfaces as `AlreadyExists`.

use chrono::{DateTime, Utc};
use hris_core::clock;
use hris_core::error::HrisResult;
use hris_core::models::access::AccessLevel;
use hris_core::models::employee::{Employee, EmployeeProfile};
use hris_core::repository::{EmployeeRepository, Pagination};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

const ENTITY: &str = "employee";

/// DB-side row including the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct EmployeeRow {
    record_id: String,
    name: String,
    email: String,
    password_hash: String,
    access_level: String,
    position: String,
    work_location: String,
    personal_id: String,
    address: String,
    zip_code: String,
    province: String,
    city: String,
    district: String,
    phone_number: String,
    photo_url: String,
    tax_id: String,
    bank_name: String,
    bank_account: String,
    salary: f64,
    status: String,
    join_date: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl EmployeeRow {
    fn try_into_employee(self) -> Result<Employee, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Decode(format!("invalid UUID: {e}")))?;
        let access_level: AccessLevel = self
            .access_level
            .parse()
            .map_err(|_| DbError::Decode(format!("unknown access level: {}", self.access_level)))?;
        Ok(Employee {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            access_level,
            profile: EmployeeProfile {
                position: self.position,
                work_location: self.work_location,
                personal_id: self.personal_id,
                address: self.address,
                zip_code: self.zip_code,
                province: self.province,
                city: self.city,
                district: self.district,
                phone_number: self.phone_number,
                photo_url: self.photo_url,
                tax_id: self.tax_id,
                bank_name: self.bank_name,
                bank_account: self.bank_account,
                salary: self.salary,
                status: self.status,
            },
            join_date: clock::to_civil(self.join_date),
            created_at: clock::to_civil(self.created_at),
            updated_at: clock::to_civil(self.updated_at),
        })
    }
}

/// Columns written by both create and update. `created_at` is only ever
/// written by create.
const MUTABLE_COLUMNS: &str = "\
    name = $name, email = $email, password_hash = $password_hash, \
    access_level = $access_level, position = $position, \
    work_location = $work_location, personal_id = $personal_id, \
    address = $address, zip_code = $zip_code, province = $province, \
    city = $city, district = $district, phone_number = $phone_number, \
    photo_url = $photo_url, tax_id = $tax_id, bank_name = $bank_name, \
    bank_account = $bank_account, salary = $salary, status = $status, \
    join_date = $join_date, updated_at = $updated_at";

/// SurrealDB implementation of the employee repository.
#[derive(Clone)]
pub struct SurrealEmployeeRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealEmployeeRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }

    fn not_found(id: impl Into<String>) -> DbError {
        DbError::NotFound {
            entity: ENTITY.into(),
            id: id.into(),
        }
    }

    /// Run a create/update statement with every column bound. Returns
    /// the written records; empty when the target did not exist.
    async fn write(
        &self,
        query: &str,
        e: &Employee,
    ) -> Result<Vec<surrealdb_types::Value>, DbError> {
        let p = &e.profile;
        let result = self
            .db
            .query(query)
            .bind(("id", e.id.to_string()))
            .bind(("name", e.name.clone()))
            .bind(("email", e.email.clone()))
            .bind(("password_hash", e.password_hash.clone()))
            .bind(("access_level", e.access_level.as_str()))
            .bind(("position", p.position.clone()))
            .bind(("work_location", p.work_location.clone()))
            .bind(("personal_id", p.personal_id.clone()))
            .bind(("address", p.address.clone()))
            .bind(("zip_code", p.zip_code.clone()))
            .bind(("province", p.province.clone()))
            .bind(("city", p.city.clone()))
            .bind(("district", p.district.clone()))
            .bind(("phone_number", p.phone_number.clone()))
            .bind(("photo_url", p.photo_url.clone()))
            .bind(("tax_id", p.tax_id.clone()))
            .bind(("bank_name", p.bank_name.clone()))
            .bind(("bank_account", p.bank_account.clone()))
            .bind(("salary", p.salary))
            .bind(("status", p.status.clone()))
            .bind(("join_date", e.join_date.with_timezone(&Utc)))
            .bind(("created_at", e.created_at.with_timezone(&Utc)))
            .bind(("updated_at", e.updated_at.with_timezone(&Utc)))
            .await?;

        let mut result = result
            .check()
            .map_err(|err| DbError::from_write(ENTITY, err))?;

        Ok(result.take(0)?)
    }
}

impl<C: Connection> EmployeeRepository for SurrealEmployeeRepository<C> {
    async fn create(&self, employee: &Employee) -> HrisResult<Uuid> {
        let query = format!(
            "CREATE type::record('employee', $id) SET {MUTABLE_COLUMNS}, \
             created_at = $created_at"
        );
        let written = self.write(&query, employee).await?;
        if written.is_empty() {
            return Err(DbError::Query(format!("create of {} returned no record", employee.id)).into());
        }
        Ok(employee.id)
    }

    async fn get_by_id(&self, id: Uuid) -> HrisResult<Employee> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT meta::id(id) AS record_id, * FROM type::record('employee', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<EmployeeRow> = result.take(0).map_err(DbError::from)?;
        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| Self::not_found(id_str))?;

        Ok(row.try_into_employee()?)
    }

    async fn get_by_email(&self, email: &str) -> HrisResult<Employee> {
        let mut result = self
            .db
            .query("SELECT meta::id(id) AS record_id, * FROM employee WHERE email = $email")
            .bind(("email", email.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<EmployeeRow> = result.take(0).map_err(DbError::from)?;
        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| Self::not_found(format!("email={email}")))?;

        Ok(row.try_into_employee()?)
    }

    async fn update(&self, employee: &Employee) -> HrisResult<()> {
        let query = format!("UPDATE type::record('employee', $id) SET {MUTABLE_COLUMNS}");
        let written = self.write(&query, employee).await?;
        if written.is_empty() {
            return Err(Self::not_found(employee.id.to_string()).into());
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> HrisResult<()> {
        let id_str = id.to_string();

        let result = self
            .db
            .query("DELETE type::record('employee', $id) RETURN BEFORE")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;
        let mut result = result
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        let removed: Vec<surrealdb_types::Value> = result.take(0).map_err(DbError::from)?;
        if removed.is_empty() {
            return Err(Self::not_found(id_str).into());
        }
        Ok(())
    }

    async fn list(&self, pagination: Pagination) -> HrisResult<Vec<Employee>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM employee \
                 ORDER BY created_at DESC \
                 LIMIT $limit START $offset",
            )
            .bind(("limit", pagination.limit))
            .bind(("offset", pagination.offset))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<EmployeeRow> = result.take(0).map_err(DbError::from)?;

        let employees = rows
            .into_iter()
            .map(EmployeeRow::try_into_employee)
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(employees)
    }
}
