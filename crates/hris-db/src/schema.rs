//! Schema definitions and migration runner for SurrealDB.
//!
//! Tables are SCHEMAFULL. UUIDs are stored as strings and the access
//! level as a lowercase string guarded by an ASSERT.

use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::info;

use crate::error::DbError;

const MIGRATION_TABLE_DDL: &str = "\
DEFINE TABLE IF NOT EXISTS _migration SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS version ON TABLE _migration TYPE int;
DEFINE FIELD IF NOT EXISTS name ON TABLE _migration TYPE string;
DEFINE FIELD IF NOT EXISTS applied_at ON TABLE _migration TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX IF NOT EXISTS idx_migration_version ON TABLE _migration \
    COLUMNS version UNIQUE;
";

#[derive(Debug, SurrealValue)]
struct MigrationRecord {
    version: u32,
    #[allow(dead_code)]
    name: String,
}

struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

static MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "employee",
    sql: SCHEMA_V1,
}];

const SCHEMA_V1: &str = "\
DEFINE TABLE employee SCHEMAFULL;
DEFINE FIELD name ON TABLE employee TYPE string;
DEFINE FIELD email ON TABLE employee TYPE string;
DEFINE FIELD password_hash ON TABLE employee TYPE string;
DEFINE FIELD access_level ON TABLE employee TYPE string \
    ASSERT $value IN ['ordinary', 'supervisor', 'manager', 'hr', \
    'intern'];
DEFINE FIELD position ON TABLE employee TYPE string DEFAULT '';
DEFINE FIELD work_location ON TABLE employee TYPE string DEFAULT '';
DEFINE FIELD personal_id ON TABLE employee TYPE string DEFAULT '';
DEFINE FIELD address ON TABLE employee TYPE string DEFAULT '';
DEFINE FIELD zip_code ON TABLE employee TYPE string DEFAULT '';
DEFINE FIELD province ON TABLE employee TYPE string DEFAULT '';
DEFINE FIELD city ON TABLE employee TYPE string DEFAULT '';
DEFINE FIELD district ON TABLE employee TYPE string DEFAULT '';
DEFINE FIELD phone_number ON TABLE employee TYPE string DEFAULT '';
DEFINE FIELD photo_url ON TABLE employee TYPE string DEFAULT '';
DEFINE FIELD tax_id ON TABLE employee TYPE string DEFAULT '';
DEFINE FIELD bank_name ON TABLE employee TYPE string DEFAULT '';
DEFINE FIELD bank_account ON TABLE employee TYPE string DEFAULT '';
DEFINE FIELD salary ON TABLE employee TYPE float DEFAULT 0.0;
DEFINE FIELD status ON TABLE employee TYPE string DEFAULT 'active';
DEFINE FIELD join_date ON TABLE employee TYPE datetime;
DEFINE FIELD created_at ON TABLE employee TYPE datetime READONLY;
DEFINE FIELD updated_at ON TABLE employee TYPE datetime;
DEFINE INDEX idx_employee_email ON TABLE employee COLUMNS email UNIQUE;
DEFINE INDEX idx_employee_created_at ON TABLE employee COLUMNS created_at;
";

/// Run all pending migrations against the given SurrealDB client.
///
/// Creates the `_migration` tracking table on first run, then applies
/// each migration newer than the highest recorded version.
pub async fn run_migrations<C: Connection>(db: &Surreal<C>) -> Result<(), DbError> {
    db.query(MIGRATION_TABLE_DDL)
        .await?
        .check()
        .map_err(|e| DbError::Migration(e.to_string()))?;

    let mut result = db
        .query("SELECT * FROM _migration ORDER BY version DESC LIMIT 1")
        .await?;
    let records: Vec<MigrationRecord> = result.take(0)?;
    let current_version = records.first().map(|m| m.version).unwrap_or(0);

    for migration in MIGRATIONS.iter().filter(|m| m.version > current_version) {
        info!(
            version = migration.version,
            name = migration.name,
            "Applying migration"
        );
        db.query(migration.sql).await?.check().map_err(|e| {
            DbError::Migration(format!(
                "v{} '{}' failed: {}",
                migration.version, migration.name, e,
            ))
        })?;

        db.query("CREATE _migration SET version = $version, name = $name")
            .bind(("version", migration.version))
            .bind(("name", migration.name))
            .await?
            .check()
            .map_err(|e| {
                DbError::Migration(format!(
                    "could not record v{}: {}",
                    migration.version, e,
                ))
            })?;
    }

    Ok(())
}
