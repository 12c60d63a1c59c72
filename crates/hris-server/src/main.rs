//! HRIS Server — application entry point.

mod bootstrap;
mod config;

use hris_core::error::HrisError;
use hris_db::{DbError, DbManager, SurrealEmployeeRepository};
use hris_service::EmployeeService;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

use crate::config::{AppConfig, ConfigError};

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Hris(#[from] HrisError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn init_tracing() -> Result<(), ServerError> {
    let directive = "hris=info"
        .parse::<Directive>()
        .map_err(|e| ServerError::Logging(e.to_string()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .json()
        .try_init()
        .map_err(|e| ServerError::Logging(e.to_string()))
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    init_tracing()?;

    let config = AppConfig::from_env()?;
    tracing::info!(
        repo_timeout_ms = config.service.repo_timeout.as_millis() as u64,
        "Starting HRIS server..."
    );

    let manager = DbManager::connect(&config.db).await?;
    hris_db::run_migrations(manager.client()).await?;

    let repo = SurrealEmployeeRepository::new(manager.client().clone());
    let employees = EmployeeService::new(repo, config.service);

    if let Some(account) = config.bootstrap {
        bootstrap::ensure_hr_account(&employees, account).await?;
    }

    // TODO: mount the REST routes; the list endpoint builds its own
    // `EmployeeListService` over a clone of the repository.
    tracing::info!("HRIS ready");

    tokio::signal::ctrl_c().await?;
    tracing::info!("HRIS server stopped.");
    Ok(())
}
