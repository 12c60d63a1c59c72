//! Opening the employee store.

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::{Client, Ws};
use surrealdb::opt::auth::Root;
use tracing::{debug, info};

use crate::error::DbError;

/// Where the employee store lives and how to sign in to it.
#[derive(Clone)]
pub struct DbConfig {
    /// WebSocket endpoint, `host:port`.
    pub url: String,
    pub namespace: String,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("url", &self.url)
            .field("namespace", &self.namespace)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: "127.0.0.1:8000".into(),
            namespace: "hris".into(),
            database: "main".into(),
            username: "root".into(),
            password: "root".into(),
        }
    }
}

impl DbConfig {
    fn connect_error(&self, stage: &str, err: surrealdb::Error) -> DbError {
        DbError::Connect {
            url: self.url.clone(),
            reason: format!("{stage}: {err}"),
        }
    }
}

/// Owns the client handle shared by the employee repository and the
/// migration runner.
#[derive(Clone)]
pub struct DbManager {
    db: Surreal<Client>,
}

impl DbManager {
    /// Dial the store, sign in as root and select the HRIS namespace.
    ///
    /// Each failing stage is reported as [`DbError::Connect`] naming the
    /// endpoint, never the credentials.
    pub async fn connect(config: &DbConfig) -> Result<Self, DbError> {
        info!(
            url = %config.url,
            namespace = %config.namespace,
            database = %config.database,
            "opening employee store"
        );

        let db = Surreal::new::<Ws>(&config.url)
            .await
            .map_err(|e| config.connect_error("dial", e))?;
        debug!(username = %config.username, "signing in to employee store");

        db.signin(Root {
            username: config.username.clone(),
            password: config.password.clone(),
        })
        .await
        .map_err(|e| config.connect_error("sign-in", e))?;

        db.use_ns(&config.namespace)
            .use_db(&config.database)
            .await
            .map_err(|e| config.connect_error("select namespace", e))?;

        info!("employee store ready");
        Ok(Self { db })
    }

    pub fn client(&self) -> &Surreal<Client> {
        &self.db
    }
}
