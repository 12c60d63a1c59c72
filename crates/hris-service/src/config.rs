//! Use-case service configuration.

use std::time::Duration;

/// Argon2id cost parameters used when hashing new passwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHashParams {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for PasswordHashParams {
    /// OWASP ASVS recommendation: m=19456 (19 MiB), t=2, p=1.
    fn default() -> Self {
        Self {
            memory_kib: 19_456,
            iterations: 2,
            parallelism: 1,
        }
    }
}

/// Configuration for the employee use-case services.
#[derive(Clone)]
pub struct ServiceConfig {
    /// Upper bound on every repository call (default: 5 seconds).
    pub repo_timeout: Duration,
    /// Optional pepper prepended to passwords before Argon2id hashing.
    pub pepper: Option<String>,
    pub password_hash: PasswordHashParams,
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("repo_timeout", &self.repo_timeout)
            .field("pepper", &self.pepper.as_ref().map(|_| "<redacted>"))
            .field("password_hash", &self.password_hash)
            .finish()
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            repo_timeout: Duration::from_secs(5),
            pepper: None,
            password_hash: PasswordHashParams::default(),
        }
    }
}
