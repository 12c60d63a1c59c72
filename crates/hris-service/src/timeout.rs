//! Bounded repository calls.

use std::time::Duration;

use hris_core::error::{HrisError, HrisResult};
use tracing::{debug, error};

/// Await `call` for at most `limit`.
///
/// On elapse the repository future is dropped, which cancels its I/O at
/// the next await point, and [`HrisError::Timeout`] is returned. Storage
/// failures are logged before being handed back unchanged.
pub(crate) async fn bounded<T>(
    limit: Duration,
    operation: &'static str,
    call: impl Future<Output = HrisResult<T>>,
) -> HrisResult<T> {
    let result = match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(HrisError::Timeout {
            operation: operation.into(),
        }),
    };

    match &result {
        Err(e @ HrisError::NotFound { .. }) => debug!(operation, error = %e, "record not found"),
        Err(e) => error!(operation, error = %e, "repository call failed"),
        Ok(_) => {}
    }

    result
}
