//! Readiness and credential checks.

use tracing::warn;

use crate::client::KitchenClient;
use crate::error::ClientResult;
use crate::models::{AuthStatus, SystemStatus};
use crate::response::{OK_OR_FORBIDDEN, OK_OR_UNAVAILABLE};

impl KitchenClient {
    /// Report which Kitchen subsystems are ready.
    ///
    /// Both 200 and 503 carry a full report. If the host cannot be reached
    /// (DNS failure, refused connection, timeout) this returns
    /// [`SystemStatus::default`] instead of an error.
    ///
    /// # Errors
    ///
    /// Any other status, or a report that does not decode, is still an error.
    pub async fn fetch_system_status(&self) -> ClientResult<SystemStatus> {
        match self
            .get::<SystemStatus>("system/status", OK_OR_UNAVAILABLE, "SystemStatus")
            .await
        {
            Ok(outcome) => Ok(outcome.into_inner()),
            Err(e) if e.is_connection_failure() => {
                warn!(error = %e, "Kitchen API unreachable, reporting all systems unready");
                Ok(SystemStatus::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Check whether the configured credentials are authorized for Media
    /// Cloud and Sous Chef. A 403 decodes into an unauthorized status.
    pub async fn validate_auth(&self) -> ClientResult<AuthStatus> {
        self.get::<AuthStatus>("auth/validate", OK_OR_FORBIDDEN, "AuthStatus")
            .await
            .map(|outcome| outcome.into_inner())
    }
}
