//! Logout flow.
//!
//! [`log_out`] drives the steps in order against a [`SessionControl`]. The
//! browser implementation is [`WebSession`]; tests substitute a recorder.

use shared_types::{expired_cookie, USERNAME_COOKIE};

use crate::browser;
use crate::config::{HeaderConfig, IdentitySource};
use crate::error::AuthError;
use crate::services::auth::AuthService;

/// Side effects a logout needs.
#[allow(async_fn_in_trait)]
pub trait SessionControl {
    /// Ask the backend to invalidate the session.
    async fn request_logout(&self) -> Result<(), AuthError>;

    /// Remove whatever login evidence the client keeps itself.
    fn clear_local_identity(&self) -> Result<(), AuthError>;

    fn reload(&self) -> Result<(), AuthError>;
}

/// End the session and reload so the header re-renders anonymous.
///
/// A failed logout request is logged but does not stop the reload; the
/// reloaded page asks the backend again and shows whatever it reports.
pub async fn log_out<S: SessionControl>(session: &S) -> Result<(), AuthError> {
    if let Err(e) = session.request_logout().await {
        tracing::error!("Logout request failed: {}", e);
    }

    session.clear_local_identity()?;
    session.reload()
}

/// [`SessionControl`] backed by `fetch`, `document.cookie` and `location`.
pub struct WebSession {
    config: HeaderConfig,
}

impl WebSession {
    pub fn new(config: HeaderConfig) -> Self {
        Self { config }
    }
}

impl SessionControl for WebSession {
    async fn request_logout(&self) -> Result<(), AuthError> {
        AuthService::logout(&self.config.logout_url).await
    }

    fn clear_local_identity(&self) -> Result<(), AuthError> {
        match self.config.identity_source {
            IdentitySource::Cookie => browser::set_cookie(&expired_cookie(USERNAME_COOKIE)),
            // HttpOnly session cookie; only the server can clear it.
            IdentitySource::StatusEndpoint => Ok(()),
        }
    }

    fn reload(&self) -> Result<(), AuthError> {
        browser::reload()
    }
}
