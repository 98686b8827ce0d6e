use gloo_net::http::Request;
use shared_types::{identity_from_cookie_header, AuthStatusResponse, Identity};
use web_sys::RequestCredentials;

use crate::browser;
use crate::config::{HeaderConfig, IdentitySource};
use crate::error::AuthError;

/// How to treat the status endpoint's HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusReply {
    /// 2xx: the body says who is logged in.
    Body,
    /// 401 or 403: nobody is logged in.
    LoggedOut,
}

pub fn classify_status(status: u16) -> Result<StatusReply, AuthError> {
    match status {
        200..=299 => Ok(StatusReply::Body),
        401 | 403 => Ok(StatusReply::LoggedOut),
        other => Err(AuthError::Http(other)),
    }
}

pub struct AuthService;

impl AuthService {
    /// Ask the backend who owns the current session.
    ///
    /// 401 and 403 are answers, not failures: nobody is logged in.
    pub async fn fetch_status(status_url: &str) -> Result<AuthStatusResponse, AuthError> {
        let response = Request::get(status_url)
            .credentials(RequestCredentials::Include)
            .send()
            .await?;

        match classify_status(response.status())? {
            StatusReply::Body => Ok(response.json().await?),
            StatusReply::LoggedOut => Ok(AuthStatusResponse::anonymous()),
        }
    }

    /// Invalidate the server-side session. The response body is ignored.
    pub async fn logout(logout_url: &str) -> Result<(), AuthError> {
        let response = Request::post(logout_url)
            .credentials(RequestCredentials::Include)
            .send()
            .await?;

        if !response.ok() {
            return Err(AuthError::Http(response.status()));
        }

        Ok(())
    }
}

/// Work out who the header should render for.
///
/// Never fails: any error along the way is logged and the visitor is shown
/// the anonymous header.
pub async fn resolve_identity(config: &HeaderConfig) -> Identity {
    let resolved = match config.identity_source {
        IdentitySource::StatusEndpoint => AuthService::fetch_status(&config.status_url)
            .await
            .map(Identity::from),
        IdentitySource::Cookie => {
            browser::cookie_header().map(|raw| identity_from_cookie_header(&raw))
        }
    };

    resolved.unwrap_or_else(|e| {
        tracing::warn!(
            source = config.identity_source.as_str(),
            "Identity check failed, treating visitor as anonymous: {}",
            e
        );
        Identity::Anonymous
    })
}
