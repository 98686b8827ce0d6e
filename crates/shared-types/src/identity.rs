//! Login state of the current browser session.
//!
//! The backend reports login state through the auth-status endpoint as
//! [`AuthStatusResponse`]. The frontend never renders the wire type directly;
//! it converts it into an [`Identity`] first so that malformed or
//! contradictory payloads collapse into a well-defined state.

use serde::{Deserialize, Serialize};

/// Label shown in place of a username when nobody is logged in.
pub const ANONYMOUS_LABEL: &str = "Anonymous";

/// Who the header should render for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Identity {
    Authenticated { username: String },
    #[default]
    Anonymous,
}

impl Identity {
    /// Build an identity from an optional username.
    ///
    /// Missing and blank usernames both mean nobody is logged in.
    pub fn from_username(username: Option<&str>) -> Self {
        match username {
            Some(name) if !name.trim().is_empty() => Identity::Authenticated {
                username: name.to_string(),
            },
            _ => Identity::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Identity::Authenticated { .. })
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Identity::Authenticated { username } => Some(username),
            Identity::Anonymous => None,
        }
    }

    /// Name to display: the username, or [`ANONYMOUS_LABEL`].
    pub fn display_name(&self) -> &str {
        self.username().unwrap_or(ANONYMOUS_LABEL)
    }
}

// ============================================================================
// Auth status API types
// ============================================================================

/// Body returned by `GET /api/auth/me`.
///
/// Both fields default when absent so a partial body still decodes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthStatusResponse {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub username: Option<String>,
}

impl AuthStatusResponse {
    pub fn anonymous() -> Self {
        Self::default()
    }
}

impl From<AuthStatusResponse> for Identity {
    fn from(status: AuthStatusResponse) -> Self {
        if !status.authenticated {
            // The backend fills `username` with a placeholder here; ignore it.
            return Identity::Anonymous;
        }

        let identity = Identity::from_username(status.username.as_deref());
        if !identity.is_authenticated() {
            tracing::warn!("Auth status claims a session but carries no username");
        }
        identity
    }
}
