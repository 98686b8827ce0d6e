//! Header configuration.
//!
//! Defaults match the backend's routes. A page can override any of them with
//! `data-*` attributes on the mount point:
//!
//! ```html
//! <nav id="navLinks" data-identity-source="cookie"></nav>
//! ```

use std::str::FromStr;

use crate::error::ConfigError;

/// Id of the element the header mounts into.
pub const MOUNT_ID: &str = "navLinks";

pub const STATUS_URL: &str = "/api/auth/me";
pub const LOGOUT_URL: &str = "/api/auth/logout";
/// Logout route that pairs with the cookie identity source.
pub const LEGACY_LOGOUT_URL: &str = "/api/logout";
pub const LOGIN_HREF: &str = "/login";
pub const REGISTER_HREF: &str = "/register";

pub const ATTR_IDENTITY_SOURCE: &str = "data-identity-source";
pub const ATTR_STATUS_URL: &str = "data-status-url";
pub const ATTR_LOGOUT_URL: &str = "data-logout-url";
pub const ATTR_LOGIN_HREF: &str = "data-login-href";
pub const ATTR_REGISTER_HREF: &str = "data-register-href";

/// Where the header learns who is logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentitySource {
    /// Ask the backend, which checks the HttpOnly session cookie.
    #[default]
    StatusEndpoint,
    /// Trust the client-readable `username` cookie.
    Cookie,
}

impl IdentitySource {
    pub fn as_str(&self) -> &str {
        match self {
            IdentitySource::StatusEndpoint => "status-endpoint",
            IdentitySource::Cookie => "cookie",
        }
    }
}

impl FromStr for IdentitySource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "status-endpoint" => Ok(IdentitySource::StatusEndpoint),
            "cookie" => Ok(IdentitySource::Cookie),
            other => Err(ConfigError::UnknownIdentitySource(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderConfig {
    pub identity_source: IdentitySource,
    pub status_url: String,
    pub logout_url: String,
    pub login_href: String,
    pub register_href: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            identity_source: IdentitySource::default(),
            status_url: STATUS_URL.to_string(),
            logout_url: LOGOUT_URL.to_string(),
            login_href: LOGIN_HREF.to_string(),
            register_href: REGISTER_HREF.to_string(),
        }
    }
}

impl HeaderConfig {
    /// Build a config from mount-point attributes.
    ///
    /// `lookup` returns the attribute value, or `None` when it is absent.
    /// Absent attributes keep their defaults; present but blank ones are an
    /// error.
    pub fn from_attributes<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |attribute: &'static str| -> Result<Option<String>, ConfigError> {
            match lookup(attribute) {
                Some(value) if value.trim().is_empty() => {
                    Err(ConfigError::EmptyAttribute(attribute))
                }
                Some(value) => Ok(Some(value.trim().to_string())),
                None => Ok(None),
            }
        };

        let identity_source = match read(ATTR_IDENTITY_SOURCE)? {
            Some(value) => value.parse()?,
            None => IdentitySource::default(),
        };

        let default_logout = match identity_source {
            IdentitySource::StatusEndpoint => LOGOUT_URL,
            IdentitySource::Cookie => LEGACY_LOGOUT_URL,
        };

        Ok(Self {
            identity_source,
            status_url: read(ATTR_STATUS_URL)?.unwrap_or_else(|| STATUS_URL.to_string()),
            logout_url: read(ATTR_LOGOUT_URL)?.unwrap_or_else(|| default_logout.to_string()),
            login_href: read(ATTR_LOGIN_HREF)?.unwrap_or_else(|| LOGIN_HREF.to_string()),
            register_href: read(ATTR_REGISTER_HREF)?
                .unwrap_or_else(|| REGISTER_HREF.to_string()),
        })
    }
}
