//! Error types for the header.

use thiserror::Error;

/// Failures talking to the auth backend or the browser.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Network failure or undecodable body
    #[error("Request failed: {0}")]
    Request(#[from] gloo_net::Error),

    /// Backend answered with a non-success status
    #[error("HTTP error: {0}")]
    Http(u16),

    /// A browser API call threw
    #[error("Browser API error: {0}")]
    Browser(String),
}

impl AuthError {
    pub fn browser(err: wasm_bindgen::JsValue) -> Self {
        AuthError::Browser(format!("{:?}", err))
    }
}

/// Invalid `data-*` configuration on the mount point.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown identity source: {0}")]
    UnknownIdentitySource(String),

    #[error("Attribute {0} must not be empty")]
    EmptyAttribute(&'static str),
}
