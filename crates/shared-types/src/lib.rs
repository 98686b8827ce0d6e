//! Types shared between the webchat frontend and its tests: the session
//! identity, the auth-status wire format, and legacy cookie handling.

pub mod cookie;
pub mod identity;

pub use cookie::{expired_cookie, get_cookie, identity_from_cookie_header, USERNAME_COOKIE};
pub use identity::{AuthStatusResponse, Identity, ANONYMOUS_LABEL};
