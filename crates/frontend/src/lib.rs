//! Webchat navigation header.
//!
//! Renders the login state into the page's `#navLinks` element: the username
//! and a logout link for a logged-in visitor, login and register links
//! otherwise.

pub mod browser;
pub mod components;
pub mod config;
pub mod error;
pub mod mount;
pub mod services;
pub mod session;

pub use mount::HeaderMount;
