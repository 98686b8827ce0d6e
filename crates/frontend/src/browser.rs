//! Thin wrappers over the browser APIs the header touches.

use gloo::utils::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlDocument};

use crate::error::AuthError;

pub fn mount_point(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

fn html_document() -> Result<HtmlDocument, AuthError> {
    document()
        .dyn_into::<HtmlDocument>()
        .map_err(|_| AuthError::Browser("document is not an HTML document".to_string()))
}

/// Raw `document.cookie`, e.g. `theme=dark; username=alice`.
pub fn cookie_header() -> Result<String, AuthError> {
    html_document()?.cookie().map_err(AuthError::browser)
}

pub fn set_cookie(assignment: &str) -> Result<(), AuthError> {
    html_document()?
        .set_cookie(assignment)
        .map_err(AuthError::browser)
}

pub fn reload() -> Result<(), AuthError> {
    window().location().reload().map_err(AuthError::browser)
}
