//! Mounting the header into the page.

use yew::AppHandle;

use crate::browser;
use crate::components::header::{Header, HeaderProps};
use crate::config::{HeaderConfig, MOUNT_ID};

/// Owns the header app mounted at `#navLinks`.
#[derive(Default)]
pub struct HeaderMount {
    handle: Option<AppHandle<Header>>,
}

impl HeaderMount {
    /// Replace the mount point's contents with a freshly resolved header.
    ///
    /// Returns `false`, and touches nothing, when the page has no mount point.
    pub fn render(&mut self) -> bool {
        let Some(root) = browser::mount_point(MOUNT_ID) else {
            tracing::debug!("No #{} element on this page, skipping header", MOUNT_ID);
            return false;
        };

        let config = HeaderConfig::from_attributes(|name| root.get_attribute(name))
            .unwrap_or_else(|e| {
                tracing::warn!("Invalid header configuration, using defaults: {}", e);
                HeaderConfig::default()
            });

        if let Some(previous) = self.handle.take() {
            previous.destroy();
        }

        let handle = yew::Renderer::<Header>::with_root_and_props(root, HeaderProps { config })
            .render();
        self.handle = Some(handle);
        true
    }
}
