use anyhow::{Context, Result};

use crate::core::interfaces::adapters::LinkOpener;

/// Opens links in the platform's default browser.
pub struct SystemLinkOpener;

impl SystemLinkOpener {
    pub fn new() -> Self {
        Self
    }
}

impl LinkOpener for SystemLinkOpener {
    fn open_link(&self, url: &str) -> Result<()> {
        log::info!("[LINK_OPENER] Opening {} in default browser", url);
        open::that_detached(url).with_context(|| format!("Failed to open {}", url))
    }
}
