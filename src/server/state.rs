//! Shared state for the HTTP server

use std::sync::Arc;

use crate::clock::Clock;
use crate::components::{RenderContext, RootShell};
use crate::config::SiteContent;

/// Immutable state shared by all handlers
///
/// Cloning is cheap (reference counts only) and nothing here is mutated
/// after startup, so handlers need no locking.
#[derive(Clone)]
pub struct AppState {
    pub shell: Arc<RootShell>,
    pub site: Arc<SiteContent>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(site: SiteContent, clock: Arc<dyn Clock>) -> Self {
        Self {
            shell: Arc::new(RootShell::new()),
            site: Arc::new(site),
            clock,
        }
    }

    /// Render the full HTML document
    pub fn render_page(&self) -> String {
        let ctx = RenderContext::new(&self.site, self.clock.as_ref());
        self.shell.render_document(&ctx)
    }
}
