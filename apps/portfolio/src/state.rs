use std::sync::Arc;

use crate::config::Config;
use crate::contact::{EmailDelivery, InFlight};
use crate::content::Portfolio;
use crate::shell::ShellContext;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Immutable content model, built once at startup.
    pub portfolio: Portfolio,
    /// Pluggable email delivery. Default: EmailJsClient.
    pub delivery: Arc<dyn EmailDelivery>,
    /// Contact payloads currently being delivered, shared by every request.
    pub inflight: InFlight,
    pub config: Config,
}

impl AppState {
    /// Starts a page view with the configured theme and an empty toast queue.
    pub fn mount_shell(&self) -> ShellContext {
        ShellContext::mount(self.config.theme, self.config.toast_duration_ms)
    }
}
