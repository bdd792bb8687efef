use crate::config::Config;
use crate::templates::TemplateRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Process-wide template catalog; read-only.
    pub registry: &'static TemplateRegistry,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            registry: crate::templates::registry::global(),
        }
    }
}
