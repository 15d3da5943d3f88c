use crate::config::AppConfig;
use crate::web::templates::init_templates;
use minijinja::Environment;

/// Shared, read-only application state for the web server
pub struct AppState {
    pub config: AppConfig,
    pub template_env: Environment<'static>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            template_env: init_templates(),
        }
    }
}
