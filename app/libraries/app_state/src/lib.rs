use app_config::AppConfig;

/// Shared handler state. There is no pool here: every request provisions its
/// own database connection from the configuration.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
}
