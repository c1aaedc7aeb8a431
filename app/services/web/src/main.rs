mod handlers;
mod routings;

use crate::routings::router;
use app_config::AppConfig;
use app_log::init_tracing;
use app_state::AppState;
use dotenv::dotenv;
use std::sync::Arc;
use tracing::*;

#[tokio::main]
async fn main() {
    dotenv().ok();
    let config = AppConfig::new();
    let bind = config.backend_bind.clone();
    init_tracing(config.log_level.clone());
    // Generating AppState
    let app_state = Arc::new(AppState { config });
    // Loading Routes
    let routes = router(app_state);
    // Setup TCP Port
    let tcp_listener = tokio::net::TcpListener::bind(&bind).await.unwrap();
    // Running Server ...
    info!("Serving web server on {}", &bind);
    axum::serve(tcp_listener, routes).await.unwrap();
}
