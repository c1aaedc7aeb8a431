use crate::handlers::cliente::*;
use app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/clientes", get(get_clientes))
        .route("/cliente", post(post_cliente))
        .route("/cliente/", get(get_cliente_by_cidade))
        .route(
            "/cliente/{id}",
            get(get_cliente_by_id)
                .put(put_cliente)
                .delete(delete_cliente),
        )
        .route("/cliente/nome/", get(get_cliente_by_nome))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
