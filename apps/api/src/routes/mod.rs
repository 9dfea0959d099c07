pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::persona::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Persona API
        .route(
            "/api/v1/personas",
            get(handlers::handle_list_personas).post(handlers::handle_generate_persona),
        )
        .route(
            "/api/v1/personas/structure",
            post(handlers::handle_structure_preview),
        )
        .route(
            "/api/v1/personas/:id",
            get(handlers::handle_get_persona).delete(handlers::handle_delete_persona),
        )
        .route(
            "/api/v1/personas/:id/enrich",
            post(handlers::handle_enrich_persona),
        )
        .route(
            "/api/v1/personas/:id/export",
            get(handlers::handle_export_persona),
        )
        .with_state(state)
}
