pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::normalize::handlers as normalize;
use crate::render::handlers as render;
use crate::state::AppState;
use crate::templates::handlers as templates;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Template catalog
        .route("/api/v1/templates", get(templates::handle_list_templates))
        .route("/api/v1/templates/:id", get(templates::handle_get_template))
        // Resume data
        .route(
            "/api/v1/resumes/normalize",
            post(normalize::handle_normalize),
        )
        // Rendering
        .route("/api/v1/render", post(render::handle_render))
        .with_state(state)
}
