pub mod content;
pub mod health;
pub mod page;

use axum::{
    handler::HandlerWithoutStateExt,
    http::Uri,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::contact::handlers as contact;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No resource at {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    let assets =
        ServeDir::new(&state.config.static_dir).not_found_service(not_found.into_service());

    Router::new()
        .route("/", get(page::handle_page))
        .route("/contact", post(contact::handle_contact_form))
        .route("/health", get(health::health_handler))
        .route("/api/v1/content", get(content::handle_get_content))
        .route("/api/v1/contact", post(contact::handle_contact_api))
        .fallback_service(assets)
        .with_state(state)
}
