use axum::{extract::State, Json};

use crate::content::Portfolio;
use crate::state::AppState;

/// GET /api/v1/content
/// The static content model, as rendered on the page.
pub async fn handle_get_content(State(state): State<AppState>) -> Json<Portfolio> {
    Json(state.portfolio)
}
