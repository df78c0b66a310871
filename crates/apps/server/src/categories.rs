//! Category metadata for legends and marker styling.

use axum::extract::State;
use axum::Json;

use catalog::Category;

use crate::AppState;

pub async fn get_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.categories.entries().to_vec())
}
