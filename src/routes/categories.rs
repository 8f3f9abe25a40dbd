use axum::{Json, Router, extract::State, routing::get};

use crate::{services::product_service, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_categories))
}

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "Distinct non-empty categories, sorted", body = Vec<String>)
    ),
    tag = "Products"
)]
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(product_service::list_categories(&state).await)
}
