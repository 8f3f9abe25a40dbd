use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{response::ErrorResponse, state::AppState};

pub mod categories;
pub mod doc;
pub mod health;
pub mod params;
pub mod products;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/hello", get(health::hello))
        .nest("/products", products::router())
        .nest("/categories", categories::router())
}

/// Every route the service answers, with CORS and the JSON 404 fallback.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/test", get(health::diagnostics))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .layer(cors)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    let body = ErrorResponse {
        message: "Not Found".to_string(),
        field: None,
        detail: Some(uri.path().to_string()),
    };
    (StatusCode::NOT_FOUND, Json(body))
}
