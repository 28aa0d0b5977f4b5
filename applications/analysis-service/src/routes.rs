/// Router construction
use crate::{api, error::ServerError, state::AppState};
use axum::{
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the analysis router over the given state
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health::health))
        .route("/process/user/:id", post(api::process::process_user))
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn not_found() -> impl IntoResponse {
    ServerError::RouteNotFound
}
