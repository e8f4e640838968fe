pub mod stores;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::{auth, metrics, openapi::ApiDoc, state::ServerState};

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Store CRUD routes, relative to [`stores::BASE_PATH`].
fn store_routes(state: ServerState) -> Router<ServerState> {
    Router::new()
        .route("/all", get(stores::list))
        .route("/add", post(stores::create))
        .route("/update", put(stores::update))
        .route("/:id", get(stores::get_by_id))
        .route("/:id/delete", delete(stores::delete))
        .route_layer(middleware::from_fn_with_state(state, auth::require_bearer_token))
        .route_layer(middleware::from_fn(metrics::track_requests))
}

/// Build the full application router: store API, health, metrics and docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics::export))
        .nest(stores::BASE_PATH, store_routes(state.clone()))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx responses are logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
