use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::openapi::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        bird::{create_bird, delete_bird, get_all_birds, get_bird_by_id, update_bird},
        diagnostics::test_logging,
    },
    state::AppState,
};

/// Builds the application routes with Swagger UI serving `api_doc` at `/swagger`.
///
/// The collection answers with and without a trailing slash.
pub fn router(api_doc: OpenApi) -> Router<AppState> {
    Router::new()
        .route("/api/birds", get(get_all_birds).post(create_bird))
        .route("/api/birds/", get(get_all_birds).post(create_bird))
        .route(
            "/api/birds/{id}",
            get(get_bird_by_id).put(update_bird).delete(delete_bird),
        )
        .route("/test-logging", get(test_logging))
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", api_doc))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
