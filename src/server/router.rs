use std::time::Duration;

use axum::{http::StatusCode, middleware, Router};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, error::envelope_timeout, state::AppState};

#[derive(OpenApi)]
#[openapi(
    info(title = "Bookshelf API", description = "Authors and books CRUD backend"),
    tags(
        (name = "author", description = "Author management"),
        (name = "book", description = "Book management")
    )
)]
struct ApiDoc;

/// Builds the API router and serves the generated OpenAPI document alongside it.
///
/// - `/api/...` - Author and book endpoints
/// - `/swagger-ui` - Interactive API documentation
/// - `/api-docs/openapi.json` - Raw OpenAPI document
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(controller::author::router())
        .merge(controller::book::router())
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}

/// Wraps the stateful router in the request middleware stack.
///
/// Requests running longer than `request_timeout` are answered with 408 and the
/// `REQUEST_TIMEOUT` envelope.
pub fn with_layers(router: Router, request_timeout: Duration) -> Router {
    router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(middleware::map_response(envelope_timeout))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
