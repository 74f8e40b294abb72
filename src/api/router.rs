//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Three routes: the query endpoint, the liveness check, and the service
//! index. CORS is configured from the origin allow-list; `*` keeps the
//! permissive wildcard setup (without credentials), an explicit list
//! enables credentialed requests for just those origins.

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::pipeline::completion::AnswerGenerate;
use crate::pipeline::reference::ReferenceLookup;

/// Build the health API router.
pub fn health_api_router<R, G>(ctx: ApiContext<R, G>, allowed_origins: &[String]) -> Router
where
    R: ReferenceLookup + 'static,
    G: AnswerGenerate + 'static,
{
    Router::new()
        .route("/process-health-query", post(endpoints::query::process::<R, G>))
        .route("/health", get(endpoints::health::check))
        .route("/", get(endpoints::root::index))
        .with_state(ctx)
        .layer(cors_layer(allowed_origins))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.iter().any(|origin| origin == "*") {
        // Wildcard origins cannot be combined with credentials.
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
