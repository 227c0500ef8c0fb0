use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::bootstrap::state::AppState;
use wallforge_adapters::incoming::http_axum::routes::build_application_router;
use wallforge_adapters::shared::app_state::AppState as AdaptersAppState;

pub fn create_router(state: &AppState) -> Router {
    let adapters_state = state.to_adapters_state();
    let cors_layer = create_cors_layer(&adapters_state);

    build_application_router(&adapters_state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer),
        )
        .with_state(adapters_state)
}

/// A concrete origin is allowed with credentials; no origin or `*` opens the
/// API to any origin without credentials.
fn create_cors_layer(state: &AdaptersAppState) -> CorsLayer {
    let base_cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("x-request-id"),
        ])
        .expose_headers([
            HeaderName::from_static("content-disposition"),
            HeaderName::from_static("x-request-id"),
            HeaderName::from_static("x-wallpaper-orientation"),
            HeaderName::from_static("x-wallpaper-resolution"),
        ]);

    let configured_origin = state
        .config
        .server
        .cors_origin
        .as_deref()
        .map(str::trim)
        .filter(|origin| !origin.is_empty() && *origin != "*");

    match configured_origin {
        Some(origin) => match origin.parse::<HeaderValue>() {
            Ok(value) => base_cors.allow_origin(value).allow_credentials(true),
            Err(_) => {
                warn!(origin, "Ignoring unparsable CORS origin, allowing any origin");
                base_cors.allow_origin(Any)
            }
        },
        None => base_cors.allow_origin(Any),
    }
}
