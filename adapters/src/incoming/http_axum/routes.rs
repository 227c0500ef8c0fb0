use axum::{
    Router,
    routing::{get, post},
};
#[cfg(feature = "docs")]
use utoipa::OpenApi;
#[cfg(feature = "docs")]
use utoipa_swagger_ui::SwaggerUi;

use crate::incoming::http_axum::{
    handlers::{health::health_check, suggestions::suggest_settings, wallpaper::create_wallpaper},
    router_ext::RouterExt,
};
use crate::shared::app_state::AppState;

#[cfg(feature = "docs")]
use crate::incoming::http_axum::docs::ApiDoc;

pub fn build_application_router(state: &AppState) -> Router<AppState> {
    let upload_routes = Router::new()
        .route("/upload", post(create_wallpaper))
        .route("/upload/", post(create_wallpaper))
        .route("/suggestions", post(suggest_settings))
        .with_upload_limit(state.config.upload.max_upload_bytes);

    let router = Router::new()
        .route("/health", get(health_check))
        .merge(upload_routes)
        .with_request_id();

    #[cfg(feature = "docs")]
    {
        router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
    }

    #[cfg(not(feature = "docs"))]
    {
        router
    }
}
