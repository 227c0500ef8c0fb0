use axum::{Json, extract::State};

#[cfg(feature = "docs")]
use crate::incoming::http_axum::dto::responses::ApiResponseHealth;
use crate::incoming::http_axum::dto::responses::{ApiResponse, HealthResponse};
use crate::shared::app_state::AppState;
use wallforge_application::ports::incoming::wallpaper::WallpaperUseCase;

#[cfg_attr(feature = "docs", utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up; reports the effective pipeline defaults", body = ApiResponseHealth,
         example = json!({
             "ok": true,
             "data": {
                 "status": "ok",
                 "version": "0.1.0",
                 "landscape_resolution": "1920x1080",
                 "portrait_resolution": "1080x1920",
                 "output_format": "png",
                 "processing_timeout_secs": 30,
                 "storage_enabled": false
             }
         })
        )
    ),
    tag = "system",
    summary = "System health check",
    operation_id = "health_check"
))]
pub async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let wallpaper_uc: &dyn WallpaperUseCase = &*state.wallpaper_use_case;
    let settings = wallpaper_uc.settings();
    let defaults = settings.defaults;

    Json(ApiResponse::success_with_data(Some(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        landscape_resolution: defaults.resolutions.landscape.to_string(),
        portrait_resolution: defaults.resolutions.portrait.to_string(),
        output_format: defaults.output_format.to_string(),
        processing_timeout_secs: settings.processing_timeout.as_secs(),
        storage_enabled: settings.persist_results,
    })))
}
