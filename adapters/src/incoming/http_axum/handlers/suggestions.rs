use axum::{
    Json,
    extract::{Multipart, State},
};

use wallforge_application::ports::incoming::wallpaper::WallpaperUseCase;

#[cfg(feature = "docs")]
use crate::incoming::http_axum::dto::{
    common_responses::{BadRequestResponse, ValidationErrorResponse},
    requests::SuggestionUploadForm,
    responses::ApiResponseSuggestion,
};
use crate::incoming::http_axum::{
    core::extractors::read_upload_form,
    dto::responses::{ApiResponse, SuggestionEnvelope},
    error_mapper::HttpError,
};
use crate::shared::app_state::AppState;

#[cfg_attr(feature = "docs", utoipa::path(
    post,
    path = "/suggestions",
    request_body(content = SuggestionUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Suggested target resolution and filter settings", body = ApiResponseSuggestion,
         example = json!({
             "ok": true,
             "data": {
                 "source": { "width": 4000, "height": 3000 },
                 "resolution": { "width": 3840, "height": 2160 },
                 "resolution_label": "Desktop 4K (3840x2160)",
                 "filters": { "apply_blur": true, "brightness": 100, "contrast": 100, "grayscale": false },
                 "filter_note": "Light blur applied. Default contrast/brightness retained."
             }
         })
        ),
        (status = 400, response = BadRequestResponse),
        (status = 422, response = ValidationErrorResponse)
    ),
    tag = "wallpaper",
    summary = "Suggest settings for an image",
    description = "Reads only the image header and orientation, then suggests a target resolution and filter adjustments. Nothing is processed or stored.",
    operation_id = "suggest_settings"
))]
pub async fn suggest_settings(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<SuggestionEnvelope>, HttpError> {
    let (upload, _fields) = read_upload_form(multipart).await?;

    let wallpaper_uc: &dyn WallpaperUseCase = &*state.wallpaper_use_case;
    let suggestion = wallpaper_uc.suggest_settings(upload.bytes).await?;

    Ok(Json(ApiResponse::success_with_data(Some(suggestion))))
}
