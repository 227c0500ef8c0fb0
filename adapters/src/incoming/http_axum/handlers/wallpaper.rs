use axum::{
    extract::{Multipart, State},
    http::HeaderMap,
};
use tracing::{info, instrument};

use domain::wallpaper::{ProcessingRequest, RequestId};
use wallforge_application::ports::incoming::wallpaper::WallpaperUseCase;

#[cfg(feature = "docs")]
use crate::incoming::http_axum::dto::{
    common_responses::{
        BadRequestResponse, InternalServerErrorResponse, PayloadTooLargeResponse,
        ServiceUnavailableResponse, ValidationErrorResponse,
    },
    requests::WallpaperUploadForm,
};
use crate::incoming::http_axum::{
    core::extractors::read_upload_form, dto::responses::WallpaperImageResponse,
    error_mapper::HttpError, middleware::request_id::REQUEST_ID_HEADER,
};
use crate::shared::app_state::AppState;

#[cfg_attr(feature = "docs", utoipa::path(
    post,
    path = "/upload",
    request_body(content = WallpaperUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, response = WallpaperImageResponse),
        (status = 400, response = BadRequestResponse),
        (status = 413, response = PayloadTooLargeResponse),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    ),
    tag = "wallpaper",
    summary = "Convert a photo into a wallpaper",
    description = "Decodes the uploaded image, applies its EXIF orientation, resizes it to the landscape or portrait target, runs the blur/brightness/contrast/grayscale chain and returns the encoded PNG or JPEG as an attachment.",
    operation_id = "create_wallpaper"
))]
#[instrument(skip(state, headers, multipart))]
pub async fn create_wallpaper(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<WallpaperImageResponse, HttpError> {
    let (upload, fields) = read_upload_form(multipart).await?;

    let wallpaper_uc: &dyn WallpaperUseCase = &*state.wallpaper_use_case;
    let options = fields.into_options(wallpaper_uc.default_options())?;

    // Storage keys are always server-generated; the client header is only logged.
    let request_id = RequestId::new();
    let client_request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("none");
    info!(
        %request_id,
        client_request_id,
        file_name = upload.file_name.as_deref().unwrap_or("unknown"),
        input_bytes = upload.bytes.len(),
        format = %options.output_format,
        "Processing wallpaper upload"
    );

    let wallpaper = wallpaper_uc
        .create_wallpaper(ProcessingRequest::new(request_id, upload.bytes, options))
        .await?;

    Ok(WallpaperImageResponse::from(wallpaper))
}
