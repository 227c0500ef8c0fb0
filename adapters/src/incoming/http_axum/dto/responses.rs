use axum::{
    http::{
        HeaderMap, HeaderName, HeaderValue,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use serde::Serialize;
#[cfg(feature = "docs")]
use utoipa::{ToResponse, ToSchema};

use domain::{
    options::OutputFormat,
    resolution::{Orientation, Resolution},
    suggestion::SettingsSuggestion,
    wallpaper::ProcessedWallpaper,
};

pub const ORIENTATION_HEADER: &str = "x-wallpaper-orientation";
pub const RESOLUTION_HEADER: &str = "x-wallpaper-resolution";

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[cfg_attr(feature = "docs", schema(
    description = "Standard API response wrapper with success indicator, optional error message, and optional data payload",
    example = json!({
        "ok": true,
        "data": {
            "status": "ok"
        }
    })
))]
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    #[must_use]
    pub fn success_with_data(data: Option<T>) -> Self {
        Self {
            ok: true,
            error: None,
            data,
        }
    }
}

/// Encoded wallpaper sent back as a file download.
#[cfg_attr(feature = "docs", derive(ToResponse))]
#[cfg_attr(feature = "docs", response(
    description = "Encoded wallpaper as an attachment",
    content_type = "image/png",
    headers(
        ("Content-Disposition" = String, description = "attachment; filename=\"wallpaper.png\""),
        ("X-Wallpaper-Orientation" = String, description = "landscape or portrait"),
        ("X-Wallpaper-Resolution" = String, description = "WIDTHxHEIGHT of the output")
    )
))]
pub struct WallpaperImageResponse {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub format: OutputFormat,
    pub orientation: Orientation,
    pub resolution: Resolution,
}

impl From<ProcessedWallpaper> for WallpaperImageResponse {
    fn from(wallpaper: ProcessedWallpaper) -> Self {
        Self {
            file_name: wallpaper.file_name(),
            format: wallpaper.format,
            orientation: wallpaper.orientation,
            resolution: wallpaper.resolution,
            bytes: wallpaper.bytes,
        }
    }
}

impl IntoResponse for WallpaperImageResponse {
    fn into_response(self) -> Response {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(self.format.mime_type()));
        if let Ok(disposition) = HeaderValue::from_str(&format!(
            "attachment; filename=\"{}\"",
            self.file_name
        )) {
            headers.insert(CONTENT_DISPOSITION, disposition);
        }
        headers.insert(
            HeaderName::from_static(ORIENTATION_HEADER),
            HeaderValue::from_static(self.orientation.as_str()),
        );
        if let Ok(resolution) = HeaderValue::from_str(&self.resolution.to_string()) {
            headers.insert(HeaderName::from_static(RESOLUTION_HEADER), resolution);
        }
        (headers, self.bytes).into_response()
    }
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[cfg_attr(feature = "docs", schema(
    description = "Effective server defaults and liveness",
    example = json!({
        "status": "ok",
        "version": "0.1.0",
        "landscape_resolution": "1920x1080",
        "portrait_resolution": "1080x1920",
        "output_format": "png",
        "processing_timeout_secs": 30,
        "storage_enabled": false
    })
))]
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub landscape_resolution: String,
    pub portrait_resolution: String,
    pub output_format: String,
    pub processing_timeout_secs: u64,
    pub storage_enabled: bool,
}

pub type SuggestionEnvelope = ApiResponse<SettingsSuggestion>;

#[cfg(feature = "docs")]
#[derive(serde::Serialize, utoipa::ToSchema)]
#[schema(title = "ApiResponseHealth")]
pub struct ApiResponseHealth {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<HealthResponse>,
}

#[cfg(feature = "docs")]
#[derive(serde::Serialize, utoipa::ToSchema)]
#[schema(title = "ApiResponseSuggestion")]
pub struct ApiResponseSuggestion {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<SettingsSuggestion>,
}
