use crate::incoming::http_axum::{dto, handlers};
use domain::{
    options::{OutputFormat, ProcessingOptions},
    resolution::{Orientation, Resolution, TargetResolutions},
    suggestion::{SettingsSuggestion, SuggestedFilters},
};
use dto::common_responses::{
    BadRequestResponse, InternalServerErrorResponse, PayloadTooLargeResponse,
    ServiceUnavailableResponse, ValidationErrorResponse,
};
use dto::requests::{SuggestionUploadForm, WallpaperUploadForm};
use dto::responses::{
    ApiResponseHealth, ApiResponseSuggestion, HealthResponse, WallpaperImageResponse,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::wallpaper::create_wallpaper,
        handlers::suggestions::suggest_settings,
        handlers::health::health_check,
    ),
    components(
        schemas(
            WallpaperUploadForm,
            SuggestionUploadForm,
            ApiResponseHealth,
            ApiResponseSuggestion,
            HealthResponse,
            SettingsSuggestion,
            SuggestedFilters,
            ProcessingOptions,
            TargetResolutions,
            Resolution,
            Orientation,
            OutputFormat
        ),
        responses(
            WallpaperImageResponse,
            BadRequestResponse,
            PayloadTooLargeResponse,
            ValidationErrorResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = "wallpaper", description = "Photo to wallpaper conversion - orientation-aware resize, cosmetic filters, PNG/JPEG output"),
        (name = "system", description = "System health and status monitoring")
    ),
    info(
        title = "Wallforge API",
        description = "Turns uploaded photos into device wallpapers. Images are decoded with their EXIF orientation applied, classified as landscape or portrait, resized to the matching target resolution, filtered and returned as a downloadable PNG or JPEG.",
        contact(
            name = "Wallforge",
        ),
    ),
    servers(
        (url = "http://localhost:8000", description = "Development server"),
    )
)]
pub struct ApiDoc;
