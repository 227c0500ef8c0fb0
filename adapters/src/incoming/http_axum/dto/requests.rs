use domain::{
    options::{OutputFormat, ProcessingOptions},
    resolution::Resolution,
};
#[cfg(feature = "docs")]
use utoipa::ToSchema;
use wallforge_application::error::{AppError, AppResult};

/// Multipart body of `POST /upload`. Only used for the OpenAPI schema; the
/// handler streams the form field by field.
#[cfg(feature = "docs")]
#[derive(ToSchema)]
#[schema(description = "Image upload with optional per-request processing overrides.")]
#[allow(dead_code)]
pub struct WallpaperUploadForm {
    #[schema(format = Binary, value_type = String)]
    pub file: Vec<u8>,
    #[schema(example = true)]
    pub apply_blur: Option<bool>,
    #[schema(example = false)]
    pub grayscale: Option<bool>,
    #[schema(example = 110)]
    pub brightness: Option<i32>,
    #[schema(example = 120)]
    pub contrast: Option<i32>,
    #[schema(example = "png")]
    pub format: Option<String>,
    #[schema(example = "1920x1080")]
    pub landscape_resolution: Option<String>,
    #[schema(example = "1080x1920")]
    pub portrait_resolution: Option<String>,
}

/// Multipart body of `POST /suggestions`.
#[cfg(feature = "docs")]
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct SuggestionUploadForm {
    #[schema(format = Binary, value_type = String)]
    pub file: Vec<u8>,
}

/// Raw text values of the optional upload fields, as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WallpaperFormFields {
    pub apply_blur: Option<String>,
    pub grayscale: Option<String>,
    pub brightness: Option<String>,
    pub contrast: Option<String>,
    pub format: Option<String>,
    pub landscape_resolution: Option<String>,
    pub portrait_resolution: Option<String>,
}

impl WallpaperFormFields {
    /// Stores a text field. Returns `false` for names this form does not know.
    pub fn set(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "apply_blur" => &mut self.apply_blur,
            "grayscale" => &mut self.grayscale,
            "brightness" => &mut self.brightness,
            "contrast" => &mut self.contrast,
            "format" => &mut self.format,
            "landscape_resolution" => &mut self.landscape_resolution,
            "portrait_resolution" => &mut self.portrait_resolution,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    /// Overlays the submitted fields on top of the server defaults.
    ///
    /// The output format is checked first so an unsupported format is
    /// rejected before any image work starts.
    pub fn into_options(self, defaults: ProcessingOptions) -> AppResult<ProcessingOptions> {
        let mut options = defaults;

        if let Some(format) = non_blank(self.format.as_deref()) {
            options.output_format = format.parse::<OutputFormat>()?;
        }
        if let Some(value) = non_blank(self.landscape_resolution.as_deref()) {
            options.resolutions.landscape = value.parse::<Resolution>()?;
        }
        if let Some(value) = non_blank(self.portrait_resolution.as_deref()) {
            options.resolutions.portrait = value.parse::<Resolution>()?;
        }
        if let Some(value) = non_blank(self.apply_blur.as_deref()) {
            options.apply_blur = parse_flag("apply_blur", value)?;
        }
        if let Some(value) = non_blank(self.grayscale.as_deref()) {
            options.grayscale = parse_flag("grayscale", value)?;
        }
        if let Some(value) = non_blank(self.brightness.as_deref()) {
            options.brightness = parse_percent("brightness", value)?;
        }
        if let Some(value) = non_blank(self.contrast.as_deref()) {
            options.contrast = parse_percent("contrast", value)?;
        }

        Ok(options)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_flag(field: &str, value: &str) -> AppResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Ok(true),
        "false" | "0" | "off" | "no" => Ok(false),
        _ => Err(AppError::ValidationError {
            message: format!("{field} must be a boolean, got '{value}'"),
        }),
    }
}

fn parse_percent(field: &str, value: &str) -> AppResult<i32> {
    value.parse::<i32>().map_err(|_| AppError::ValidationError {
        message: format!("{field} must be an integer percentage, got '{value}'"),
    })
}
