use axum::{
    extract::{Multipart, multipart::MultipartError},
    http::StatusCode,
};
use tracing::debug;
use wallforge_application::error::AppError;

use crate::incoming::http_axum::{dto::requests::WallpaperFormFields, error_mapper::HttpError};

const FILE_FIELD: &str = "file";

pub struct UploadedImage {
    pub bytes: Vec<u8>,
    pub file_name: Option<String>,
}

/// Reads the whole multipart form: exactly one `file` field plus any known
/// text fields. Unknown fields are skipped.
pub async fn read_upload_form(
    mut multipart: Multipart,
) -> Result<(UploadedImage, WallpaperFormFields), HttpError> {
    let mut image: Option<UploadedImage> = None;
    let mut fields = WallpaperFormFields::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(ToString::to_string).unwrap_or_default();

        if name == FILE_FIELD {
            if image.is_some() {
                return Err(HttpError(AppError::ValidationError {
                    message: "Send exactly one field named 'file'".to_string(),
                }));
            }

            let file_name = field.file_name().map(ToString::to_string);
            let bytes = field.bytes().await.map_err(multipart_error)?;
            image = Some(UploadedImage {
                bytes: bytes.to_vec(),
                file_name,
            });
            continue;
        }

        let value = field.text().await.map_err(multipart_error)?;
        if !fields.set(&name, value) {
            debug!(field = %name, "Ignoring unknown form field");
        }
    }

    let image = image.ok_or_else(|| {
        HttpError(AppError::ValidationError {
            message: "No file provided".to_string(),
        })
    })?;

    Ok((image, fields))
}

fn multipart_error(error: MultipartError) -> HttpError {
    let app_error = if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge {
            message: error.body_text(),
        }
    } else {
        AppError::ValidationError {
            message: format!("Failed to read multipart form: {}", error.body_text()),
        }
    };
    HttpError(app_error)
}
