use std::time::Duration;

use crate::error::AppResult;
use crate::infrastructure_config::{Config, DEFAULT_PROCESSING_TIMEOUT_SECS};
use domain::options::ProcessingOptions;

/// Runtime view of the pipeline configuration handed to the wallpaper service.
#[derive(Debug, Clone)]
pub struct WallpaperSettings {
    pub defaults: ProcessingOptions,
    pub processing_timeout: Duration,
    pub persist_results: bool,
}

impl WallpaperSettings {
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let pipeline = &config.pipeline;

        Ok(Self {
            defaults: ProcessingOptions {
                resolutions: pipeline.target_resolutions()?,
                apply_blur: pipeline.apply_blur,
                brightness: pipeline.brightness,
                contrast: pipeline.contrast,
                grayscale: pipeline.grayscale,
                output_format: pipeline.output_format,
            },
            processing_timeout: Duration::from_secs(pipeline.processing_timeout_secs),
            persist_results: config.storage.enabled,
        })
    }
}

impl Default for WallpaperSettings {
    fn default() -> Self {
        Self {
            defaults: ProcessingOptions::default(),
            processing_timeout: Duration::from_secs(DEFAULT_PROCESSING_TIMEOUT_SECS),
            persist_results: false,
        }
    }
}
