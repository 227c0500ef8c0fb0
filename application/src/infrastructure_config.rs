use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use domain::options::OutputFormat;
use domain::resolution::{Resolution, TargetResolutions};

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;
pub const DEFAULT_PROCESSING_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub upload: UploadConfig,
    pub pipeline: PipelineConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub environment: EnvironmentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub max_upload_bytes: usize,
}

/// Server-wide pipeline defaults. Resolutions are kept as `WxH` strings so
/// they can be overridden from a single environment variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub landscape_resolution: String,
    pub portrait_resolution: String,
    pub apply_blur: bool,
    pub brightness: i32,
    pub contrast: i32,
    pub grayscale: bool,
    pub output_format: OutputFormat,
    pub processing_timeout_secs: u64,
}

impl PipelineConfig {
    pub fn target_resolutions(&self) -> AppResult<TargetResolutions> {
        let parse = |field: &str, value: &str| {
            value
                .parse::<Resolution>()
                .map_err(|e| AppError::ConfigError {
                    message: format!("pipeline.{field}: {e}"),
                })
        };

        Ok(TargetResolutions::new(
            parse("landscape_resolution", &self.landscape_resolution)?,
            parse("portrait_resolution", &self.portrait_resolution)?,
        ))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub enabled: bool,
    pub output_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub include_location: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub env: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogFormat {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "pretty")]
    Pretty,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                cors_origin: None,
            },
            upload: UploadConfig {
                max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            },
            pipeline: PipelineConfig {
                landscape_resolution: Resolution::FULL_HD_LANDSCAPE.to_string(),
                portrait_resolution: Resolution::FULL_HD_PORTRAIT.to_string(),
                apply_blur: true,
                brightness: 100,
                contrast: 100,
                grayscale: false,
                output_format: OutputFormat::Png,
                processing_timeout_secs: DEFAULT_PROCESSING_TIMEOUT_SECS,
            },
            storage: StorageConfig {
                enabled: false,
                output_dir: "processed".to_string(),
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
                format: LogFormat::Pretty,
                include_location: false,
            },
            environment: EnvironmentConfig {
                env: "development".to_string(),
            },
        }
    }
}

impl Config {
    pub fn validate(&self) -> AppResult<()> {
        self.pipeline.target_resolutions()?;

        if self.pipeline.processing_timeout_secs == 0 {
            return Err(AppError::ConfigError {
                message: "processing_timeout_secs must be greater than 0".to_string(),
            });
        }

        if self.upload.max_upload_bytes == 0 {
            return Err(AppError::ConfigError {
                message: "max_upload_bytes must be greater than 0".to_string(),
            });
        }

        if self.storage.enabled && self.storage.output_dir.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "storage.output_dir cannot be empty when storage is enabled".to_string(),
            });
        }

        if self.logging.level.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "logging.level cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server_address(), "0.0.0.0:8000");
        assert_eq!(config.upload.max_upload_bytes, 25 * 1024 * 1024);
    }

    #[test]
    fn rejects_out_of_range_resolution() {
        let mut config = Config::default();
        config.pipeline.landscape_resolution = "0x1080".to_string();
        assert!(matches!(config.validate(), Err(AppError::ConfigError { .. })));

        config.pipeline.landscape_resolution = "20000x1080".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_limits() {
        let mut config = Config::default();
        config.pipeline.processing_timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.upload.max_upload_bytes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_output_dir_only_matters_when_storage_enabled() {
        let mut config = Config::default();
        config.storage.output_dir = "  ".to_string();
        assert!(config.validate().is_ok());

        config.storage.enabled = true;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_log_level() {
        let mut config = Config::default();
        config.logging.level = String::new();
        assert!(config.validate().is_err());
    }
}
