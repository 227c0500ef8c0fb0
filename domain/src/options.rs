use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "docs")]
use utoipa::ToSchema;

use crate::encoding::EncodeParams;
use crate::error::DomainError;
use crate::filters::FilterChain;
use crate::resolution::TargetResolutions;

pub const NEUTRAL_PERCENT: i32 = 100;

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    #[serde(alias = "jpg")]
    Jpeg,
}

impl OutputFormat {
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        }
    }

    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    #[must_use]
    pub fn download_file_name(&self) -> String {
        format!("wallpaper.{}", self.extension())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            other => Err(DomainError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Per-request knobs for the wallpaper pipeline.
///
/// Brightness and contrast are percentages where 100 leaves the image
/// untouched. They are deliberately not range-checked; the filters clamp
/// channel values instead.
#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingOptions {
    pub resolutions: TargetResolutions,
    pub apply_blur: bool,
    pub brightness: i32,
    pub contrast: i32,
    pub grayscale: bool,
    pub output_format: OutputFormat,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            resolutions: TargetResolutions::default(),
            apply_blur: true,
            brightness: NEUTRAL_PERCENT,
            contrast: NEUTRAL_PERCENT,
            grayscale: false,
            output_format: OutputFormat::Png,
        }
    }
}

impl ProcessingOptions {
    #[must_use]
    pub fn filter_chain(&self) -> FilterChain {
        FilterChain::from_options(self)
    }

    #[must_use]
    pub fn encode_params(&self) -> EncodeParams {
        EncodeParams::for_format(self.output_format)
    }
}
