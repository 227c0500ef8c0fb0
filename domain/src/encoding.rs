use serde::Serialize;

use crate::options::OutputFormat;

pub const JPEG_QUALITY: u8 = 95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PngCompression {
    Fast,
    Default,
    Best,
}

/// Fixed encoder settings per output format.
///
/// PNG favours encode speed over file size. `optimize` asks the encoder to
/// pick per-row filters adaptively, which does not raise the deflate effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum EncodeParams {
    Png {
        compression: PngCompression,
        optimize: bool,
    },
    Jpeg {
        quality: u8,
        progressive: bool,
        optimize: bool,
    },
}

impl EncodeParams {
    #[must_use]
    pub fn for_format(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Png => Self::Png {
                compression: PngCompression::Fast,
                optimize: true,
            },
            OutputFormat::Jpeg => Self::Jpeg {
                quality: JPEG_QUALITY,
                progressive: true,
                optimize: true,
            },
        }
    }

    #[must_use]
    pub fn format(&self) -> OutputFormat {
        match self {
            Self::Png { .. } => OutputFormat::Png,
            Self::Jpeg { .. } => OutputFormat::Jpeg,
        }
    }
}
