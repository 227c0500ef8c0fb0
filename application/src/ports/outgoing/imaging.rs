use crate::error::AppResult;
use domain::{
    encoding::EncodeParams, filters::FilterStep, frame::RgbFrame, resolution::Resolution,
};
use std::sync::Arc;

/// Synchronous image primitives. Implementations are CPU bound and are
/// expected to run off the async executor.
pub trait ImagingPort: Send + Sync {
    /// Decodes any supported container into an upright RGB frame, applying
    /// the EXIF orientation when present.
    fn decode(&self, image: &[u8]) -> AppResult<RgbFrame>;

    /// Reads only the header and returns the upright dimensions.
    fn probe(&self, image: &[u8]) -> AppResult<Resolution>;

    fn resize(&self, frame: RgbFrame, target: Resolution) -> AppResult<RgbFrame>;

    fn apply_filter(&self, frame: RgbFrame, step: &FilterStep) -> AppResult<RgbFrame>;

    fn encode(&self, frame: &RgbFrame, params: &EncodeParams) -> AppResult<Vec<u8>>;
}

pub type DynImagingPort = Arc<dyn ImagingPort>;
