use tracing::{debug, instrument};

use crate::{error::AppResult, ports::outgoing::imaging::DynImagingPort};
use domain::{options::ProcessingOptions, wallpaper::ProcessedWallpaper};

/// Decode, pick a target by orientation, resize, filter, encode.
///
/// Runs synchronously; callers move it onto a blocking worker.
#[derive(Clone)]
pub struct WallpaperPipeline {
    imaging: DynImagingPort,
}

impl WallpaperPipeline {
    pub fn new(imaging: DynImagingPort) -> Self {
        Self { imaging }
    }

    #[instrument(skip(self, image), fields(input_bytes = image.len(), format = %options.output_format))]
    pub fn run(&self, image: &[u8], options: &ProcessingOptions) -> AppResult<ProcessedWallpaper> {
        let frame = self.imaging.decode(image)?;
        let source = frame.resolution();

        let (orientation, target) = options.resolutions.select(source.width, source.height);
        debug!(%source, %orientation, %target, "Selected target resolution");

        let mut frame = self.imaging.resize(frame, target)?;

        let chain = options.filter_chain();
        for step in chain.iter() {
            frame = self.imaging.apply_filter(frame, step)?;
        }
        debug!(active = ?chain.active_step_names(), "Applied filter chain");

        let bytes = self.imaging.encode(&frame, &options.encode_params())?;
        debug!(output_bytes = bytes.len(), "Encoded wallpaper");

        Ok(ProcessedWallpaper {
            bytes,
            format: options.output_format,
            orientation,
            resolution: frame.resolution(),
        })
    }
}
