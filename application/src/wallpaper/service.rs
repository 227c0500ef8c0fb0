use std::sync::Arc;
use tracing::{info, instrument};

use domain::{
    options::ProcessingOptions,
    suggestion::{SettingsSuggestion, suggest_settings},
    wallpaper::{ProcessedWallpaper, ProcessingRequest},
};

use crate::{
    config::WallpaperSettings,
    error::{AppError, AppResult},
    ports::{
        incoming::wallpaper::WallpaperUseCase,
        outgoing::{
            imaging::DynImagingPort,
            timeout::{DynPipelineTimeoutPort, PipelineJob, TimeoutError},
            wallpaper_store::DynWallpaperStorePort,
        },
    },
};

use super::pipeline::WallpaperPipeline;

pub struct WallpaperServiceDeps {
    pub imaging: DynImagingPort,
    pub timeout_port: DynPipelineTimeoutPort,
    /// Present only when result persistence is switched on.
    pub store: Option<DynWallpaperStorePort>,
}

pub struct WallpaperService {
    settings: Arc<WallpaperSettings>,
    pipeline: WallpaperPipeline,
    imaging: DynImagingPort,
    timeout_port: DynPipelineTimeoutPort,
    store: Option<DynWallpaperStorePort>,
}

impl WallpaperService {
    pub fn new(settings: &Arc<WallpaperSettings>, deps: WallpaperServiceDeps) -> Arc<Self> {
        Arc::new(Self {
            settings: Arc::clone(settings),
            pipeline: WallpaperPipeline::new(Arc::clone(&deps.imaging)),
            imaging: deps.imaging,
            timeout_port: deps.timeout_port,
            store: deps.store,
        })
    }

    async fn run_pipeline(
        &self,
        image: Vec<u8>,
        options: ProcessingOptions,
    ) -> AppResult<ProcessedWallpaper> {
        let pipeline = self.pipeline.clone();
        let job: PipelineJob = Box::new(move || pipeline.run(&image, &options));
        let deadline = self.settings.processing_timeout;

        self.timeout_port
            .run_with_timeout(job, deadline)
            .await
            .map_err(|e| match e {
                TimeoutError::Elapsed => AppError::Timeout {
                    seconds: deadline.as_secs(),
                },
                TimeoutError::TaskFailed { message } => AppError::TaskError { message },
            })?
    }
}

#[async_trait::async_trait]
impl WallpaperUseCase for WallpaperService {
    #[instrument(skip(self, request), fields(request_id = %request.id, input_bytes = request.image.len()))]
    async fn create_wallpaper(&self, request: ProcessingRequest) -> AppResult<ProcessedWallpaper> {
        let ProcessingRequest { id, image, options } = request;
        options.resolutions.landscape.validate()?;
        options.resolutions.portrait.validate()?;

        let wallpaper = self.run_pipeline(image, options).await?;

        if let Some(store) = &self.store {
            let path = store.save(id, &wallpaper).await?;
            info!(path = %path.display(), "Stored processed wallpaper");
        }

        info!(
            orientation = %wallpaper.orientation,
            resolution = %wallpaper.resolution,
            output_bytes = wallpaper.bytes.len(),
            "Wallpaper created"
        );

        Ok(wallpaper)
    }

    #[instrument(skip(self, image), fields(input_bytes = image.len()))]
    async fn suggest_settings(&self, image: Vec<u8>) -> AppResult<SettingsSuggestion> {
        let source = self.imaging.probe(&image)?;
        Ok(suggest_settings(source))
    }

    fn default_options(&self) -> ProcessingOptions {
        self.settings.defaults
    }

    fn settings(&self) -> &WallpaperSettings {
        &self.settings
    }
}
