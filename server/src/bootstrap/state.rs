use std::sync::Arc;

use wallforge_adapters::outgoing::{
    fs_store::wallpaper_store_fs::FsWallpaperStoreAdapter,
    image_rs::imaging_image::ImageRsImagingAdapter,
    tokio_spawn::pipeline_timeout_tokio::TokioPipelineTimeoutAdapter,
};
use wallforge_adapters::shared::app_state::AppState as AdaptersAppState;
use wallforge_application::{
    config::WallpaperSettings,
    error::AppError,
    infrastructure_config::Config,
    ports::{
        incoming::wallpaper::WallpaperUseCase,
        outgoing::{
            imaging::DynImagingPort, timeout::DynPipelineTimeoutPort,
            wallpaper_store::DynWallpaperStorePort,
        },
    },
    wallpaper::service::{WallpaperService, WallpaperServiceDeps},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub wallpaper_service: Arc<WallpaperService>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let settings = Arc::new(WallpaperSettings::from_config(&config)?);

        let wallpaper_service = Self::create_wallpaper_service(&config, &settings);

        Ok(Self {
            config,
            wallpaper_service,
        })
    }

    fn create_wallpaper_service(
        config: &Config,
        settings: &Arc<WallpaperSettings>,
    ) -> Arc<WallpaperService> {
        let imaging: DynImagingPort = Arc::new(ImageRsImagingAdapter::new());
        let timeout_port: DynPipelineTimeoutPort = Arc::new(TokioPipelineTimeoutAdapter::new());

        let store: Option<DynWallpaperStorePort> = if settings.persist_results {
            Some(Arc::new(FsWallpaperStoreAdapter::new(
                &config.storage.output_dir,
            )))
        } else {
            None
        };

        WallpaperService::new(
            settings,
            WallpaperServiceDeps {
                imaging,
                timeout_port,
                store,
            },
        )
    }

    #[must_use]
    pub fn to_adapters_state(&self) -> AdaptersAppState {
        let wallpaper_use_case =
            Arc::clone(&self.wallpaper_service) as Arc<dyn WallpaperUseCase + Send + Sync>;
        AdaptersAppState::new(Arc::clone(&self.config), wallpaper_use_case)
    }
}
