use std::sync::Arc;

use wallforge_application::{
    infrastructure_config::Config, ports::incoming::wallpaper::WallpaperUseCase,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub wallpaper_use_case: Arc<dyn WallpaperUseCase + Send + Sync>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        wallpaper_use_case: Arc<dyn WallpaperUseCase + Send + Sync>,
    ) -> Self {
        Self {
            config,
            wallpaper_use_case,
        }
    }
}
