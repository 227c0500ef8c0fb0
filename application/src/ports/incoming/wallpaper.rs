use crate::{config::WallpaperSettings, error::AppResult};
use domain::{
    options::ProcessingOptions,
    suggestion::SettingsSuggestion,
    wallpaper::{ProcessedWallpaper, ProcessingRequest},
};

#[async_trait::async_trait]
pub trait WallpaperUseCase: Send + Sync {
    async fn create_wallpaper(&self, request: ProcessingRequest) -> AppResult<ProcessedWallpaper>;

    async fn suggest_settings(&self, image: Vec<u8>) -> AppResult<SettingsSuggestion>;

    fn default_options(&self) -> ProcessingOptions;

    fn settings(&self) -> &WallpaperSettings;
}
