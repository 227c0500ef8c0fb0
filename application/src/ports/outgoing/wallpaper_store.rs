use std::path::PathBuf;
use std::sync::Arc;

use crate::error::AppResult;
use domain::wallpaper::{ProcessedWallpaper, RequestId};

#[async_trait::async_trait]
pub trait WallpaperStorePort: Send + Sync {
    async fn save(&self, id: RequestId, wallpaper: &ProcessedWallpaper) -> AppResult<PathBuf>;
}

pub type DynWallpaperStorePort = Arc<dyn WallpaperStorePort>;
