use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, instrument};

use domain::wallpaper::{ProcessedWallpaper, RequestId};
use wallforge_application::{
    error::{AppError, AppResult},
    ports::outgoing::wallpaper_store::WallpaperStorePort,
};

/// Writes each result to `<output_dir>/<request-id>.<ext>`.
pub struct FsWallpaperStoreAdapter {
    output_dir: PathBuf,
}

impl FsWallpaperStoreAdapter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn path_for(&self, id: RequestId, wallpaper: &ProcessedWallpaper) -> PathBuf {
        self.output_dir
            .join(format!("{id}.{}", wallpaper.format.extension()))
    }
}

fn storage_error(action: &str, path: &Path, error: &io::Error) -> AppError {
    AppError::StorageError {
        message: format!("Failed to {action} {}: {error}", path.display()),
    }
}

#[async_trait::async_trait]
impl WallpaperStorePort for FsWallpaperStoreAdapter {
    #[instrument(skip(self, wallpaper), fields(output_bytes = wallpaper.bytes.len()))]
    async fn save(&self, id: RequestId, wallpaper: &ProcessedWallpaper) -> AppResult<PathBuf> {
        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| storage_error("create", &self.output_dir, &e))?;

        let path = self.path_for(id, wallpaper);
        let temp_path = path.with_extension(format!("{}.tmp", wallpaper.format.extension()));

        fs::write(&temp_path, &wallpaper.bytes)
            .await
            .map_err(|e| storage_error("write", &temp_path, &e))?;

        if let Err(e) = fs::rename(&temp_path, &path).await {
            fs::remove_file(&temp_path).await.ok();
            return Err(storage_error("move into place", &path, &e));
        }

        debug!(path = %path.display(), "Wallpaper written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{
        options::OutputFormat,
        resolution::{Orientation, Resolution},
    };
    use std::fs as blocking_fs;
    use tempfile::tempdir;

    fn wallpaper(format: OutputFormat) -> ProcessedWallpaper {
        ProcessedWallpaper {
            bytes: b"encoded".to_vec(),
            format,
            orientation: Orientation::Portrait,
            resolution: Resolution::new(1080, 1920),
        }
    }

    #[tokio::test]
    async fn writes_file_named_after_request() {
        let dir = tempdir().unwrap();
        let store = FsWallpaperStoreAdapter::new(dir.path().join("processed"));
        let id = RequestId::new();

        let path = store.save(id, &wallpaper(OutputFormat::Jpeg)).await.unwrap();

        assert_eq!(path, dir.path().join("processed").join(format!("{id}.jpeg")));
        assert_eq!(blocking_fs::read(&path).unwrap(), b"encoded");
    }

    #[tokio::test]
    async fn concurrent_requests_do_not_collide() {
        let dir = tempdir().unwrap();
        let store = FsWallpaperStoreAdapter::new(dir.path());

        let first_wallpaper = wallpaper(OutputFormat::Png);
        let second_wallpaper = wallpaper(OutputFormat::Png);
        let first = store.save(RequestId::new(), &first_wallpaper);
        let second = store.save(RequestId::new(), &second_wallpaper);
        let (first, second) = tokio::join!(first, second);

        assert_ne!(first.unwrap(), second.unwrap());
        let entries = blocking_fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 2);
    }

    #[tokio::test]
    async fn unwritable_directory_is_a_storage_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        blocking_fs::write(&blocker, b"x").unwrap();
        let store = FsWallpaperStoreAdapter::new(&blocker);

        let err = store
            .save(RequestId::new(), &wallpaper(OutputFormat::Png))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::StorageError { .. }));
    }
}
