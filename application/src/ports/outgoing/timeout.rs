use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::error::AppResult;
use domain::wallpaper::ProcessedWallpaper;

pub type PipelineJob = Box<dyn FnOnce() -> AppResult<ProcessedWallpaper> + Send + 'static>;

pub type PipelineFuture = Pin<
    Box<dyn Future<Output = Result<AppResult<ProcessedWallpaper>, TimeoutError>> + Send + 'static>,
>;

#[derive(Debug)]
pub enum TimeoutError {
    Elapsed,
    TaskFailed { message: String },
}

pub trait PipelineTimeoutPort: Send + Sync {
    /// Runs the job on a blocking worker and gives up waiting after `duration`.
    fn run_with_timeout(&self, job: PipelineJob, duration: Duration) -> PipelineFuture;
}

pub type DynPipelineTimeoutPort = Arc<dyn PipelineTimeoutPort>;
