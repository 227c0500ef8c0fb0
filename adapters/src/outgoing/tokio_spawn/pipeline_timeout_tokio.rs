use std::time::Duration;
use tokio::{task::spawn_blocking, time::timeout};
use tracing::warn;

use wallforge_application::ports::outgoing::timeout::{
    PipelineFuture, PipelineJob, PipelineTimeoutPort, TimeoutError,
};

/// Runs pipeline jobs on tokio's blocking pool under a deadline.
///
/// An elapsed deadline only stops the wait; the blocking worker finishes its
/// job in the background and the result is dropped.
#[derive(Clone, Copy, Default)]
pub struct TokioPipelineTimeoutAdapter;

impl TokioPipelineTimeoutAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl PipelineTimeoutPort for TokioPipelineTimeoutAdapter {
    fn run_with_timeout(&self, job: PipelineJob, duration: Duration) -> PipelineFuture {
        Box::pin(async move {
            let task = spawn_blocking(job);

            match timeout(duration, task).await {
                Err(_) => {
                    warn!(timeout_secs = duration.as_secs_f64(), "Pipeline job exceeded deadline");
                    Err(TimeoutError::Elapsed)
                }
                Ok(Err(join_error)) => Err(TimeoutError::TaskFailed {
                    message: join_error.to_string(),
                }),
                Ok(Ok(result)) => Ok(result),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use domain::{
        options::OutputFormat,
        resolution::{Orientation, Resolution},
        wallpaper::ProcessedWallpaper,
    };

    fn wallpaper() -> ProcessedWallpaper {
        ProcessedWallpaper {
            bytes: vec![1, 2, 3],
            format: OutputFormat::Png,
            orientation: Orientation::Landscape,
            resolution: Resolution::new(1, 1),
        }
    }

    #[tokio::test]
    async fn returns_job_result_within_deadline() {
        let job: PipelineJob = Box::new(|| Ok(wallpaper()));

        let result = TokioPipelineTimeoutAdapter::new()
            .run_with_timeout(job, Duration::from_secs(5))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(result.bytes, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn reports_elapsed_deadline() {
        let job: PipelineJob = Box::new(|| {
            thread::sleep(Duration::from_millis(500));
            Ok(wallpaper())
        });

        let result = TokioPipelineTimeoutAdapter::new()
            .run_with_timeout(job, Duration::from_millis(20))
            .await;

        assert!(matches!(result, Err(TimeoutError::Elapsed)));
    }

    #[tokio::test]
    async fn reports_panicked_job_as_task_failure() {
        let job: PipelineJob = Box::new(|| panic!("boom"));

        let result = TokioPipelineTimeoutAdapter::new()
            .run_with_timeout(job, Duration::from_secs(5))
            .await;

        assert!(matches!(result, Err(TimeoutError::TaskFailed { .. })));
    }
}
