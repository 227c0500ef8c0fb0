pub mod pipeline_timeout_tokio;
