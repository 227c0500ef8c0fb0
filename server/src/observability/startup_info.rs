use tracing::info;
use wallforge_application::infrastructure_config::{Config, PipelineConfig, StorageConfig};

const BYTES_PER_MIB: usize = 1024 * 1024;

pub fn print_api_info(config: &Config) {
    print_api_endpoints_info(config);
    print_configuration_info(config);
}

fn print_api_endpoints_info(config: &Config) {
    let base_url = format!("http://{}", config.server_address());
    info!("📋 API:");
    info!("  🖼️  Upload: POST {}/upload", base_url);
    info!("  💡 Suggestions: POST {}/suggestions", base_url);
    info!("  ❤️  Health: GET {}/health", base_url);
    if cfg!(feature = "docs") {
        info!("  📖 Swagger UI: {}/docs", base_url);
        info!("  📄 OpenAPI JSON: {}/api-docs/openapi.json", base_url);
    }
}

fn print_configuration_info(config: &Config) {
    info!("⚙️  Configuration:");
    print_pipeline_configuration(&config.pipeline);
    print_upload_configuration(config.upload.max_upload_bytes);
    print_storage_configuration(&config.storage);
}

fn print_pipeline_configuration(pipeline: &PipelineConfig) {
    info!(
        "  📐 Targets: landscape {}, portrait {}",
        pipeline.landscape_resolution, pipeline.portrait_resolution
    );
    info!(
        "  🎨 Default filters: blur={}, brightness={}%, contrast={}%, grayscale={}",
        pipeline.apply_blur, pipeline.brightness, pipeline.contrast, pipeline.grayscale
    );
    info!(
        "  📦 Output: {}, timeout {}s",
        pipeline.output_format, pipeline.processing_timeout_secs
    );
}

fn print_upload_configuration(max_upload_bytes: usize) {
    if max_upload_bytes % BYTES_PER_MIB == 0 {
        info!("  📥 Upload limit: {} MiB", max_upload_bytes / BYTES_PER_MIB);
    } else {
        info!("  📥 Upload limit: {} bytes", max_upload_bytes);
    }
}

fn print_storage_configuration(storage: &StorageConfig) {
    if storage.enabled {
        info!("  💾 Result storage: ENABLED ({})", storage.output_dir);
    } else {
        info!("  💾 Result storage: DISABLED");
    }
}
