use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;
use univera::config::DirectoryConfig;
use univera::directory::InMemoryDirectory;
use univera::error::AppError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Directory backing both the HTTP service and the search subcommands.
pub(crate) fn build_directory(config: &DirectoryConfig) -> Result<InMemoryDirectory, AppError> {
    let directory = match &config.data_path {
        Some(path) => {
            info!(path = %path.display(), "loading directory snapshot");
            InMemoryDirectory::from_path(path)?
        }
        None => InMemoryDirectory::seeded(),
    };
    Ok(directory.with_latency(config.load_latency()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use univera::directory::{DirectoryProvider, ProviderError};

    #[tokio::test]
    async fn falls_back_to_seed_without_data_path() {
        let directory = build_directory(&DirectoryConfig::default()).expect("seeded directory");
        let colleges = directory.load_colleges().await.expect("colleges load");
        assert_eq!(colleges.len(), 4);
    }

    #[test]
    fn missing_snapshot_file_is_reported() {
        let config = DirectoryConfig {
            data_path: Some(PathBuf::from("/nonexistent/univera-directory.json")),
            load_latency_ms: 0,
        };
        let err = build_directory(&config).expect_err("missing file");
        assert!(matches!(
            err,
            AppError::Directory(ProviderError::Read { .. })
        ));
    }
}
