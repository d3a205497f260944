use metrics_exporter_prometheus::PrometheusHandle;
use skill_tier::candidates::{InMemoryCandidateStore, RepositoryError};
use skill_tier::config::StoreConfig;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn build_store(config: &StoreConfig) -> Result<InMemoryCandidateStore, RepositoryError> {
    match &config.data_file {
        Some(path) => {
            let store = InMemoryCandidateStore::open(path)?;
            info!(path = %path.display(), "candidate store backed by snapshot file");
            Ok(store)
        }
        None => {
            info!("candidate store running in memory only");
            Ok(InMemoryCandidateStore::new())
        }
    }
}
