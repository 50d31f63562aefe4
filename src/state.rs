use std::sync::Arc;

use crate::clients::gemini::GeminiClient;
use crate::config::Config;
use crate::db::Store;
use crate::services::DocumentService;

/// Build a shared HTTP client with an explicit timeout. The generation
/// round-trip has no retry, so the transport timeout is the only bound on
/// how long one interaction can stall.
fn build_shared_http_client(timeout_seconds: u64) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_seconds))
        .user_agent("LexGT/1.0")
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build shared HTTP client: {e}"))
}

#[derive(Clone)]
pub struct SharedState {
    pub config: Config,

    pub store: Store,

    pub gemini: Arc<GeminiClient>,

    pub documents: Arc<DocumentService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        let http_client = build_shared_http_client(config.generator.request_timeout_seconds)?;

        let gemini = Arc::new(GeminiClient::new(
            http_client,
            config.generator.base_url.clone(),
            config.generator.model.clone(),
            config.generator.api_key.clone(),
        ));

        let documents = Arc::new(DocumentService::new(
            gemini.clone(),
            config.documents.layout,
        ));

        Ok(Self {
            config,
            store,
            gemini,
            documents,
        })
    }
}
