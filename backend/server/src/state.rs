use std::sync::Arc;

use tracing::info;

use super::{
    config::{Config, StoreBackend},
    database::RedisStore,
    error::AppError,
    store::{CatalogStore, MemoryStore},
};

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn CatalogStore>,
}

impl AppState {
    pub async fn new(config: Config) -> Result<Arc<Self>, AppError> {
        let store: Arc<dyn CatalogStore> = match config.store_backend {
            StoreBackend::Redis => Arc::new(RedisStore::connect(&config.redis_url).await?),
            StoreBackend::Memory => Arc::new(MemoryStore::new()),
        };

        info!("Using {} catalog store", store.name());

        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: Config, store: Arc<dyn CatalogStore>) -> Arc<Self> {
        Arc::new(Self { config, store })
    }
}
