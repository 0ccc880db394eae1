//! Catalog store seam.
//!
//! Handlers only ever see `Arc<dyn CatalogStore>`. Production uses the Redis
//! hash in [`crate::database`], tests and `STORE_BACKEND=memory` use
//! [`MemoryStore`].

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::AppError,
    models::{Butterfly, NewButterfly},
};

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Up to `limit` records, store-defined order.
    async fn list(&self, limit: usize) -> Result<Vec<Butterfly>, AppError>;

    /// The whole catalog.
    async fn list_all(&self) -> Result<Vec<Butterfly>, AppError> {
        self.list(usize::MAX).await
    }

    async fn count(&self) -> Result<usize, AppError>;

    /// Best-effort bulk write, returns the assigned ids. Not rolled back on partial failure.
    async fn insert_many(&self, records: Vec<NewButterfly>) -> Result<Vec<String>, AppError>;

    async fn insert_one(&self, record: NewButterfly) -> Result<Butterfly, AppError>;

    /// Replaces every non-id field.
    async fn update_by_id(&self, id: &str, record: NewButterfly) -> Result<Butterfly, AppError>;

    async fn delete_by_id(&self, id: &str) -> Result<(), AppError>;

    fn name(&self) -> &'static str;
}

#[derive(Default)]
struct Catalog {
    next_id: u64,
    records: BTreeMap<u64, NewButterfly>,
}

impl Catalog {
    fn assign(&mut self, record: NewButterfly) -> u64 {
        self.next_id += 1;
        self.records.insert(self.next_id, record);
        self.next_id
    }
}

#[derive(Default)]
pub struct MemoryStore {
    catalog: RwLock<Catalog>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Only the canonical decimal form names a record, so `007` and `+7` miss like in Redis.
fn parse_id(id: &str) -> Result<u64, AppError> {
    id.parse::<u64>()
        .ok()
        .filter(|key| key.to_string() == id)
        .ok_or_else(|| AppError::NotFound(id.to_string()))
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn list(&self, limit: usize) -> Result<Vec<Butterfly>, AppError> {
        let catalog = self.catalog.read().await;

        Ok(catalog
            .records
            .iter()
            .take(limit)
            .map(|(id, record)| record.clone().with_id(id.to_string()))
            .collect())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.catalog.read().await.records.len())
    }

    async fn insert_many(&self, records: Vec<NewButterfly>) -> Result<Vec<String>, AppError> {
        let mut catalog = self.catalog.write().await;
        let mut ids = Vec::with_capacity(records.len());

        for record in records {
            record.validate()?;
            ids.push(catalog.assign(record).to_string());
        }

        Ok(ids)
    }

    async fn insert_one(&self, record: NewButterfly) -> Result<Butterfly, AppError> {
        record.validate()?;

        let id = self.catalog.write().await.assign(record.clone());

        Ok(record.with_id(id.to_string()))
    }

    async fn update_by_id(&self, id: &str, record: NewButterfly) -> Result<Butterfly, AppError> {
        record.validate()?;

        let key = parse_id(id)?;
        let mut catalog = self.catalog.write().await;

        match catalog.records.get_mut(&key) {
            Some(existing) => {
                *existing = record.clone();
                Ok(record.with_id(id))
            }
            None => Err(AppError::NotFound(id.to_string())),
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), AppError> {
        let key = parse_id(id)?;

        self.catalog
            .write()
            .await
            .records
            .remove(&key)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}


#[cfg(test)]
mod tests {
    use super::{MemoryStore, contract};

    #[tokio::test]
    async fn test_insert_and_list() {
        contract::insert_and_list(&MemoryStore::new()).await;
    }

    #[tokio::test]
    async fn test_insert_many_distinct_ids() {
        contract::insert_many_distinct_ids(&MemoryStore::new()).await;
    }

    #[tokio::test]
    async fn test_list_limit() {
        contract::list_limit(&MemoryStore::new()).await;
    }

    #[tokio::test]
    async fn test_list_all_past_a_hundred() {
        contract::list_all_past_a_hundred(&MemoryStore::new()).await;
    }

    #[tokio::test]
    async fn test_update_replaces_fields_keeps_id() {
        contract::update_replaces_fields_keeps_id(&MemoryStore::new()).await;
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        contract::update_unknown_id(&MemoryStore::new()).await;
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        contract::delete_then_delete_again(&MemoryStore::new()).await;
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        contract::ids_not_reused_after_delete(&MemoryStore::new()).await;
    }

    #[tokio::test]
    async fn test_rejects_blank_fields() {
        contract::rejects_blank_fields(&MemoryStore::new()).await;
    }

    #[tokio::test]
    async fn test_non_canonical_id_not_found() {
        contract::non_canonical_id_not_found(&MemoryStore::new()).await;
    }
}
