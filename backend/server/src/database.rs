//! # Redis
//!
//! Document store for the butterfly catalog.
//!
//! ## Requirements
//!
//! - Tiny dataset, a few hundred records at most
//! - Stable opaque ids, never reused after a delete
//! - List, count, insert, update by id, delete by id
//!
//! ## Implementation
//!
//! - Redis hash: 1 big key (`butterflies`), then id-document pairs
//! - Document: JSON of the record without its id, the hash field **is** the id
//! - Ids: `INCR butterflies:next_id`, so a deleted id is never handed out again
//! - Bulk insert reserves a block of ids with a single `INCRBY`, then one `HSET`
//! - Update is `HEXISTS` then `HSET`, last write wins
//! - No in-process caching, every call goes to Redis
use std::{collections::HashMap, time::Duration};

use async_trait::async_trait;
use redis::{
    AsyncCommands, Client,
    aio::{ConnectionManager, ConnectionManagerConfig},
};
use tracing::info;

use crate::{
    error::AppError,
    models::{Butterfly, NewButterfly},
    store::CatalogStore,
};

pub const CATALOG_KEY: &str = "butterflies";

pub async fn init_redis(redis_url: &str) -> Result<ConnectionManager, AppError> {
    let config = ConnectionManagerConfig::new()
        .set_number_of_retries(1)
        .set_connection_timeout(Duration::from_millis(500));

    let client = Client::open(redis_url)?;
    let connection_manager = client.get_connection_manager_with_config(config).await?;

    Ok(connection_manager)
}

#[derive(Clone)]
pub struct RedisStore {
    connection: ConnectionManager,
    catalog_key: String,
    next_id_key: String,
}

impl RedisStore {
    pub async fn connect(redis_url: &str) -> Result<Self, AppError> {
        let connection = init_redis(redis_url).await?;
        info!("Connected to Redis");

        Ok(Self::with_namespace(connection, CATALOG_KEY))
    }

    /// Hash lives at `namespace`, the id counter at `namespace:next_id`.
    pub fn with_namespace(connection: ConnectionManager, namespace: &str) -> Self {
        Self {
            connection,
            catalog_key: namespace.to_string(),
            next_id_key: format!("{namespace}:next_id"),
        }
    }
}

fn decode(id: String, document: &str) -> Result<Butterfly, AppError> {
    let record: NewButterfly = serde_json::from_str(document)?;

    Ok(record.with_id(id))
}

/// Numeric ids first in insertion order, anything foreign after.
fn sort_key(butterfly: &Butterfly) -> (bool, u64, String) {
    match butterfly.id.parse::<u64>() {
        Ok(n) => (false, n, String::new()),
        Err(_) => (true, 0, butterfly.id.clone()),
    }
}

#[async_trait]
impl CatalogStore for RedisStore {
    async fn list(&self, limit: usize) -> Result<Vec<Butterfly>, AppError> {
        let mut connection = self.connection.clone();
        let documents: HashMap<String, String> = connection.hgetall(&self.catalog_key).await?;

        let mut butterflies = documents
            .into_iter()
            .map(|(id, document)| decode(id, &document))
            .collect::<Result<Vec<_>, _>>()?;

        butterflies.sort_by_key(sort_key);
        butterflies.truncate(limit);

        Ok(butterflies)
    }

    async fn count(&self) -> Result<usize, AppError> {
        let mut connection = self.connection.clone();
        let count: usize = connection.hlen(&self.catalog_key).await?;

        Ok(count)
    }

    async fn insert_many(&self, records: Vec<NewButterfly>) -> Result<Vec<String>, AppError> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        for record in &records {
            record.validate()?;
        }

        let mut connection = self.connection.clone();
        let last_id: u64 = connection.incr(&self.next_id_key, records.len()).await?;
        let first_id = last_id + 1 - records.len() as u64;

        let mut ids = Vec::with_capacity(records.len());
        let mut items = Vec::with_capacity(records.len());

        for (offset, record) in records.iter().enumerate() {
            let id = (first_id + offset as u64).to_string();
            items.push((id.clone(), serde_json::to_string(record)?));
            ids.push(id);
        }

        let _: () = connection.hset_multiple(&self.catalog_key, &items).await?;

        Ok(ids)
    }

    async fn insert_one(&self, record: NewButterfly) -> Result<Butterfly, AppError> {
        record.validate()?;

        let mut connection = self.connection.clone();
        let id: u64 = connection.incr(&self.next_id_key, 1).await?;
        let id = id.to_string();

        let _: () = connection
            .hset(&self.catalog_key, &id, serde_json::to_string(&record)?)
            .await?;

        Ok(record.with_id(id))
    }

    async fn update_by_id(&self, id: &str, record: NewButterfly) -> Result<Butterfly, AppError> {
        record.validate()?;

        let mut connection = self.connection.clone();
        let exists: bool = connection.hexists(&self.catalog_key, id).await?;

        if !exists {
            return Err(AppError::NotFound(id.to_string()));
        }

        let _: () = connection
            .hset(&self.catalog_key, id, serde_json::to_string(&record)?)
            .await?;

        Ok(record.with_id(id))
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), AppError> {
        let mut connection = self.connection.clone();
        let removed: usize = connection.hdel(&self.catalog_key, id).await?;

        if removed == 0 {
            return Err(AppError::NotFound(id.to_string()));
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}
