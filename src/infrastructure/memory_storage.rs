// In-memory storage, nothing survives a restart
use crate::application::storage::BlobStorage;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    blobs: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobStorage for MemoryStorage {
    async fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.blobs.read().await.get(key).cloned())
    }

    async fn write(&self, key: &str, blob: &str) -> anyhow::Result<()> {
        self.blobs
            .write()
            .await
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }
}
