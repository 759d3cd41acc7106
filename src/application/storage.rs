// Storage port for persisted collections
use anyhow::Context;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Key holding the JSON widget catalog
pub const WIDGETS_KEY: &str = "widgets";
/// Key holding the JSON list of saved dashboards
pub const DASHBOARDS_KEY: &str = "dashboards";

#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Read the blob stored under `key`, `None` if it was never written
    async fn read(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Replace the blob stored under `key`
    async fn write(&self, key: &str, blob: &str) -> anyhow::Result<()>;
}

/// Load a whole collection. A missing key is an empty collection.
pub async fn load_collection<T: DeserializeOwned>(
    storage: &dyn BlobStorage,
    key: &str,
) -> anyhow::Result<Vec<T>> {
    match storage.read(key).await? {
        Some(blob) => serde_json::from_str(&blob)
            .with_context(|| format!("Failed to parse stored collection '{}'", key)),
        None => Ok(Vec::new()),
    }
}

/// Rewrite a whole collection
pub async fn persist_collection<T: Serialize>(
    storage: &dyn BlobStorage,
    key: &str,
    items: &[T],
) -> anyhow::Result<()> {
    let blob = serde_json::to_string(items)
        .with_context(|| format!("Failed to serialize collection '{}'", key))?;
    storage.write(key, &blob).await
}
