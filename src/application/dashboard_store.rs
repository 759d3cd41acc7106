// Dashboard store - Saved dashboards plus the one being edited
use crate::application::ids::IdGenerator;
use crate::application::storage::{BlobStorage, DASHBOARDS_KEY, load_collection, persist_collection};
use crate::domain::dashboard::{Dashboard, DashboardWidget};
use crate::domain::layout::{self, GridItem};
use chrono::Utc;
use std::sync::Arc;

/// The saved collection is written on `save` and `delete` only. The current
/// dashboard lives in memory until it is saved.
pub struct DashboardStore {
    storage: Arc<dyn BlobStorage>,
    dashboards: Vec<Dashboard>,
    current: Option<Dashboard>,
    ids: IdGenerator,
}

impl DashboardStore {
    pub async fn load(storage: Arc<dyn BlobStorage>) -> anyhow::Result<Self> {
        let dashboards: Vec<Dashboard> = load_collection(storage.as_ref(), DASHBOARDS_KEY).await?;
        tracing::info!("Loaded {} dashboards", dashboards.len());
        let ids = IdGenerator::after(dashboards.iter().map(|d| d.id.as_str()));

        Ok(Self {
            storage,
            dashboards,
            current: None,
            ids,
        })
    }

    pub fn dashboards(&self) -> &[Dashboard] {
        &self.dashboards
    }

    pub fn current(&self) -> Option<&Dashboard> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut Dashboard> {
        self.current.as_mut()
    }

    pub fn create(&mut self, name: &str) -> &mut Dashboard {
        let dashboard = new_dashboard(&mut self.ids, name);
        self.current.insert(dashboard)
    }

    /// The current dashboard, or a freshly created one named `name`
    pub fn current_or_create(&mut self, name: &str) -> &mut Dashboard {
        let ids = &mut self.ids;
        self.current.get_or_insert_with(|| new_dashboard(ids, name))
    }

    /// Make a copy of the saved dashboard `id` current. Unknown ids change nothing.
    pub fn load_dashboard(&mut self, id: &str) -> bool {
        match self.dashboards.iter().find(|d| d.id == id) {
            Some(dashboard) => {
                tracing::debug!(dashboard_id = %id, "Loaded dashboard");
                self.current = Some(dashboard.clone());
                true
            }
            None => {
                tracing::debug!(dashboard_id = %id, "Load of unknown dashboard ignored");
                false
            }
        }
    }

    pub fn rename(&mut self, name: &str) -> bool {
        match self.current.as_mut() {
            Some(dashboard) => {
                dashboard.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Replace the current dashboard's placements with the grid's layout
    pub fn update_layout(&mut self, items: Vec<GridItem>) -> Option<&[DashboardWidget]> {
        let dashboard = self.current.as_mut()?;
        Some(layout::apply_external_layout(dashboard, items))
    }

    /// Upsert the current dashboard into the saved collection and persist it.
    /// Returns false when nothing is being edited.
    pub async fn save(&mut self) -> anyhow::Result<bool> {
        let Some(current) = self.current.as_ref() else {
            tracing::debug!("Save without a current dashboard ignored");
            return Ok(false);
        };

        match self.dashboards.iter_mut().find(|d| d.id == current.id) {
            Some(saved) => *saved = current.clone(),
            None => self.dashboards.push(current.clone()),
        }

        tracing::info!(dashboard_id = %current.id, "Saved dashboard '{}'", current.name);
        self.persist().await?;
        Ok(true)
    }

    pub async fn delete(&mut self, id: &str) -> anyhow::Result<()> {
        tracing::info!(dashboard_id = %id, "Deleting dashboard");
        self.dashboards.retain(|d| d.id != id);
        if self.current().is_some_and(|d| d.id == id) {
            self.current = None;
        }

        self.persist().await
    }

    async fn persist(&self) -> anyhow::Result<()> {
        persist_collection(self.storage.as_ref(), DASHBOARDS_KEY, &self.dashboards).await
    }
}

fn new_dashboard(ids: &mut IdGenerator, name: &str) -> Dashboard {
    let now = Utc::now();
    let dashboard = Dashboard::new(ids.next_id(now), name.to_string(), now);
    tracing::debug!(dashboard_id = %dashboard.id, "Created dashboard '{}'", name);
    dashboard
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory_storage::MemoryStorage;
    use serde_json::json;

    async fn empty_store() -> (Arc<MemoryStorage>, DashboardStore) {
        let storage = Arc::new(MemoryStorage::new());
        let store = DashboardStore::load(storage.clone()).await.unwrap();
        (storage, store)
    }

    fn grid(value: serde_json::Value) -> Vec<GridItem> {
        serde_json::from_value(value).unwrap()
    }

    /// Reads nothing and refuses every write
    struct ReadOnlyStorage;

    #[async_trait::async_trait]
    impl BlobStorage for ReadOnlyStorage {
        async fn read(&self, _key: &str) -> anyhow::Result<Option<String>> {
            Ok(None)
        }

        async fn write(&self, key: &str, _blob: &str) -> anyhow::Result<()> {
            anyhow::bail!("storage is read-only, cannot write {}", key)
        }
    }

    #[tokio::test]
    async fn test_starts_without_current_dashboard() {
        let (_, store) = empty_store().await;
        assert!(store.current().is_none());
        assert!(store.dashboards().is_empty());
    }

    #[tokio::test]
    async fn test_create_does_not_persist() {
        let (storage, mut store) = empty_store().await;

        let created = store.create("Ops").clone();

        assert_eq!(created.name, "Ops");
        assert!(created.placements.is_empty());
        assert_eq!(store.current(), Some(&created));
        assert!(store.dashboards().is_empty());
        assert_eq!(storage.read(DASHBOARDS_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let (storage, mut store) = empty_store().await;
        let id = store.create("Sales").id.clone();
        store.update_layout(grid(json!([
            { "i": "w1", "x": 0, "y": 0, "w": 4, "h": 3 },
            { "i": "w2", "x": 4, "y": 0, "w": 8, "h": 5 }
        ])));
        assert!(store.save().await.unwrap());

        // Fresh process reading the same storage
        let mut reloaded = DashboardStore::load(storage).await.unwrap();
        assert!(reloaded.load_dashboard(&id));

        let current = reloaded.current().unwrap();
        assert_eq!(current.name, "Sales");
        assert_eq!(current.placements, store.current().unwrap().placements);
    }

    #[tokio::test]
    async fn test_save_replaces_existing_entry() {
        let (_, mut store) = empty_store().await;
        store.create("Draft");
        store.save().await.unwrap();

        store.rename("Final");
        store.save().await.unwrap();

        assert_eq!(store.dashboards().len(), 1);
        assert_eq!(store.dashboards()[0].name, "Final");
    }

    #[tokio::test]
    async fn test_save_without_current_is_noop() {
        let (storage, mut store) = empty_store().await;
        assert!(!store.save().await.unwrap());
        assert_eq!(storage.read(DASHBOARDS_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_load_unknown_keeps_state() {
        let (_, mut store) = empty_store().await;
        let current = store.create("Keep me").clone();

        assert!(!store.load_dashboard("nope"));
        assert_eq!(store.current(), Some(&current));
    }

    #[tokio::test]
    async fn test_loaded_dashboard_is_a_copy() {
        let (_, mut store) = empty_store().await;
        let id = store.create("Copy").id.clone();
        store.save().await.unwrap();

        store.load_dashboard(&id);
        store.rename("Edited but unsaved");

        assert_eq!(store.dashboards()[0].name, "Copy");
    }

    #[tokio::test]
    async fn test_delete_current_clears_it() {
        let (storage, mut store) = empty_store().await;
        let id = store.create("Doomed").id.clone();
        store.save().await.unwrap();

        store.delete(&id).await.unwrap();

        assert!(store.current().is_none());
        assert!(store.dashboards().is_empty());
        assert_eq!(storage.read(DASHBOARDS_KEY).await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_delete_current_clears_it_even_if_write_fails() {
        let mut store = DashboardStore::load(Arc::new(ReadOnlyStorage)).await.unwrap();
        let id = store.create("Doomed").id.clone();

        assert!(store.delete(&id).await.is_err());

        assert!(store.current().is_none());
    }

    #[tokio::test]
    async fn test_new_ids_follow_loaded_ones() {
        let storage = Arc::new(MemoryStorage::new());
        let ahead = Utc::now().timestamp_millis() + 60_000;
        storage
            .write(
                DASHBOARDS_KEY,
                &json!([{
                    "id": ahead.to_string(),
                    "name": "From the future",
                    "widgets": [],
                    "createdAt": "2024-01-01T00:00:00Z"
                }])
                .to_string(),
            )
            .await
            .unwrap();
        let mut store = DashboardStore::load(storage).await.unwrap();

        let id: i64 = store.create("Next").id.parse().unwrap();

        assert_eq!(id, ahead + 1);
    }

    #[tokio::test]
    async fn test_delete_other_keeps_current() {
        let (_, mut store) = empty_store().await;
        let other = store.create("Other").id.clone();
        store.save().await.unwrap();
        store.create("Mine");

        store.delete(&other).await.unwrap();
        store.delete(&other).await.unwrap();

        assert_eq!(store.current().map(|d| d.name.as_str()), Some("Mine"));
    }

    #[tokio::test]
    async fn test_layout_and_rename_need_current() {
        let (_, mut store) = empty_store().await;
        assert!(store.update_layout(Vec::new()).is_none());
        assert!(!store.rename("x"));

        let first = store.current_or_create("New Dashboard").id.clone();
        let second = store.current_or_create("Ignored").id.clone();
        assert_eq!(first, second);
        assert_eq!(store.current().unwrap().name, "New Dashboard");
    }
}
