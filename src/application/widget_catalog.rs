// Widget catalog - Persisted set of widget definitions
use crate::application::ids::IdGenerator;
use crate::application::storage::{BlobStorage, WIDGETS_KEY, load_collection, persist_collection};
use crate::domain::chart::ChartConfig;
use crate::domain::widget::Widget;
use chrono::Utc;
use std::sync::Arc;

pub struct WidgetCatalog {
    storage: Arc<dyn BlobStorage>,
    widgets: Vec<Widget>,
    ids: IdGenerator,
}

impl WidgetCatalog {
    /// Read the catalog from storage
    pub async fn load(storage: Arc<dyn BlobStorage>) -> anyhow::Result<Self> {
        let widgets: Vec<Widget> = load_collection(storage.as_ref(), WIDGETS_KEY).await?;
        tracing::info!("Loaded {} widgets", widgets.len());
        let ids = IdGenerator::after(widgets.iter().map(|w| w.id.as_str()));

        Ok(Self {
            storage,
            widgets,
            ids,
        })
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn get(&self, id: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    /// Allocate an id and timestamp for `config` and add it
    pub async fn create(&mut self, config: ChartConfig) -> anyhow::Result<Widget> {
        let now = Utc::now();
        let widget = Widget::new(self.ids.next_id(now), config, now);
        self.add(widget.clone()).await?;
        Ok(widget)
    }

    pub async fn add(&mut self, widget: Widget) -> anyhow::Result<()> {
        tracing::info!(widget_id = %widget.id, "Adding widget");
        self.widgets.push(widget);
        self.persist().await
    }

    /// Replace the widget with the same id. Returns false, without writing, if there is none.
    pub async fn update(&mut self, widget: Widget) -> anyhow::Result<bool> {
        let Some(slot) = self.widgets.iter_mut().find(|w| w.id == widget.id) else {
            tracing::debug!(widget_id = %widget.id, "Update of unknown widget ignored");
            return Ok(false);
        };

        tracing::info!(widget_id = %widget.id, "Updating widget");
        *slot = widget;
        self.persist().await?;
        Ok(true)
    }

    pub async fn delete(&mut self, id: &str) -> anyhow::Result<()> {
        tracing::info!(widget_id = %id, "Deleting widget");
        self.widgets.retain(|w| w.id != id);
        self.persist().await
    }

    async fn persist(&self) -> anyhow::Result<()> {
        persist_collection(self.storage.as_ref(), WIDGETS_KEY, &self.widgets).await
    }
}
