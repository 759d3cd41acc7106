// Builder service - Use cases behind the dashboard builder and widget management screens
use crate::application::dashboard_store::DashboardStore;
use crate::application::storage::BlobStorage;
use crate::application::widget_catalog::WidgetCatalog;
use crate::domain::chart::ChartConfig;
use crate::domain::dashboard::{Dashboard, DashboardWidget};
use crate::domain::layout::{self, GridItem, LayoutError, ResolvedPlacement};
use crate::domain::preview::ChartPreview;
use crate::domain::widget::Widget;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Name given to the dashboard the builder opens when nothing is being edited
pub const DEFAULT_DASHBOARD_NAME: &str = "New Dashboard";

#[derive(Debug, Error)]
pub enum BuilderError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("widget {0} not found")]
    WidgetNotFound(String),
}

/// What the builder canvas shows: the dashboard and the placements that still
/// point at a catalog widget
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderView {
    pub dashboard: Dashboard,
    pub widgets: Vec<ResolvedPlacement>,
}

pub struct BuilderService {
    catalog: WidgetCatalog,
    dashboards: DashboardStore,
}

impl BuilderService {
    pub fn new(catalog: WidgetCatalog, dashboards: DashboardStore) -> Self {
        Self {
            catalog,
            dashboards,
        }
    }

    /// Load both collections from the same storage
    pub async fn load(storage: Arc<dyn BlobStorage>) -> anyhow::Result<Self> {
        let catalog = WidgetCatalog::load(storage.clone()).await?;
        let dashboards = DashboardStore::load(storage).await?;
        Ok(Self::new(catalog, dashboards))
    }

    pub fn catalog(&self) -> &WidgetCatalog {
        &self.catalog
    }

    pub fn dashboards(&self) -> &DashboardStore {
        &self.dashboards
    }

    // Widget management

    pub async fn create_widget(&mut self, config: ChartConfig) -> anyhow::Result<Widget> {
        self.catalog.create(config).await
    }

    /// Replace a widget's config, keeping its id and creation time
    pub async fn edit_widget(
        &mut self,
        id: &str,
        config: ChartConfig,
    ) -> anyhow::Result<Option<Widget>> {
        let Some(existing) = self.catalog.get(id) else {
            return Ok(None);
        };

        let edited = existing.with_config(config);
        self.catalog.update(edited.clone()).await?;
        Ok(Some(edited))
    }

    /// Placements pointing at the widget are left alone and skipped when resolved
    pub async fn delete_widget(&mut self, id: &str) -> anyhow::Result<()> {
        self.catalog.delete(id).await
    }

    pub fn preview_widget(&self, id: &str) -> Option<ChartPreview> {
        self.catalog.get(id).map(|w| ChartPreview::build(&w.config))
    }

    // Dashboard list

    pub fn new_dashboard(&mut self, name: &str) -> Dashboard {
        self.dashboards.create(name).clone()
    }

    pub fn open_dashboard(&mut self, id: &str) -> bool {
        self.dashboards.load_dashboard(id)
    }

    pub async fn delete_dashboard(&mut self, id: &str) -> anyhow::Result<()> {
        self.dashboards.delete(id).await
    }

    pub async fn save_dashboard(&mut self) -> anyhow::Result<bool> {
        self.dashboards.save().await
    }

    pub fn rename_dashboard(&mut self, name: &str) -> bool {
        self.dashboards.rename(name)
    }

    // Builder canvas

    /// Place a catalog widget at the next free grid slot of the current dashboard
    pub fn add_widget(&mut self, widget_id: &str) -> Result<DashboardWidget, BuilderError> {
        if self.catalog.get(widget_id).is_none() {
            return Err(BuilderError::WidgetNotFound(widget_id.to_string()));
        }

        let dashboard = self.dashboards.current_or_create(DEFAULT_DASHBOARD_NAME);
        match layout::add_placement(dashboard, widget_id) {
            Ok(placement) => {
                tracing::info!(
                    "Placed widget {} at ({}, {}) on dashboard {}",
                    widget_id,
                    placement.x,
                    placement.y,
                    dashboard.id
                );
                Ok(placement)
            }
            Err(e) => {
                tracing::warn!("Rejected widget placement: {}", e);
                Err(e.into())
            }
        }
    }

    pub fn remove_widget(&mut self, widget_id: &str) -> Vec<DashboardWidget> {
        self.dashboards
            .current_mut()
            .map(|dashboard| layout::remove_placement(dashboard, widget_id).to_vec())
            .unwrap_or_default()
    }

    pub fn apply_layout(&mut self, items: Vec<GridItem>) -> Vec<DashboardWidget> {
        self.dashboards
            .update_layout(items)
            .map(<[DashboardWidget]>::to_vec)
            .unwrap_or_default()
    }

    pub fn view(&mut self) -> BuilderView {
        let dashboard = self.dashboards.current_or_create(DEFAULT_DASHBOARD_NAME);
        let widgets = layout::resolve_placements(dashboard, self.catalog.widgets());

        BuilderView {
            dashboard: dashboard.clone(),
            widgets,
        }
    }
}
