// Layout engine - Placement of widgets on the dashboard grid
use super::dashboard::{Dashboard, DashboardWidget};
use super::widget::Widget;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

pub const GRID_COLUMNS: u32 = 12;
pub const DEFAULT_WIDTH: u32 = 4;
pub const DEFAULT_HEIGHT: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridPosition {
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("widget {0} already exists in dashboard")]
    DuplicateWidget(String),
}

/// Layout item as reported by the drag/resize grid after an interaction.
/// Anything besides the geometry (`moved`, `static`, `minW`, ...) lands in `extra`.
#[derive(Debug, Clone, Deserialize)]
pub struct GridItem {
    pub i: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    #[allow(dead_code)]
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<GridItem> for DashboardWidget {
    fn from(item: GridItem) -> Self {
        DashboardWidget::new(item.i, item.x, item.y, item.w, item.h)
    }
}

/// A placement joined with the widget it points at
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPlacement {
    pub placement: DashboardWidget,
    pub widget: Widget,
}

/// Whether a default-sized footprint at (x, y) intersects `item`
fn collides(x: u32, y: u32, item: &DashboardWidget) -> bool {
    !(x.saturating_add(DEFAULT_WIDTH) <= item.x
        || x >= item.right()
        || y.saturating_add(DEFAULT_HEIGHT) <= item.y
        || y >= item.bottom())
}

/// First origin, scanning rows top to bottom and columns left to right,
/// where a 4x3 widget fits without touching any existing placement.
///
/// A row can only become free where some placement ends, so the scan visits
/// row 0 and each placement's bottom edge instead of every row up to `maxY`.
pub fn next_free_position(placements: &[DashboardWidget]) -> GridPosition {
    let max_y = placements.iter().map(DashboardWidget::bottom).max().unwrap_or(0);

    let mut rows: Vec<u32> = placements.iter().map(DashboardWidget::bottom).collect();
    rows.push(0);
    rows.sort_unstable();
    rows.dedup();

    for y in rows {
        for x in 0..=GRID_COLUMNS - DEFAULT_WIDTH {
            if !placements.iter().any(|item| collides(x, y, item)) {
                return GridPosition { x, y };
            }
        }
    }

    // Nothing free in the scanned region, open a new row
    GridPosition { x: 0, y: max_y }
}

pub fn add_placement(
    dashboard: &mut Dashboard,
    widget_id: &str,
) -> Result<DashboardWidget, LayoutError> {
    if dashboard.contains_widget(widget_id) {
        return Err(LayoutError::DuplicateWidget(widget_id.to_string()));
    }

    let GridPosition { x, y } = next_free_position(&dashboard.placements);
    let placement = DashboardWidget::new(widget_id.to_string(), x, y, DEFAULT_WIDTH, DEFAULT_HEIGHT);
    dashboard.placements.push(placement.clone());

    Ok(placement)
}

/// Canonical placements for a grid-reported layout
pub fn normalize_layout(items: Vec<GridItem>) -> Vec<DashboardWidget> {
    items.into_iter().map(DashboardWidget::from).collect()
}

/// Replace the dashboard's placements wholesale with the grid's view
pub fn apply_external_layout(dashboard: &mut Dashboard, items: Vec<GridItem>) -> &[DashboardWidget] {
    dashboard.placements = normalize_layout(items);
    &dashboard.placements
}

pub fn remove_placement<'a>(dashboard: &'a mut Dashboard, widget_id: &str) -> &'a [DashboardWidget] {
    dashboard.placements.retain(|p| p.i != widget_id);
    &dashboard.placements
}

/// Join placements to catalog widgets, skipping placements whose widget is gone
pub fn resolve_placements(dashboard: &Dashboard, catalog: &[Widget]) -> Vec<ResolvedPlacement> {
    dashboard
        .placements
        .iter()
        .filter_map(|placement| {
            catalog
                .iter()
                .find(|w| w.id == placement.i)
                .map(|widget| ResolvedPlacement {
                    placement: placement.clone(),
                    widget: widget.clone(),
                })
        })
        .collect()
}
