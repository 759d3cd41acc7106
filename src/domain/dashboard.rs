// Dashboard domain model
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placement of a catalog widget on the grid. `i` is the widget id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardWidget {
    pub i: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl DashboardWidget {
    pub fn new(i: String, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { i, x, y, w, h }
    }

    /// First row below this placement, clamped to `u32::MAX`
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    /// First column right of this placement, clamped to `u32::MAX`
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub id: String,
    pub name: String,
    #[serde(rename = "widgets", default)]
    pub placements: Vec<DashboardWidget>,
    pub created_at: DateTime<Utc>,
}

impl Dashboard {
    pub fn new(id: String, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            placements: Vec::new(),
            created_at,
        }
    }

    pub fn contains_widget(&self, widget_id: &str) -> bool {
        self.placements.iter().any(|p| p.i == widget_id)
    }
}
