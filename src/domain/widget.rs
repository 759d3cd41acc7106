// Widget domain model
use super::chart::ChartConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub id: String,
    pub config: ChartConfig,
    pub created_at: DateTime<Utc>,
}

impl Widget {
    pub fn new(id: String, config: ChartConfig, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            config,
            created_at,
        }
    }

    /// Same identity and timestamp, new config
    pub fn with_config(&self, config: ChartConfig) -> Self {
        Self {
            id: self.id.clone(),
            config,
            created_at: self.created_at,
        }
    }
}
