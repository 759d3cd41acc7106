// Chart configuration domain model
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Palette used when a config is created from scratch or carries no colors
pub const DEFAULT_PALETTE: [&str; 5] = ["#8b5cf6", "#3b82f6", "#10b981", "#f59e0b", "#ef4444"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
    Pie,
    Area,
    Scatter,
}

impl ChartType {
    pub fn display_name(&self) -> &'static str {
        match self {
            ChartType::Bar => "Bar Chart",
            ChartType::Line => "Line Chart",
            ChartType::Pie => "Pie Chart",
            ChartType::Area => "Area Chart",
            ChartType::Scatter => "Scatter Chart",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub x_axis: String,
    pub y_axis: String,
    pub chart_type: ChartType,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub show_legend: bool,
    pub show_grid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_label: Option<String>,
    #[serde(default)]
    pub color_palette: Vec<String>,
    /// Free-form renderer settings, stored and returned untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_series_settings: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip_settings: Option<Value>,
}

impl ChartConfig {
    /// Color at `index`, cycling through the palette
    pub fn color_at(&self, index: usize) -> String {
        if self.color_palette.is_empty() {
            DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()].to_string()
        } else {
            self.color_palette[index % self.color_palette.len()].clone()
        }
    }

    pub fn primary_color(&self) -> String {
        self.color_at(0)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            x_axis: "Category".to_string(),
            y_axis: "Value".to_string(),
            chart_type: ChartType::Bar,
            title: "New Chart".to_string(),
            subtitle: None,
            show_legend: true,
            show_grid: true,
            x_axis_label: None,
            y_axis_label: None,
            color_palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            data_series_settings: None,
            tooltip_settings: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_uses_camel_case_and_keeps_opaque_settings() {
        let raw = json!({
            "xAxis": "Month",
            "yAxis": "Sales",
            "chartType": "pie",
            "title": "Revenue",
            "showLegend": false,
            "showGrid": true,
            "colorPalette": ["#111111"],
            "tooltipSettings": { "shared": true, "formatter": ["a", 1] }
        });

        let config: ChartConfig = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(config.chart_type, ChartType::Pie);
        assert_eq!(config.subtitle, None);
        assert_eq!(
            config.tooltip_settings,
            Some(json!({ "shared": true, "formatter": ["a", 1] }))
        );

        assert_eq!(serde_json::to_value(&config).unwrap(), raw);
    }

    #[test]
    fn test_unknown_chart_type_is_rejected() {
        let result = serde_json::from_value::<ChartType>(json!("radar"));
        assert!(result.is_err());
    }

    #[test]
    fn test_color_at_cycles_and_falls_back() {
        let mut config = ChartConfig {
            color_palette: vec!["red".to_string(), "blue".to_string()],
            ..ChartConfig::default()
        };
        assert_eq!(config.color_at(0), "red");
        assert_eq!(config.color_at(3), "blue");

        config.color_palette.clear();
        assert_eq!(config.primary_color(), DEFAULT_PALETTE[0]);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(ChartType::Scatter.display_name(), "Scatter Chart");
    }
}
