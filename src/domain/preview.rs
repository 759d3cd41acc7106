// Chart preview - Render model for a widget over static sample data
use super::chart::{ChartConfig, ChartType};
use serde::Serialize;

/// Sample series every widget is previewed with
pub const SAMPLE_DATA: [(&str, f64); 5] = [
    ("Jan", 400.0),
    ("Feb", 300.0),
    ("Mar", 600.0),
    ("Apr", 800.0),
    ("May", 500.0),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewMark {
    pub name: String,
    pub value: f64,
    pub color: String,
}

impl PreviewMark {
    pub fn new(name: String, value: f64, color: String) -> Self {
        Self { name, value, color }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPreview {
    pub chart_type: ChartType,
    pub chart_label: &'static str,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_label: Option<String>,
    pub show_legend: bool,
    pub show_grid: bool,
    pub marks: Vec<PreviewMark>,
}

impl ChartPreview {
    pub fn build(config: &ChartConfig) -> Self {
        let marks = SAMPLE_DATA
            .iter()
            .enumerate()
            .map(|(index, (name, value))| {
                // Pie slices each take the next palette color, other charts draw in one color
                let color = match config.chart_type {
                    ChartType::Pie => config.color_at(index),
                    _ => config.primary_color(),
                };
                PreviewMark::new(name.to_string(), *value, color)
            })
            .collect();

        Self {
            chart_type: config.chart_type,
            chart_label: config.chart_type.display_name(),
            title: config.title.clone(),
            subtitle: non_empty(&config.subtitle),
            x_axis_label: non_empty(&config.x_axis_label),
            y_axis_label: non_empty(&config.y_axis_label),
            show_legend: config.show_legend,
            // Pie charts have no axes to lay a grid over
            show_grid: config.show_grid && config.chart_type != ChartType::Pie,
            marks,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}
