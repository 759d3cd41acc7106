// HTTP routes
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    add_widget, create_widget, delete_dashboard, delete_widget, get_builder, health_check,
    list_dashboards, list_widgets, load_dashboard, new_dashboard, preview_widget, remove_widget,
    rename_dashboard, save_dashboard, update_layout, update_widget,
};
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        // Widget catalog
        .route("/widgets", get(list_widgets).post(create_widget))
        .route("/widgets/:id", put(update_widget).delete(delete_widget))
        .route("/widgets/:id/preview", get(preview_widget))
        // Saved dashboards
        .route("/dashboards", get(list_dashboards))
        .route("/dashboards/:id", delete(delete_dashboard))
        // Builder canvas
        .route("/builder", get(get_builder))
        .route("/builder/dashboard", post(new_dashboard))
        .route("/builder/dashboard/:id/load", post(load_dashboard))
        .route("/builder/name", put(rename_dashboard))
        .route("/builder/save", post(save_dashboard))
        .route("/builder/widgets", post(add_widget))
        .route("/builder/widgets/:id", delete(remove_widget))
        .route("/builder/layout", put(update_layout))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}
