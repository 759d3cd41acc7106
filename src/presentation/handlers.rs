// HTTP request handlers
use crate::application::builder_service::BuilderView;
use crate::domain::chart::ChartConfig;
use crate::domain::dashboard::{Dashboard, DashboardWidget};
use crate::domain::layout::GridItem;
use crate::domain::preview::ChartPreview;
use crate::domain::widget::Widget;
use crate::infrastructure::http_response::ApiError;
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;

type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Deserialize)]
pub struct NameRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWidgetRequest {
    pub widget_id: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

// Widget management

pub async fn list_widgets(State(state): State<Arc<AppState>>) -> Json<Vec<Widget>> {
    let builder = state.builder.lock().await;
    Json(builder.catalog().widgets().to_vec())
}

pub async fn create_widget(
    State(state): State<Arc<AppState>>,
    Json(config): Json<ChartConfig>,
) -> ApiResult<(StatusCode, Json<Widget>)> {
    let widget = state.builder.lock().await.create_widget(config).await?;
    Ok((StatusCode::CREATED, Json(widget)))
}

pub async fn update_widget(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(config): Json<ChartConfig>,
) -> ApiResult<Json<Widget>> {
    state
        .builder
        .lock()
        .await
        .edit_widget(&id, config)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("widget", &id))
}

pub async fn delete_widget(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.builder.lock().await.delete_widget(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn preview_widget(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ChartPreview>> {
    state
        .builder
        .lock()
        .await
        .preview_widget(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("widget", &id))
}

// Saved dashboards

pub async fn list_dashboards(State(state): State<Arc<AppState>>) -> Json<Vec<Dashboard>> {
    let builder = state.builder.lock().await;
    Json(builder.dashboards().dashboards().to_vec())
}

pub async fn delete_dashboard(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.builder.lock().await.delete_dashboard(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Builder canvas

pub async fn get_builder(State(state): State<Arc<AppState>>) -> Json<BuilderView> {
    Json(state.builder.lock().await.view())
}

pub async fn new_dashboard(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NameRequest>,
) -> (StatusCode, Json<Dashboard>) {
    let dashboard = state.builder.lock().await.new_dashboard(&request.name);
    (StatusCode::CREATED, Json(dashboard))
}

pub async fn load_dashboard(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<BuilderView>> {
    let mut builder = state.builder.lock().await;
    if !builder.open_dashboard(&id) {
        return Err(ApiError::not_found("dashboard", &id));
    }
    Ok(Json(builder.view()))
}

pub async fn rename_dashboard(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NameRequest>,
) -> ApiResult<Json<BuilderView>> {
    let mut builder = state.builder.lock().await;
    if !builder.rename_dashboard(&request.name) {
        return Err(ApiError::NotFound("no dashboard is being edited".to_string()));
    }
    Ok(Json(builder.view()))
}

pub async fn save_dashboard(State(state): State<Arc<AppState>>) -> ApiResult<Json<BuilderView>> {
    let mut builder = state.builder.lock().await;
    if !builder.save_dashboard().await? {
        return Err(ApiError::NotFound("no dashboard is being edited".to_string()));
    }
    Ok(Json(builder.view()))
}

pub async fn add_widget(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AddWidgetRequest>,
) -> ApiResult<(StatusCode, Json<DashboardWidget>)> {
    let placement = state.builder.lock().await.add_widget(&request.widget_id)?;
    Ok((StatusCode::CREATED, Json(placement)))
}

pub async fn remove_widget(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<Vec<DashboardWidget>> {
    Json(state.builder.lock().await.remove_widget(&id))
}

/// Takes the full layout the grid reports after a drag or resize
pub async fn update_layout(
    State(state): State<Arc<AppState>>,
    Json(items): Json<Vec<GridItem>>,
) -> Json<Vec<DashboardWidget>> {
    Json(state.builder.lock().await.apply_layout(items))
}
