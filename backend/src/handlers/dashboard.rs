//! HTTP handlers for dashboard endpoints

use axum::{extract::State, Json};
use shared::BasicInfoResponse;

use crate::error::AppResult;
use crate::services::DashboardService;
use crate::AppState;

/// Headline inventory figures
pub async fn get_basic_info(State(state): State<AppState>) -> AppResult<Json<BasicInfoResponse>> {
    let service = DashboardService::new(state.db);
    let basic_info = service.get_basic_info().await?;
    Ok(Json(BasicInfoResponse { basic_info }))
}
