//! HTTP handlers for reorder endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use shared::{MessageResponse, PendingReorder, PlaceReorder};

use crate::error::AppResult;
use crate::services::ReorderService;
use crate::AppState;

/// Place a reorder
pub async fn place_reorder(
    State(state): State<AppState>,
    Json(input): Json<PlaceReorder>,
) -> AppResult<Json<MessageResponse>> {
    let service = ReorderService::new(state.db);
    service.place_reorder(input).await?;
    Ok(Json(MessageResponse::new("Reorder placed successfully")))
}

/// Reorders awaiting delivery
pub async fn list_pending_reorders(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PendingReorder>>> {
    let service = ReorderService::new(state.db);
    let reorders = service.get_pending_reorders().await?;
    Ok(Json(reorders))
}

/// Mark a reorder as received
pub async fn receive_reorder(
    State(state): State<AppState>,
    Path(reorder_id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    let service = ReorderService::new(state.db);
    let received = service.mark_reorder_as_received(reorder_id).await?;

    tracing::info!(
        reorder_id = received.reorder_id,
        product_id = received.product_id,
        quantity = received.quantity,
        stock_quantity = received.stock_quantity,
        "Reorder received"
    );

    Ok(Json(MessageResponse::new(format!(
        "Reorder ID {} marked as received",
        received.reorder_id
    ))))
}
