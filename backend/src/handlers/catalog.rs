//! HTTP handlers for catalog endpoints

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use shared::{HistoryRecord, MessageResponse, NewProduct, PageWindow, ProductRef, SupplierRef, TableView};

use crate::error::AppResult;
use crate::services::CatalogService;
use crate::AppState;

/// Query parameters of a table page request
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

/// One page of a named view; unknown views yield an empty array
pub async fn get_table_page(
    State(state): State<AppState>,
    Path(table_name): Path<String>,
    Query(query): Query<PageQuery>,
) -> AppResult<Response> {
    let Some(view) = TableView::from_label(&table_name) else {
        tracing::debug!(table_name = %table_name, "Unknown table view requested");
        return Ok(Json(Vec::<serde_json::Value>::new()).into_response());
    };

    let api = &state.config.api;
    let window = PageWindow::new(
        query.offset.unwrap_or(0),
        query.limit.unwrap_or(api.default_page_size),
    )
    .capped(api.max_page_size);

    let service = CatalogService::new(state.db);
    let rows = service.get_table_page(view, window).await?;
    tracing::debug!(view = %view, rows = rows.len(), "Table page fetched");
    Ok(Json(rows).into_response())
}

/// Distinct product categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let service = CatalogService::new(state.db);
    let categories = service.get_categories().await?;
    Ok(Json(categories))
}

/// Suppliers for the product form
pub async fn list_suppliers(State(state): State<AppState>) -> AppResult<Json<Vec<SupplierRef>>> {
    let service = CatalogService::new(state.db);
    let suppliers = service.get_suppliers().await?;
    Ok(Json(suppliers))
}

/// Add a new product
pub async fn add_product(
    State(state): State<AppState>,
    Json(input): Json<NewProduct>,
) -> AppResult<Json<MessageResponse>> {
    let service = CatalogService::new(state.db);
    let name = input.product_name.trim().to_string();
    service.add_product(input).await?;
    Ok(Json(MessageResponse::new(format!(
        "Product '{}' added successfully",
        name
    ))))
}

/// Products for the history and reorder pickers
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<ProductRef>>> {
    let service = CatalogService::new(state.db);
    let products = service.get_all_products().await?;
    Ok(Json(products))
}

/// Inventory history of a product
pub async fn get_product_history(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> AppResult<Json<Vec<HistoryRecord>>> {
    let service = CatalogService::new(state.db);
    let history = service.get_product_history(product_id).await?;
    Ok(Json(history))
}
