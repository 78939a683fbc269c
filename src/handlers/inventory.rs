//! HTTP handlers for inventory endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::services::inventory::{
    InventoryService, RecordMovementInput, StockMovement, WarehouseStockLevel,
};
use crate::AppState;

/// Record a stock movement (sale, restock, or adjustment)
pub async fn record_movement(
    State(state): State<AppState>,
    Json(input): Json<RecordMovementInput>,
) -> AppResult<(StatusCode, Json<StockMovement>)> {
    let service = InventoryService::new(state.db);
    let movement = service.record_movement(input).await?;
    Ok((StatusCode::CREATED, Json(movement)))
}

/// Get current stock levels in a warehouse
pub async fn get_warehouse_inventory(
    State(state): State<AppState>,
    Path(warehouse_id): Path<i64>,
) -> AppResult<Json<Vec<WarehouseStockLevel>>> {
    let service = InventoryService::new(state.db);
    let levels = service.warehouse_stock_levels(warehouse_id).await?;
    Ok(Json(levels))
}
