//! HTTP handlers for supplier endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::models::{ProductSupplier, Supplier};
use crate::services::supplier::{
    CreateSupplierInput, LinkSupplierInput, ProductSupplierLink, SupplierService,
};
use crate::AppState;

/// Register a supplier
pub async fn create_supplier(
    State(state): State<AppState>,
    Json(input): Json<CreateSupplierInput>,
) -> AppResult<(StatusCode, Json<Supplier>)> {
    let service = SupplierService::new(state.db);
    let supplier = service.create_supplier(input).await?;
    Ok((StatusCode::CREATED, Json(supplier)))
}

/// List all suppliers
pub async fn list_suppliers(State(state): State<AppState>) -> AppResult<Json<Vec<Supplier>>> {
    let service = SupplierService::new(state.db);
    let suppliers = service.list_suppliers().await?;
    Ok(Json(suppliers))
}

/// Link a supplier to a product
pub async fn link_supplier(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    Json(input): Json<LinkSupplierInput>,
) -> AppResult<(StatusCode, Json<ProductSupplier>)> {
    let service = SupplierService::new(state.db);
    let link = service.link_supplier(product_id, input).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// List a product's supplier links
pub async fn list_product_suppliers(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> AppResult<Json<Vec<ProductSupplierLink>>> {
    let service = SupplierService::new(state.db);
    let links = service.list_product_suppliers(product_id).await?;
    Ok(Json(links))
}
