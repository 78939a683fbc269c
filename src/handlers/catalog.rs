//! HTTP handlers for company, warehouse, and product type endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::models::{Company, ProductType, Warehouse};
use crate::services::catalog::{
    CatalogService, CreateCompanyInput, CreateProductTypeInput, CreateWarehouseInput,
};
use crate::AppState;

/// Create a company
pub async fn create_company(
    State(state): State<AppState>,
    Json(input): Json<CreateCompanyInput>,
) -> AppResult<(StatusCode, Json<Company>)> {
    let service = CatalogService::new(state.db);
    let company = service.create_company(input).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

/// Get a company by id
pub async fn get_company(
    State(state): State<AppState>,
    Path(company_id): Path<i64>,
) -> AppResult<Json<Company>> {
    let service = CatalogService::new(state.db);
    let company = service.get_company(company_id).await?;
    Ok(Json(company))
}

/// Create a warehouse
pub async fn create_warehouse(
    State(state): State<AppState>,
    Json(input): Json<CreateWarehouseInput>,
) -> AppResult<(StatusCode, Json<Warehouse>)> {
    let service = CatalogService::new(state.db);
    let warehouse = service.create_warehouse(input).await?;
    Ok((StatusCode::CREATED, Json(warehouse)))
}

/// List a company's warehouses
pub async fn list_warehouses(
    State(state): State<AppState>,
    Path(company_id): Path<i64>,
) -> AppResult<Json<Vec<Warehouse>>> {
    let service = CatalogService::new(state.db);
    let warehouses = service.list_warehouses(company_id).await?;
    Ok(Json(warehouses))
}

/// Create a product type
pub async fn create_product_type(
    State(state): State<AppState>,
    Json(input): Json<CreateProductTypeInput>,
) -> AppResult<(StatusCode, Json<ProductType>)> {
    let service = CatalogService::new(state.db);
    let product_type = service.create_product_type(input).await?;
    Ok((StatusCode::CREATED, Json(product_type)))
}

/// List all product types
pub async fn list_product_types(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProductType>>> {
    let service = CatalogService::new(state.db);
    let product_types = service.list_product_types().await?;
    Ok(Json(product_types))
}
