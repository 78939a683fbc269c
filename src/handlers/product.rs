//! HTTP handlers for product endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::models::{BundleItem, Product};
use crate::services::product::{
    AddBundleItemInput, BundleItemDetail, CreateProductInput, ProductService,
};
use crate::AppState;

/// Response for product creation
#[derive(Serialize)]
pub struct CreateProductResponse {
    pub message: String,
    pub product_id: i64,
}

/// Create a product with its initial inventory row
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProductInput>,
) -> AppResult<(StatusCode, Json<CreateProductResponse>)> {
    let service = ProductService::new(state.db);
    let product_id = service.create_product(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateProductResponse {
            message: "Product created successfully".to_string(),
            product_id,
        }),
    ))
}

/// Get a product by id
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> AppResult<Json<Product>> {
    let service = ProductService::new(state.db);
    let product = service.get_product(product_id).await?;
    Ok(Json(product))
}

/// List a company's products
pub async fn list_company_products(
    State(state): State<AppState>,
    Path(company_id): Path<i64>,
) -> AppResult<Json<Vec<Product>>> {
    let service = ProductService::new(state.db);
    let products = service.list_company_products(company_id).await?;
    Ok(Json(products))
}

/// Add a component to a bundle product
pub async fn add_bundle_item(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    Json(input): Json<AddBundleItemInput>,
) -> AppResult<(StatusCode, Json<BundleItem>)> {
    let service = ProductService::new(state.db);
    let item = service.add_bundle_item(product_id, input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// List a bundle product's components
pub async fn list_bundle_items(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> AppResult<Json<Vec<BundleItemDetail>>> {
    let service = ProductService::new(state.db);
    let items = service.list_bundle_items(product_id).await?;
    Ok(Json(items))
}
