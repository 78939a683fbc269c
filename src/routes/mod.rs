//! Route definitions for the StockFlow backend

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Company management and the per-company alert report
        .nest("/companies", company_routes())
        // Product management
        .nest("/products", product_routes())
        // Warehouse management
        .nest("/warehouses", warehouse_routes())
        // Product type management
        .nest("/product-types", product_type_routes())
        // Supplier registry
        .nest("/suppliers", supplier_routes())
        // Stock movements
        .nest("/inventory", inventory_routes())
        // Destructive demo fixture (test/demo utility)
        .route("/seed", post(handlers::seed_database))
}

/// Company routes
fn company_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_company))
        .route("/:company_id", get(handlers::get_company))
        .route("/:company_id/warehouses", get(handlers::list_warehouses))
        .route("/:company_id/products", get(handlers::list_company_products))
        .route(
            "/:company_id/alerts/low-stock",
            get(handlers::get_low_stock_alerts),
        )
}

/// Product routes
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_product))
        .route("/:product_id", get(handlers::get_product))
        .route(
            "/:product_id/suppliers",
            get(handlers::list_product_suppliers).post(handlers::link_supplier),
        )
        .route(
            "/:product_id/bundle-items",
            get(handlers::list_bundle_items).post(handlers::add_bundle_item),
        )
}

/// Warehouse routes
fn warehouse_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_warehouse))
        .route(
            "/:warehouse_id/inventory",
            get(handlers::get_warehouse_inventory),
        )
}

/// Product type routes
fn product_type_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(handlers::list_product_types).post(handlers::create_product_type),
    )
}

/// Supplier routes
fn supplier_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(handlers::list_suppliers).post(handlers::create_supplier),
    )
}

/// Inventory routes
fn inventory_routes() -> Router<AppState> {
    Router::new().route("/movements", post(handlers::record_movement))
}
