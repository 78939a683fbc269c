//! HTTP handlers for the StockFlow backend

pub mod alert;
pub mod catalog;
pub mod health;
pub mod inventory;
pub mod product;
pub mod seed;
pub mod supplier;

pub use alert::get_low_stock_alerts;
pub use catalog::{
    create_company, create_product_type, create_warehouse, get_company, list_product_types,
    list_warehouses,
};
pub use health::health_check;
pub use inventory::{get_warehouse_inventory, record_movement};
pub use product::{
    add_bundle_item, create_product, get_product, list_bundle_items, list_company_products,
};
pub use seed::seed_database;
pub use supplier::{create_supplier, link_supplier, list_product_suppliers, list_suppliers};
