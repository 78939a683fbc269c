//! Product and bundle composition models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A sellable product identified by its SKU
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub company_id: i64,
    pub product_type_id: i64,
    pub sku: String,
    pub name: String,
    pub price: Decimal,
    pub is_bundle: bool,
}

/// A component row of a bundle product
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BundleItem {
    pub parent_product_id: i64,
    pub child_product_id: i64,
    pub quantity: i32,
}
