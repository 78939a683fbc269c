//! Company, warehouse, and product type models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A company owning warehouses and products
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: i64,
    pub name: String,
}

/// A physical warehouse belonging to a company
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Warehouse {
    pub id: i64,
    pub company_id: i64,
    pub name: String,
}

/// A product category carrying the reorder threshold applied to its products
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProductType {
    pub id: i64,
    pub name: String,
    pub default_threshold: i32,
}
