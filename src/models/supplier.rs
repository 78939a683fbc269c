//! Supplier models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A supplier that products can be reordered from
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub contact_email: Option<String>,
}

/// Link between a product and one of its suppliers. At most one link per
/// product carries `is_primary`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProductSupplier {
    pub product_id: i64,
    pub supplier_id: i64,
    pub is_primary: bool,
}
