//! Inventory and stock movement models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Current on-hand quantity for one (product, warehouse) pair
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InventoryRecord {
    pub product_id: i64,
    pub warehouse_id: i64,
    pub quantity: i32,
    pub updated_at: DateTime<Utc>,
}

/// One row of the append-only stock movement audit trail
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InventoryLogEntry {
    pub id: i64,
    pub product_id: i64,
    pub warehouse_id: i64,
    pub change_amount: i32,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Why a stock movement happened. Stored as plain text in `inventory_logs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementReason {
    Sale,
    Restock,
    Adjustment,
}

impl MovementReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementReason::Sale => "sale",
            MovementReason::Restock => "restock",
            MovementReason::Adjustment => "adjustment",
        }
    }
}
