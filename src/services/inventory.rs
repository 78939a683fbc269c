//! Inventory service for recording stock movements and reading stock levels

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::error::{AppError, AppResult};
use crate::models::{InventoryLogEntry, InventoryRecord, MovementReason};

/// Inventory service
#[derive(Clone)]
pub struct InventoryService {
    db: PgPool,
}

/// Input for recording a stock movement
#[derive(Debug, Deserialize)]
pub struct RecordMovementInput {
    pub product_id: i64,
    pub warehouse_id: i64,
    pub change_amount: i32,
    pub reason: MovementReason,
}

/// A recorded stock movement together with the resulting quantity
#[derive(Debug, Serialize)]
pub struct StockMovement {
    pub log_id: i64,
    pub product_id: i64,
    pub warehouse_id: i64,
    pub change_amount: i32,
    pub reason: MovementReason,
    pub quantity_after: i32,
    pub created_at: DateTime<Utc>,
}

/// Stock level of one product in a warehouse
#[derive(Debug, Serialize, FromRow)]
pub struct WarehouseStockLevel {
    pub product_id: i64,
    pub sku: String,
    pub product_name: String,
    pub quantity: i32,
    pub updated_at: DateTime<Utc>,
}

impl InventoryService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Sign convention for the audit trail: sales remove stock, restocks add
    /// it, adjustments may go either way but must change something.
    pub fn validate_change_amount(
        reason: MovementReason,
        change_amount: i32,
    ) -> Result<(), &'static str> {
        match reason {
            MovementReason::Sale if change_amount >= 0 => {
                Err("Sale movements must have a negative change_amount")
            }
            MovementReason::Restock if change_amount <= 0 => {
                Err("Restock movements must have a positive change_amount")
            }
            MovementReason::Adjustment if change_amount == 0 => {
                Err("Adjustment movements must have a nonzero change_amount")
            }
            _ => Ok(()),
        }
    }

    /// Apply a movement to the inventory row and append the audit log entry
    /// in one transaction. The resulting quantity may go negative
    /// (overselling is permitted).
    pub async fn record_movement(&self, input: RecordMovementInput) -> AppResult<StockMovement> {
        Self::validate_change_amount(input.reason, input.change_amount).map_err(|msg| {
            AppError::Validation {
                field: "change_amount".to_string(),
                message: msg.to_string(),
            }
        })?;

        let mut tx = self.db.begin().await?;

        let record = sqlx::query_as::<_, InventoryRecord>(
            r#"
            UPDATE inventory
            SET quantity = quantity + $3, updated_at = NOW()
            WHERE product_id = $1 AND warehouse_id = $2
            RETURNING product_id, warehouse_id, quantity, updated_at
            "#,
        )
        .bind(input.product_id)
        .bind(input.warehouse_id)
        .bind(input.change_amount)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Inventory record".to_string()))?;

        let log = sqlx::query_as::<_, InventoryLogEntry>(
            r#"
            INSERT INTO inventory_logs (product_id, warehouse_id, change_amount, reason)
            VALUES ($1, $2, $3, $4)
            RETURNING id, product_id, warehouse_id, change_amount, reason, created_at
            "#,
        )
        .bind(input.product_id)
        .bind(input.warehouse_id)
        .bind(input.change_amount)
        .bind(input.reason.as_str())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(StockMovement {
            log_id: log.id,
            product_id: log.product_id,
            warehouse_id: log.warehouse_id,
            change_amount: log.change_amount,
            reason: input.reason,
            quantity_after: record.quantity,
            created_at: log.created_at,
        })
    }

    /// Current stock levels for every product held in a warehouse
    pub async fn warehouse_stock_levels(
        &self,
        warehouse_id: i64,
    ) -> AppResult<Vec<WarehouseStockLevel>> {
        let warehouse_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM warehouses WHERE id = $1)")
                .bind(warehouse_id)
                .fetch_one(&self.db)
                .await?;

        if !warehouse_exists {
            return Err(AppError::NotFound("Warehouse".to_string()));
        }

        let levels = sqlx::query_as::<_, WarehouseStockLevel>(
            r#"
            SELECT i.product_id, p.sku, p.name AS product_name, i.quantity, i.updated_at
            FROM inventory i
            JOIN products p ON p.id = i.product_id
            WHERE i.warehouse_id = $1
            ORDER BY p.sku
            "#,
        )
        .bind(warehouse_id)
        .fetch_all(&self.db)
        .await?;

        Ok(levels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_must_be_negative() {
        assert!(InventoryService::validate_change_amount(MovementReason::Sale, -5).is_ok());
        assert!(InventoryService::validate_change_amount(MovementReason::Sale, 0).is_err());
        assert!(InventoryService::validate_change_amount(MovementReason::Sale, 5).is_err());
    }

    #[test]
    fn test_restock_must_be_positive() {
        assert!(InventoryService::validate_change_amount(MovementReason::Restock, 25).is_ok());
        assert!(InventoryService::validate_change_amount(MovementReason::Restock, 0).is_err());
        assert!(InventoryService::validate_change_amount(MovementReason::Restock, -1).is_err());
    }

    #[test]
    fn test_adjustment_must_be_nonzero() {
        assert!(InventoryService::validate_change_amount(MovementReason::Adjustment, -3).is_ok());
        assert!(InventoryService::validate_change_amount(MovementReason::Adjustment, 3).is_ok());
        assert!(InventoryService::validate_change_amount(MovementReason::Adjustment, 0).is_err());
    }

    #[test]
    fn test_reason_wire_names() {
        assert_eq!(MovementReason::Sale.as_str(), "sale");
        assert_eq!(MovementReason::Restock.as_str(), "restock");
        assert_eq!(MovementReason::Adjustment.as_str(), "adjustment");
    }
}
