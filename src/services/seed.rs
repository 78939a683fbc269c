//! Seed service: destructive reset plus a deterministic demo fixture
//!
//! Test and demo utility, not part of the production surface. The fixture
//! contains one product under its reorder threshold with recent sales (so
//! the alert report has something to say) and one comfortably stocked.

use rust_decimal::Decimal;
use sqlx::PgPool;
use std::str::FromStr;

use crate::error::{AppError, AppResult};
use crate::models::MovementReason;

/// Seed service
#[derive(Clone)]
pub struct SeedService {
    db: PgPool,
}

impl SeedService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Wipe every table and insert the fixture scenario. Returns the
    /// fixture company's id.
    pub async fn reset_and_seed(&self) -> AppResult<i64> {
        let mut tx = self.db.begin().await?;

        sqlx::query(
            r#"
            TRUNCATE bundle_items, product_suppliers, inventory_logs, inventory,
                     products, suppliers, product_types, warehouses, companies
            RESTART IDENTITY CASCADE
            "#,
        )
        .execute(&mut *tx)
        .await?;

        let company_id =
            sqlx::query_scalar::<_, i64>("INSERT INTO companies (name) VALUES ($1) RETURNING id")
                .bind("Acme Corp")
                .fetch_one(&mut *tx)
                .await?;

        let warehouse_id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO warehouses (company_id, name) VALUES ($1, $2) RETURNING id",
        )
        .bind(company_id)
        .bind("Main Hub")
        .fetch_one(&mut *tx)
        .await?;

        let product_type_id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO product_types (name, default_threshold) VALUES ($1, $2) RETURNING id",
        )
        .bind("Electronics")
        .bind(20)
        .fetch_one(&mut *tx)
        .await?;

        let supplier_id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO suppliers (name, contact_email) VALUES ($1, $2) RETURNING id",
        )
        .bind("Global Tech")
        .bind("orders@globaltech.com")
        .fetch_one(&mut *tx)
        .await?;

        // Product that should trigger an alert: stock 10 against threshold
        // 20, with recent sales history
        let widget_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO products (company_id, product_type_id, sku, name, price)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(company_id)
        .bind(product_type_id)
        .bind("SKU-001")
        .bind("Widget A")
        .bind(Self::price("19.99")?)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO inventory (product_id, warehouse_id, quantity) VALUES ($1, $2, $3)")
            .bind(widget_id)
            .bind(warehouse_id)
            .bind(10)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO product_suppliers (product_id, supplier_id, is_primary) VALUES ($1, $2, TRUE)",
        )
        .bind(widget_id)
        .bind(supplier_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO inventory_logs (product_id, warehouse_id, change_amount, reason)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(widget_id)
        .bind(warehouse_id)
        .bind(-5)
        .bind(MovementReason::Sale.as_str())
        .execute(&mut *tx)
        .await?;

        // Product that should NOT trigger an alert (plenty of stock)
        let gadget_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO products (company_id, product_type_id, sku, name, price)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(company_id)
        .bind(product_type_id)
        .bind("SKU-002")
        .bind("Gadget B")
        .bind(Self::price("49.99")?)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO inventory (product_id, warehouse_id, quantity) VALUES ($1, $2, $3)")
            .bind(gadget_id)
            .bind(warehouse_id)
            .bind(100)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(company_id)
    }

    fn price(value: &str) -> AppResult<Decimal> {
        Decimal::from_str(value)
            .map_err(|e| AppError::Internal(format!("Invalid fixture price: {}", e)))
    }
}
