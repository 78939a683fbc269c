//! Low-stock alert computation
//!
//! Combines current inventory, the product type's reorder threshold,
//! trailing 30-day sales velocity, and the primary supplier contact into a
//! per-(product, warehouse) alert report.

use chrono::{Duration, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::error::{AppError, AppResult};

/// Trailing window over which sales velocity is measured, in days
pub const SALES_WINDOW_DAYS: i64 = 30;

/// Stockout estimate reported when a product has no measurable velocity.
/// Rows with zero velocity are skipped before this applies; kept as a
/// defensive fallback.
pub const NO_VELOCITY_SENTINEL: i64 = 999;

/// Alert service producing the low-stock report
#[derive(Clone)]
pub struct AlertService {
    db: PgPool,
}

/// One low-stock alert for a (product, warehouse) pair
#[derive(Debug, Clone, Serialize)]
pub struct LowStockAlert {
    pub product_id: i64,
    pub product_name: String,
    pub sku: String,
    pub warehouse_id: i64,
    pub warehouse_name: String,
    pub current_stock: i32,
    pub threshold: i32,
    pub days_until_stockout: i64,
    pub supplier: SupplierContact,
}

/// Primary supplier contact attached to an alert
#[derive(Debug, Clone, Serialize)]
pub struct SupplierContact {
    pub id: i64,
    pub name: String,
    pub contact_email: Option<String>,
}

/// The full report returned by the alert endpoint
#[derive(Debug, Serialize)]
pub struct LowStockReport {
    pub alerts: Vec<LowStockAlert>,
    pub total_alerts: usize,
}

/// Row of the candidate join before threshold and velocity filtering
#[derive(Debug, FromRow)]
struct AlertCandidateRow {
    product_id: i64,
    product_name: String,
    sku: String,
    warehouse_id: i64,
    warehouse_name: String,
    current_stock: i32,
    threshold: i32,
    supplier_id: i64,
    supplier_name: String,
    supplier_email: Option<String>,
}

/// Flattened alert row for CSV export
#[derive(Debug, Serialize)]
struct LowStockCsvRow<'a> {
    product_id: i64,
    product_name: &'a str,
    sku: &'a str,
    warehouse_id: i64,
    warehouse_name: &'a str,
    current_stock: i32,
    threshold: i32,
    days_until_stockout: i64,
    supplier_id: i64,
    supplier_name: &'a str,
    supplier_contact_email: &'a str,
}

impl<'a> From<&'a LowStockAlert> for LowStockCsvRow<'a> {
    fn from(alert: &'a LowStockAlert) -> Self {
        Self {
            product_id: alert.product_id,
            product_name: &alert.product_name,
            sku: &alert.sku,
            warehouse_id: alert.warehouse_id,
            warehouse_name: &alert.warehouse_name,
            current_stock: alert.current_stock,
            threshold: alert.threshold,
            days_until_stockout: alert.days_until_stockout,
            supplier_id: alert.supplier.id,
            supplier_name: &alert.supplier.name,
            supplier_contact_email: alert.supplier.contact_email.as_deref().unwrap_or(""),
        }
    }
}

impl AlertService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Compute the low-stock report for a company.
    ///
    /// The sales sum is scoped per product across all of the company's
    /// warehouses, while stock and threshold are per warehouse. The report
    /// runs as independent read queries without a snapshot, so concurrent
    /// writes may be observed partially.
    pub async fn low_stock_report(&self, company_id: i64) -> AppResult<LowStockReport> {
        let company_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM companies WHERE id = $1)")
                .bind(company_id)
                .fetch_one(&self.db)
                .await?;
        if !company_exists {
            return Err(AppError::NotFound("Company".to_string()));
        }

        let window_start = Utc::now() - Duration::days(SALES_WINDOW_DAYS);

        // Products with no primary supplier drop out of the inner join.
        let candidates = sqlx::query_as::<_, AlertCandidateRow>(
            r#"
            SELECT p.id AS product_id,
                   p.name AS product_name,
                   p.sku,
                   w.id AS warehouse_id,
                   w.name AS warehouse_name,
                   i.quantity AS current_stock,
                   pt.default_threshold AS threshold,
                   s.id AS supplier_id,
                   s.name AS supplier_name,
                   s.contact_email AS supplier_email
            FROM products p
            JOIN warehouses w ON w.company_id = p.company_id
            JOIN inventory i ON i.product_id = p.id AND i.warehouse_id = w.id
            JOIN product_types pt ON pt.id = p.product_type_id
            JOIN product_suppliers ps ON ps.product_id = p.id AND ps.is_primary
            JOIN suppliers s ON s.id = ps.supplier_id
            WHERE p.company_id = $1
            ORDER BY p.id, w.id
            "#,
        )
        .bind(company_id)
        .fetch_all(&self.db)
        .await?;

        let mut alerts = Vec::new();
        for row in candidates {
            // Check if stock is low
            if row.current_stock >= row.threshold {
                continue;
            }

            // Check recent sales velocity
            let recent_sales_sum = sqlx::query_scalar::<_, i64>(
                r#"
                SELECT COALESCE(SUM(change_amount), 0)::BIGINT
                FROM inventory_logs
                WHERE product_id = $1 AND reason = 'sale' AND created_at >= $2
                "#,
            )
            .bind(row.product_id)
            .bind(window_start)
            .fetch_one(&self.db)
            .await?;

            let recent_sales_abs = recent_sales_sum.abs();
            if recent_sales_abs == 0 {
                continue;
            }

            alerts.push(LowStockAlert {
                product_id: row.product_id,
                product_name: row.product_name,
                sku: row.sku,
                warehouse_id: row.warehouse_id,
                warehouse_name: row.warehouse_name,
                current_stock: row.current_stock,
                threshold: row.threshold,
                days_until_stockout: Self::days_until_stockout(
                    row.current_stock,
                    recent_sales_abs,
                ),
                supplier: SupplierContact {
                    id: row.supplier_id,
                    name: row.supplier_name,
                    contact_email: row.supplier_email,
                },
            });
        }

        Ok(LowStockReport {
            total_alerts: alerts.len(),
            alerts,
        })
    }

    /// Estimated days until the on-hand quantity reaches zero, given the
    /// absolute sale volume over the trailing window. Exact integer
    /// arithmetic: floor(stock / (volume / window)) == stock * window / volume.
    pub fn days_until_stockout(current_stock: i32, recent_sales_abs: i64) -> i64 {
        if recent_sales_abs == 0 {
            return NO_VELOCITY_SENTINEL;
        }
        i64::from(current_stock) * SALES_WINDOW_DAYS / recent_sales_abs
    }

    /// Export report rows as CSV
    pub fn export_to_csv(alerts: &[LowStockAlert]) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for alert in alerts {
            wtr.serialize(LowStockCsvRow::from(alert)).map_err(|e| {
                AppError::Internal(format!("CSV serialization error: {}", e))
            })?;
        }
        let csv_data = String::from_utf8(
            wtr.into_inner()
                .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?,
        )
        .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;
        Ok(csv_data)
    }
}
