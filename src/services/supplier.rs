//! Supplier registry and product-supplier links

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::error::{AppError, AppResult};
use crate::models::{ProductSupplier, Supplier};
use crate::validation::{validate_email, validate_name};

/// Supplier service
#[derive(Clone)]
pub struct SupplierService {
    db: PgPool,
}

/// Input for registering a supplier
#[derive(Debug, Deserialize)]
pub struct CreateSupplierInput {
    pub name: String,
    pub contact_email: Option<String>,
}

/// Input for linking a supplier to a product
#[derive(Debug, Deserialize)]
pub struct LinkSupplierInput {
    pub supplier_id: i64,
    pub is_primary: Option<bool>,
}

/// A product's supplier link joined with the supplier identity
#[derive(Debug, Serialize, FromRow)]
pub struct ProductSupplierLink {
    pub supplier_id: i64,
    pub supplier_name: String,
    pub contact_email: Option<String>,
    pub is_primary: bool,
}

impl SupplierService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Register a supplier
    pub async fn create_supplier(&self, input: CreateSupplierInput) -> AppResult<Supplier> {
        validate_name(&input.name).map_err(|msg| AppError::Validation {
            field: "name".to_string(),
            message: msg.to_string(),
        })?;
        if let Some(ref email) = input.contact_email {
            validate_email(email).map_err(|msg| AppError::Validation {
                field: "contact_email".to_string(),
                message: msg.to_string(),
            })?;
        }

        let supplier = sqlx::query_as::<_, Supplier>(
            r#"
            INSERT INTO suppliers (name, contact_email)
            VALUES ($1, $2)
            RETURNING id, name, contact_email
            "#,
        )
        .bind(&input.name)
        .bind(&input.contact_email)
        .fetch_one(&self.db)
        .await?;

        Ok(supplier)
    }

    /// List all suppliers
    pub async fn list_suppliers(&self) -> AppResult<Vec<Supplier>> {
        let suppliers = sqlx::query_as::<_, Supplier>(
            "SELECT id, name, contact_email FROM suppliers ORDER BY id",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(suppliers)
    }

    /// Link a supplier to a product. Linking as primary demotes any existing
    /// primary link in the same transaction, keeping at most one primary
    /// supplier per product.
    pub async fn link_supplier(
        &self,
        product_id: i64,
        input: LinkSupplierInput,
    ) -> AppResult<ProductSupplier> {
        let product_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
                .bind(product_id)
                .fetch_one(&self.db)
                .await?;
        if !product_exists {
            return Err(AppError::NotFound("Product".to_string()));
        }

        let supplier_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM suppliers WHERE id = $1)")
                .bind(input.supplier_id)
                .fetch_one(&self.db)
                .await?;
        if !supplier_exists {
            return Err(AppError::NotFound("Supplier".to_string()));
        }

        let link_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM product_suppliers WHERE product_id = $1 AND supplier_id = $2)",
        )
        .bind(product_id)
        .bind(input.supplier_id)
        .fetch_one(&self.db)
        .await?;
        if link_exists {
            return Err(AppError::DuplicateEntry("supplier link".to_string()));
        }

        let is_primary = input.is_primary.unwrap_or(true);

        let mut tx = self.db.begin().await?;

        if is_primary {
            sqlx::query(
                "UPDATE product_suppliers SET is_primary = FALSE WHERE product_id = $1 AND is_primary",
            )
            .bind(product_id)
            .execute(&mut *tx)
            .await?;
        }

        let link = sqlx::query_as::<_, ProductSupplier>(
            r#"
            INSERT INTO product_suppliers (product_id, supplier_id, is_primary)
            VALUES ($1, $2, $3)
            RETURNING product_id, supplier_id, is_primary
            "#,
        )
        .bind(product_id)
        .bind(input.supplier_id)
        .bind(is_primary)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(link)
    }

    /// List a product's supplier links
    pub async fn list_product_suppliers(
        &self,
        product_id: i64,
    ) -> AppResult<Vec<ProductSupplierLink>> {
        let product_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
                .bind(product_id)
                .fetch_one(&self.db)
                .await?;
        if !product_exists {
            return Err(AppError::NotFound("Product".to_string()));
        }

        let links = sqlx::query_as::<_, ProductSupplierLink>(
            r#"
            SELECT ps.supplier_id, s.name AS supplier_name, s.contact_email, ps.is_primary
            FROM product_suppliers ps
            JOIN suppliers s ON s.id = ps.supplier_id
            WHERE ps.product_id = $1
            ORDER BY ps.is_primary DESC, ps.supplier_id
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.db)
        .await?;

        Ok(links)
    }
}
