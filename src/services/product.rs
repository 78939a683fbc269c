//! Product creation and bundle composition service

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::error::{AppError, AppResult};
use crate::models::{BundleItem, Product};
use crate::validation::{normalize_price, validate_price, validate_sku};

/// Service for managing products
#[derive(Clone)]
pub struct ProductService {
    db: PgPool,
}

/// Input for creating a product. Required fields are optional here so that
/// the service can report every missing field in one response.
#[derive(Debug, Deserialize)]
pub struct CreateProductInput {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub price: Option<Decimal>,
    pub warehouse_id: Option<i64>,
    pub company_id: Option<i64>,
    pub product_type_id: Option<i64>,
    pub initial_quantity: Option<i32>,
}

impl CreateProductInput {
    /// Names of required fields absent from the request
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.sku.is_none() {
            missing.push("sku");
        }
        if self.price.is_none() {
            missing.push("price");
        }
        if self.warehouse_id.is_none() {
            missing.push("warehouse_id");
        }
        missing
    }
}

/// Input for adding a component to a bundle product
#[derive(Debug, Deserialize)]
pub struct AddBundleItemInput {
    pub child_product_id: i64,
    pub quantity: Option<i32>,
}

/// Bundle component joined with the child product's identity
#[derive(Debug, Serialize, FromRow)]
pub struct BundleItemDetail {
    pub child_product_id: i64,
    pub child_sku: String,
    pub child_name: String,
    pub quantity: i32,
}

impl ProductService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a product together with its initial inventory row in one
    /// transaction: either both persist or neither does.
    pub async fn create_product(&self, input: CreateProductInput) -> AppResult<i64> {
        let missing = input.missing_fields();
        let (name, sku, price, warehouse_id) =
            match (input.name, input.sku, input.price, input.warehouse_id) {
                (Some(name), Some(sku), Some(price), Some(warehouse_id)) => {
                    (name, sku, price, warehouse_id)
                }
                _ => {
                    return Err(AppError::ValidationError(format!(
                        "Missing fields: {}",
                        missing.join(", ")
                    )))
                }
            };

        validate_sku(&sku).map_err(|msg| AppError::Validation {
            field: "sku".to_string(),
            message: msg.to_string(),
        })?;
        validate_price(price).map_err(|msg| AppError::Validation {
            field: "price".to_string(),
            message: msg.to_string(),
        })?;
        let price = normalize_price(price);

        let company_id = input.company_id.unwrap_or(1);
        let product_type_id = input.product_type_id.unwrap_or(1);
        let initial_quantity = input.initial_quantity.unwrap_or(0);

        // Check if SKU exists
        let sku_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE sku = $1)")
                .bind(&sku)
                .fetch_one(&self.db)
                .await?;

        if sku_exists {
            return Err(AppError::DuplicateEntry("sku".to_string()));
        }

        // Single transaction for atomicity. Foreign-key violations (unknown
        // warehouse, company, or product type) surface at commit time and
        // roll back both inserts.
        let mut tx = self.db.begin().await?;

        let product_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO products (company_id, product_type_id, sku, name, price)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(company_id)
        .bind(product_type_id)
        .bind(&sku)
        .bind(&name)
        .bind(price)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO inventory (product_id, warehouse_id, quantity) VALUES ($1, $2, $3)")
            .bind(product_id)
            .bind(warehouse_id)
            .bind(initial_quantity)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(product_id)
    }

    /// Get a product by id
    pub async fn get_product(&self, product_id: i64) -> AppResult<Product> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, company_id, product_type_id, sku, name, price, is_bundle FROM products WHERE id = $1",
        )
        .bind(product_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        Ok(product)
    }

    /// List all products belonging to a company
    pub async fn list_company_products(&self, company_id: i64) -> AppResult<Vec<Product>> {
        let company_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM companies WHERE id = $1)")
                .bind(company_id)
                .fetch_one(&self.db)
                .await?;

        if !company_exists {
            return Err(AppError::NotFound("Company".to_string()));
        }

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, company_id, product_type_id, sku, name, price, is_bundle
            FROM products
            WHERE company_id = $1
            ORDER BY id
            "#,
        )
        .bind(company_id)
        .fetch_all(&self.db)
        .await?;

        Ok(products)
    }

    /// Add a component to a bundle. The parent is marked as a bundle in the
    /// same transaction that records the component.
    pub async fn add_bundle_item(
        &self,
        parent_product_id: i64,
        input: AddBundleItemInput,
    ) -> AppResult<BundleItem> {
        let quantity = input.quantity.unwrap_or(1);
        if quantity < 1 {
            return Err(AppError::Validation {
                field: "quantity".to_string(),
                message: "Quantity must be at least 1".to_string(),
            });
        }
        if input.child_product_id == parent_product_id {
            return Err(AppError::Validation {
                field: "child_product_id".to_string(),
                message: "A bundle cannot contain itself".to_string(),
            });
        }

        for (id, resource) in [
            (parent_product_id, "Product"),
            (input.child_product_id, "Child product"),
        ] {
            let exists = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)",
            )
            .bind(id)
            .fetch_one(&self.db)
            .await?;
            if !exists {
                return Err(AppError::NotFound(resource.to_string()));
            }
        }

        let mut tx = self.db.begin().await?;

        let item = sqlx::query_as::<_, BundleItem>(
            r#"
            INSERT INTO bundle_items (parent_product_id, child_product_id, quantity)
            VALUES ($1, $2, $3)
            RETURNING parent_product_id, child_product_id, quantity
            "#,
        )
        .bind(parent_product_id)
        .bind(input.child_product_id)
        .bind(quantity)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE products SET is_bundle = TRUE WHERE id = $1")
            .bind(parent_product_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(item)
    }

    /// List a bundle's components with the child product identities
    pub async fn list_bundle_items(
        &self,
        parent_product_id: i64,
    ) -> AppResult<Vec<BundleItemDetail>> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
                .bind(parent_product_id)
                .fetch_one(&self.db)
                .await?;
        if !exists {
            return Err(AppError::NotFound("Product".to_string()));
        }

        let items = sqlx::query_as::<_, BundleItemDetail>(
            r#"
            SELECT bi.child_product_id, p.sku AS child_sku, p.name AS child_name, bi.quantity
            FROM bundle_items bi
            JOIN products p ON p.id = bi.child_product_id
            WHERE bi.parent_product_id = $1
            ORDER BY bi.child_product_id
            "#,
        )
        .bind(parent_product_id)
        .fetch_all(&self.db)
        .await?;

        Ok(items)
    }
}
