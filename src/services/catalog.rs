//! Catalog service for companies, warehouses, and product types

use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::{Company, ProductType, Warehouse};
use crate::validation::{validate_name, validate_threshold};

/// Default reorder threshold when a product type does not specify one
const DEFAULT_REORDER_THRESHOLD: i32 = 10;

/// Catalog service
#[derive(Clone)]
pub struct CatalogService {
    db: PgPool,
}

/// Input for creating a company
#[derive(Debug, Deserialize)]
pub struct CreateCompanyInput {
    pub name: String,
}

/// Input for creating a warehouse
#[derive(Debug, Deserialize)]
pub struct CreateWarehouseInput {
    pub company_id: i64,
    pub name: String,
}

/// Input for creating a product type
#[derive(Debug, Deserialize)]
pub struct CreateProductTypeInput {
    pub name: String,
    pub default_threshold: Option<i32>,
}

impl CatalogService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a company
    pub async fn create_company(&self, input: CreateCompanyInput) -> AppResult<Company> {
        validate_name(&input.name).map_err(|msg| AppError::Validation {
            field: "name".to_string(),
            message: msg.to_string(),
        })?;

        let company = sqlx::query_as::<_, Company>(
            "INSERT INTO companies (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&input.name)
        .fetch_one(&self.db)
        .await?;

        Ok(company)
    }

    /// Get a company by id
    pub async fn get_company(&self, company_id: i64) -> AppResult<Company> {
        let company =
            sqlx::query_as::<_, Company>("SELECT id, name FROM companies WHERE id = $1")
                .bind(company_id)
                .fetch_optional(&self.db)
                .await?
                .ok_or_else(|| AppError::NotFound("Company".to_string()))?;

        Ok(company)
    }

    /// Create a warehouse for a company
    pub async fn create_warehouse(&self, input: CreateWarehouseInput) -> AppResult<Warehouse> {
        validate_name(&input.name).map_err(|msg| AppError::Validation {
            field: "name".to_string(),
            message: msg.to_string(),
        })?;

        let company_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM companies WHERE id = $1)")
                .bind(input.company_id)
                .fetch_one(&self.db)
                .await?;
        if !company_exists {
            return Err(AppError::NotFound("Company".to_string()));
        }

        let warehouse = sqlx::query_as::<_, Warehouse>(
            r#"
            INSERT INTO warehouses (company_id, name)
            VALUES ($1, $2)
            RETURNING id, company_id, name
            "#,
        )
        .bind(input.company_id)
        .bind(&input.name)
        .fetch_one(&self.db)
        .await?;

        Ok(warehouse)
    }

    /// List a company's warehouses
    pub async fn list_warehouses(&self, company_id: i64) -> AppResult<Vec<Warehouse>> {
        let company_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM companies WHERE id = $1)")
                .bind(company_id)
                .fetch_one(&self.db)
                .await?;
        if !company_exists {
            return Err(AppError::NotFound("Company".to_string()));
        }

        let warehouses = sqlx::query_as::<_, Warehouse>(
            "SELECT id, company_id, name FROM warehouses WHERE company_id = $1 ORDER BY id",
        )
        .bind(company_id)
        .fetch_all(&self.db)
        .await?;

        Ok(warehouses)
    }

    /// Create a product type
    pub async fn create_product_type(
        &self,
        input: CreateProductTypeInput,
    ) -> AppResult<ProductType> {
        validate_name(&input.name).map_err(|msg| AppError::Validation {
            field: "name".to_string(),
            message: msg.to_string(),
        })?;

        let default_threshold = input.default_threshold.unwrap_or(DEFAULT_REORDER_THRESHOLD);
        validate_threshold(default_threshold).map_err(|msg| AppError::Validation {
            field: "default_threshold".to_string(),
            message: msg.to_string(),
        })?;

        let product_type = sqlx::query_as::<_, ProductType>(
            r#"
            INSERT INTO product_types (name, default_threshold)
            VALUES ($1, $2)
            RETURNING id, name, default_threshold
            "#,
        )
        .bind(&input.name)
        .bind(default_threshold)
        .fetch_one(&self.db)
        .await?;

        Ok(product_type)
    }

    /// List all product types
    pub async fn list_product_types(&self) -> AppResult<Vec<ProductType>> {
        let product_types = sqlx::query_as::<_, ProductType>(
            "SELECT id, name, default_threshold FROM product_types ORDER BY id",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(product_types)
    }
}
