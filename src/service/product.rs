use super::constraint_error;
use crate::error::AppError;
use crate::models::{Flag, Product, ProductCreate, ProductFields};
use sqlx::PgPool;

const COLUMNS: &str =
    "product_id, product_name, image_link, product_category, product_price, product_priority, is_available";

pub struct ProductService;

impl ProductService {
    /// Whole catalogue, lowest priority number first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM product ORDER BY product_priority, product_id");
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Product>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn get(pool: &PgPool, product_id: &str) -> Result<Option<Product>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM product WHERE product_id = $1");
        tracing::debug!(sql = %sql, product_id = %product_id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(product_id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn create(pool: &PgPool, body: &ProductCreate) -> Result<Product, AppError> {
        let sql = format!(
            "INSERT INTO product ({COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (product_id) DO NOTHING RETURNING {COLUMNS}"
        );
        tracing::debug!(sql = %sql, product_id = %body.product_id, "query");
        let f = &body.fields;
        sqlx::query_as::<_, Product>(&sql)
            .bind(&body.product_id)
            .bind(&f.product_name)
            .bind(f.image_link.as_deref())
            .bind(f.product_category.as_str())
            .bind(f.product_price)
            .bind(f.product_priority)
            .bind(f.is_available.unwrap_or_default().value())
            .fetch_optional(pool)
            .await
            .map_err(|e| constraint_error(e, "product"))?
            .ok_or_else(|| AppError::Conflict(format!("Product {} already exists", body.product_id)))
    }

    /// Availability is only written when the body carries it.
    pub async fn update(pool: &PgPool, product_id: &str, f: &ProductFields) -> Result<Product, AppError> {
        let sql = format!(
            "UPDATE product SET product_name = $2, image_link = $3, product_category = $4, \
             product_price = $5, product_priority = $6, is_available = COALESCE($7, is_available) \
             WHERE product_id = $1 RETURNING {COLUMNS}"
        );
        tracing::debug!(sql = %sql, product_id = %product_id, "query");
        sqlx::query_as::<_, Product>(&sql)
            .bind(product_id)
            .bind(&f.product_name)
            .bind(f.image_link.as_deref())
            .bind(f.product_category.as_str())
            .bind(f.product_price)
            .bind(f.product_priority)
            .bind(f.is_available.map(Flag::value))
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Can not find product {product_id}")))
    }

    pub async fn delete(pool: &PgPool, product_id: &str) -> Result<Product, AppError> {
        let sql = format!("DELETE FROM product WHERE product_id = $1 RETURNING {COLUMNS}");
        tracing::debug!(sql = %sql, product_id = %product_id, "query");
        sqlx::query_as::<_, Product>(&sql)
            .bind(product_id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Can not find product {product_id}")))
    }

    pub async fn switch_status(pool: &PgPool, product_id: &str, is_available: Flag) -> Result<Product, AppError> {
        let sql = format!("UPDATE product SET is_available = $2 WHERE product_id = $1 RETURNING {COLUMNS}");
        tracing::debug!(sql = %sql, product_id = %product_id, "query");
        sqlx::query_as::<_, Product>(&sql)
            .bind(product_id)
            .bind(is_available.value())
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Can not find product {product_id}")))
    }
}
