use super::constraint_error;
use crate::error::AppError;
use crate::models::{Flag, Staff, StaffCreate};
use sqlx::PgPool;

const COLUMNS: &str = "staff_id, staff_name, join_date, roles, image_link, is_available";

pub struct StaffService;

impl StaffService {
    pub async fn list(pool: &PgPool) -> Result<Vec<Staff>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM staff ORDER BY staff_id");
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Staff>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn get(pool: &PgPool, staff_id: &str) -> Result<Option<Staff>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM staff WHERE staff_id = $1");
        tracing::debug!(sql = %sql, staff_id = %staff_id, "query");
        let row = sqlx::query_as::<_, Staff>(&sql)
            .bind(staff_id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// `join_date` is left to the column default.
    pub async fn create(pool: &PgPool, body: &StaffCreate) -> Result<Staff, AppError> {
        let sql = format!(
            "INSERT INTO staff (staff_id, staff_name, roles, image_link, is_available) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (staff_id) DO NOTHING RETURNING {COLUMNS}"
        );
        tracing::debug!(sql = %sql, staff_id = %body.staff_id, "query");
        sqlx::query_as::<_, Staff>(&sql)
            .bind(&body.staff_id)
            .bind(&body.staff_name)
            .bind(&body.roles)
            .bind(body.image_link.as_deref())
            .bind(body.is_available.value())
            .fetch_optional(pool)
            .await
            .map_err(|e| constraint_error(e, "staff"))?
            .ok_or_else(|| AppError::Conflict(format!("Staff {} already exists", body.staff_id)))
    }

    pub async fn switch_status(pool: &PgPool, staff_id: &str, is_available: Flag) -> Result<Staff, AppError> {
        let sql = format!("UPDATE staff SET is_available = $2 WHERE staff_id = $1 RETURNING {COLUMNS}");
        tracing::debug!(sql = %sql, staff_id = %staff_id, "query");
        sqlx::query_as::<_, Staff>(&sql)
            .bind(staff_id)
            .bind(is_available.value())
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("There is no staff ID with value {staff_id}")))
    }
}
