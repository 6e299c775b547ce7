use super::constraint_error;
use crate::error::AppError;
use crate::models::{DiningTable, Flag, TableCreate, TableStatus};
use sqlx::PgPool;

pub struct TableService;

impl TableService {
    /// All tables, newest ID first. `status` narrows to one availability value.
    pub async fn list(pool: &PgPool, status: Option<TableStatus>) -> Result<Vec<DiningTable>, AppError> {
        let sql = "SELECT table_id, table_seat, is_available, staff_id FROM dining_table \
                   WHERE ($1::smallint IS NULL OR is_available = $1) \
                   ORDER BY table_id DESC";
        let flag = status.map(|s| s.flag().value());
        tracing::debug!(sql = %sql, is_available = ?flag, "query");
        let rows = sqlx::query_as::<_, DiningTable>(sql).bind(flag).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn get(pool: &PgPool, table_id: &str) -> Result<Option<DiningTable>, AppError> {
        let sql = "SELECT table_id, table_seat, is_available, staff_id FROM dining_table WHERE table_id = $1";
        tracing::debug!(sql = %sql, table_id = %table_id, "query");
        let row = sqlx::query_as::<_, DiningTable>(sql)
            .bind(table_id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Conditional insert: an existing `table_ID` leaves the store untouched and yields `Conflict`.
    pub async fn create(pool: &PgPool, body: &TableCreate) -> Result<DiningTable, AppError> {
        let sql = "INSERT INTO dining_table (table_id, table_seat, is_available, staff_id) \
                   VALUES ($1, $2, $3, NULL) \
                   ON CONFLICT (table_id) DO NOTHING \
                   RETURNING table_id, table_seat, is_available, staff_id";
        tracing::debug!(sql = %sql, table_id = %body.table_id, "query");
        sqlx::query_as::<_, DiningTable>(sql)
            .bind(&body.table_id)
            .bind(body.table_seat)
            .bind(body.is_available.value())
            .fetch_optional(pool)
            .await
            .map_err(|e| constraint_error(e, "table"))?
            .ok_or_else(|| AppError::Conflict(format!("Table {} already exists", body.table_id)))
    }

    pub async fn delete(pool: &PgPool, table_id: &str) -> Result<DiningTable, AppError> {
        let sql = "DELETE FROM dining_table WHERE table_id = $1 \
                   RETURNING table_id, table_seat, is_available, staff_id";
        tracing::debug!(sql = %sql, table_id = %table_id, "query");
        sqlx::query_as::<_, DiningTable>(sql)
            .bind(table_id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Can not find value {table_id}")))
    }

    /// Overwrites seat count, availability and assigned staff in one statement.
    pub async fn update(
        pool: &PgPool,
        table_id: &str,
        table_seat: i32,
        is_available: Flag,
        staff_id: Option<&str>,
    ) -> Result<DiningTable, AppError> {
        let sql = "UPDATE dining_table SET table_seat = $2, is_available = $3, staff_id = $4 \
                   WHERE table_id = $1 \
                   RETURNING table_id, table_seat, is_available, staff_id";
        tracing::debug!(sql = %sql, table_id = %table_id, "query");
        sqlx::query_as::<_, DiningTable>(sql)
            .bind(table_id)
            .bind(table_seat)
            .bind(is_available.value())
            .bind(staff_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| constraint_error(e, "table"))?
            .ok_or_else(|| AppError::NotFound(format!("Can not find value {table_id}")))
    }

    /// Staff lookup and table update share one transaction; the staff row is held with
    /// `FOR SHARE` so it cannot vanish between the two statements.
    pub async fn switch_availability(
        pool: &PgPool,
        table_id: &str,
        staff_id: &str,
        is_available: Flag,
    ) -> Result<DiningTable, AppError> {
        let mut tx = pool.begin().await?;

        let staff_sql = "SELECT staff_id FROM staff WHERE staff_id = $1 FOR SHARE";
        tracing::debug!(sql = %staff_sql, staff_id = %staff_id, "query (tx)");
        let staff: Option<(String,)> = sqlx::query_as(staff_sql)
            .bind(staff_id)
            .fetch_optional(&mut *tx)
            .await?;
        if staff.is_none() {
            return Err(AppError::NotFound(format!("There is no staff ID with value {staff_id}")));
        }

        let sql = "UPDATE dining_table SET is_available = $2, staff_id = $3 WHERE table_id = $1 \
                   RETURNING table_id, table_seat, is_available, staff_id";
        tracing::debug!(sql = %sql, table_id = %table_id, "query (tx)");
        let row = sqlx::query_as::<_, DiningTable>(sql)
            .bind(table_id)
            .bind(is_available.value())
            .bind(staff_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Can not find value {table_id}")))?;

        tx.commit().await?;
        Ok(row)
    }
}
