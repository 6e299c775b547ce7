//! `/api/tables` handlers.

use super::ApiJson;
use crate::error::AppError;
use crate::models::{AvailabilitySwitch, TableCreate, TableStatus, TableUpdate};
use crate::response::{success_created, success_many, success_one};
use crate::service::TableService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

pub async fn list_tables(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = TableService::list(&state.pool, None).await?;
    Ok(success_many("List all table", rows))
}

/// Rejects anything but `available`/`unavailable` before querying.
pub async fn list_tables_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let status: TableStatus = status.parse()?;
    let rows = TableService::list(&state.pool, Some(status)).await?;
    Ok(success_many(format!("List all {} table(s)", status.as_str()), rows))
}

pub async fn get_table(
    State(state): State<AppState>,
    Path(tid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let row = TableService::get(&state.pool, &tid)
        .await?
        .ok_or_else(|| AppError::NotFound("No content".into()))?;
    Ok(success_one(format!("Content of table {tid}"), row))
}

pub async fn create_table(
    State(state): State<AppState>,
    WithRejection(Json(body), _): ApiJson<TableCreate>,
) -> Result<impl IntoResponse, AppError> {
    let row = TableService::create(&state.pool, &body).await?;
    tracing::info!(table_id = %row.table_id, "table created");
    Ok(success_created("Add table successfully", row))
}

pub async fn delete_table(
    State(state): State<AppState>,
    Path(tid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let row = TableService::delete(&state.pool, &tid).await?;
    tracing::info!(table_id = %tid, "table deleted");
    Ok(success_one(format!("Delete table {tid} successfully"), row))
}

pub async fn update_table(
    State(state): State<AppState>,
    Path(tid): Path<String>,
    WithRejection(Json(body), _): ApiJson<TableUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let row = TableService::update(&state.pool, &tid, body.table_seat, body.is_available, body.staff_id()).await?;
    Ok(success_one("Update table successfully", row))
}

/// The staff ID is checked for presence here, so an empty one never reaches the store.
pub async fn switch_availability(
    State(state): State<AppState>,
    Path(tid): Path<String>,
    WithRejection(Json(body), _): ApiJson<AvailabilitySwitch>,
) -> Result<impl IntoResponse, AppError> {
    let staff_id = body.staff_id()?;
    let row = TableService::switch_availability(&state.pool, &tid, &staff_id, body.is_available).await?;
    tracing::info!(table_id = %tid, staff_id = %staff_id, is_available = row.is_available, "table availability switched");
    Ok(success_one(format!("Success change availability {tid}"), row))
}
