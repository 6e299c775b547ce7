//! `/api/users` handlers.

use super::ApiJson;
use crate::error::AppError;
use crate::models::{StaffCreate, StatusSwitch};
use crate::response::{success_created, success_many, success_one};
use crate::service::StaffService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

pub async fn list_staff(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = StaffService::list(&state.pool).await?;
    Ok(success_many("List all staff", rows))
}

pub async fn get_staff(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let row = StaffService::get(&state.pool, &uid)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("There is no staff ID with value {uid}")))?;
    Ok(success_one(format!("Content of staff {uid}"), row))
}

pub async fn create_staff(
    State(state): State<AppState>,
    WithRejection(Json(body), _): ApiJson<StaffCreate>,
) -> Result<impl IntoResponse, AppError> {
    let row = StaffService::create(&state.pool, &body).await?;
    tracing::info!(staff_id = %row.staff_id, "staff created");
    Ok(success_created("Add staff successfully", row))
}

pub async fn switch_staff_status(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    WithRejection(Json(body), _): ApiJson<StatusSwitch>,
) -> Result<impl IntoResponse, AppError> {
    let row = StaffService::switch_status(&state.pool, &uid, body.is_available).await?;
    Ok(success_one(format!("Success change availability {uid}"), row))
}
