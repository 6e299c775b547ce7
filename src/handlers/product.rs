//! `/api/products` handlers.

use super::ApiJson;
use crate::error::AppError;
use crate::models::{ProductCreate, ProductFields, StatusSwitch};
use crate::response::{success_created, success_many, success_one};
use crate::service::ProductService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = ProductService::list(&state.pool).await?;
    Ok(success_many("List all product", rows))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(pid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let row = ProductService::get(&state.pool, &pid)
        .await?
        .ok_or_else(|| AppError::NotFound("No content".into()))?;
    Ok(success_one(format!("Content of product {pid}"), row))
}

pub async fn create_product(
    State(state): State<AppState>,
    WithRejection(Json(body), _): ApiJson<ProductCreate>,
) -> Result<impl IntoResponse, AppError> {
    let row = ProductService::create(&state.pool, &body).await?;
    tracing::info!(product_id = %row.product_id, "product created");
    Ok(success_created("Add product successfully", row))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(pid): Path<String>,
    WithRejection(Json(body), _): ApiJson<ProductFields>,
) -> Result<impl IntoResponse, AppError> {
    let row = ProductService::update(&state.pool, &pid, &body).await?;
    Ok(success_one("Update product successfully", row))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(pid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let row = ProductService::delete(&state.pool, &pid).await?;
    tracing::info!(product_id = %pid, "product deleted");
    Ok(success_one(format!("Delete product {pid} successfully"), row))
}

pub async fn switch_product_status(
    State(state): State<AppState>,
    Path(pid): Path<String>,
    WithRejection(Json(body), _): ApiJson<StatusSwitch>,
) -> Result<impl IntoResponse, AppError> {
    let row = ProductService::switch_status(&state.pool, &pid, body.is_available).await?;
    Ok(success_one(format!("Success change availability {pid}"), row))
}
