//! HTTP handlers for the backend API.

pub mod product;
pub mod staff;
pub mod table;

use crate::error::AppError;
use axum::Json;
use axum_extra::extract::WithRejection;

/// JSON request body whose rejection is reported as `AppError::BadRequest`.
pub type ApiJson<T> = WithRejection<Json<T>, AppError>;
