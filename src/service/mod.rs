//! Parameterized SQL for each entity. Every write is a single statement (or one
//! transaction), so no check-then-act window is left open.

mod product;
mod staff;
mod table;

pub use product::ProductService;
pub use staff::StaffService;
pub use table::TableService;

use crate::error::AppError;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Turn constraint violations into client errors; everything else stays a database error.
fn constraint_error(err: sqlx::Error, what: &str) -> AppError {
    let code = err
        .as_database_error()
        .and_then(|d| d.code())
        .map(|c| c.into_owned());
    match code.as_deref() {
        Some(UNIQUE_VIOLATION) => AppError::Conflict(format!("{what} already exists")),
        Some(FOREIGN_KEY_VIOLATION) => AppError::BadRequest(format!("{what} references a missing row")),
        _ => AppError::Db(err),
    }
}
