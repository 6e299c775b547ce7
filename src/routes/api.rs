//! Backend API routes: `/api/tables`, `/api/products`, `/api/users`.

use crate::handlers::{product, staff, table};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn table_routes() -> Router<AppState> {
    Router::new()
        .route("/get-tables", get(table::list_tables))
        .route("/get-tables/:status", get(table::list_tables_by_status))
        .route("/get-table/:tid", get(table::get_table))
        .route("/create", post(table::create_table))
        .route("/delete/:tid", delete(table::delete_table))
        .route("/update/:tid", put(table::update_table))
        .route("/switch-available-status/:tid", put(table::switch_availability))
}

pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/storage", get(product::list_products))
        .route("/getOne/:pid", get(product::get_product))
        .route("/create", post(product::create_product))
        .route("/update/:pid", put(product::update_product))
        .route("/delete/:pid", delete(product::delete_product))
        .route("/switch-status/:pid", put(product::switch_product_status))
}

pub fn staff_routes() -> Router<AppState> {
    Router::new()
        .route("/getUsers", get(staff::list_staff))
        .route("/getUser/:uid", get(staff::get_staff))
        .route("/create", post(staff::create_staff))
        .route("/switch-status/:uid", put(staff::switch_staff_status))
}

/// Everything under `/api`.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .nest("/api/tables", table_routes())
        .nest("/api/products", product_routes())
        .nest("/api/users", staff_routes())
        .with_state(state)
}
