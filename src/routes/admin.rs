//! Admin frontend routes plus static serving of uploaded images.

use crate::admin::{handlers, upload::PUBLIC_PREFIX, AdminState};
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::{limit::RequestBodyLimitLayer, services::ServeDir};

/// Product images are posted through the admin forms.
const UPLOAD_LIMIT: usize = 10 * 1024 * 1024;

pub fn admin_routes(state: AdminState) -> Router {
    let uploads = ServeDir::new(state.uploads.root().to_path_buf());
    Router::new()
        .route("/admin", get(handlers::dashboard))
        .route("/admin/storage-product", get(handlers::storage_product))
        .route(
            "/admin/create-product",
            get(handlers::create_product_page).post(handlers::create_product),
        )
        .route("/admin/delete-product/:pid", get(handlers::delete_product))
        .route(
            "/admin/update-product/:pid",
            get(handlers::update_product_page).post(handlers::update_product),
        )
        .route("/admin/preview-product/:pid", get(handlers::preview_product))
        .route("/admin/status-product/:pid/:is_available", get(handlers::status_product))
        .route("/admin/preview-staff/:uid", get(handlers::preview_staff))
        .route("/admin/list-staffs", get(handlers::list_staffs))
        .route("/admin/status-staff/:uid/:is_available", get(handlers::status_staff))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(UPLOAD_LIMIT))
        .with_state(state)
        .nest_service(PUBLIC_PREFIX, uploads)
}
