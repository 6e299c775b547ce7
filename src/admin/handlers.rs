//! `/admin` pages. Each one is one or two backend calls, a reshape, then a page or a
//! redirect carrying a flash.

use super::flash::{self, FlashMessage};
use super::form::ProductForm;
use super::render::Page;
use super::view::{categories, ProductPreview, ProductView, StaffView};
use super::AdminState;
use crate::error::ProxyError;
use crate::models::{Flag, ProductCreate};
use axum::{
    extract::{Multipart, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

const STORAGE: &str = "/admin/storage-product";
const STAFF_LIST: &str = "/admin/list-staffs";
const DASHBOARD: &str = "/admin";

fn log_failure(action: &str, err: &ProxyError) {
    tracing::warn!(action = %action, error = %err, "admin action failed");
}

pub async fn dashboard(jar: CookieJar) -> Response {
    let (jar, flashes) = flash::take(jar);
    (jar, Page::new("pages/dashboard", "Dashboard").with_flash(flashes)).into_response()
}

pub async fn storage_product(State(state): State<AdminState>, jar: CookieJar) -> Response {
    match state.backend.list_products().await {
        Ok(products) => {
            let (jar, flashes) = flash::take(jar);
            let products: Vec<ProductView> = products.into_iter().map(ProductView::from).collect();
            let page = Page::new("pages/products/storage", "Product storage")
                .with("products", products)
                .with_flash(flashes);
            (jar, page).into_response()
        }
        Err(e) => {
            log_failure("list products", &e);
            flash::redirect_with(jar, DASHBOARD, FlashMessage::ProductsUnavailable)
        }
    }
}

pub async fn create_product_page(jar: CookieJar) -> Response {
    let (jar, flashes) = flash::take(jar);
    let page = Page::new("pages/products/create", "Add product")
        .with("categories", categories())
        .with_flash(flashes);
    (jar, page).into_response()
}

/// Saves the image under a fresh product ID, then creates the product. The image is
/// removed again when the backend refuses.
pub async fn create_product(State(state): State<AdminState>, jar: CookieJar, multipart: Multipart) -> Response {
    let pid = uuid::Uuid::new_v4().simple().to_string();
    match create_product_inner(&state, &pid, multipart).await {
        Ok(()) => {
            tracing::info!(pid = %pid, "product created from admin");
            flash::redirect_with(jar, STORAGE, FlashMessage::ProductCreated)
        }
        Err(e) => {
            log_failure("create product", &e);
            if let Err(e) = state.uploads.remove_product_dir(&pid).await {
                tracing::warn!(pid = %pid, error = %e, "could not clean up upload dir");
            }
            flash::redirect_with(jar, STORAGE, FlashMessage::ProductCreateFailed)
        }
    }
}

async fn create_product_inner(state: &AdminState, pid: &str, multipart: Multipart) -> Result<(), ProxyError> {
    let form = ProductForm::from_multipart(multipart).await?;
    let mut fields = form.to_fields(None)?;
    fields.is_available.get_or_insert(Flag::ON);
    if let Some(img) = &form.image {
        fields.image_link = Some(state.uploads.save_product_image(pid, &img.filename, &img.bytes).await?);
    }
    let body = ProductCreate {
        product_id: pid.to_string(),
        fields,
    };
    state.backend.create_product(&body).await
}

pub async fn delete_product(State(state): State<AdminState>, jar: CookieJar, Path(pid): Path<String>) -> Response {
    match state.backend.delete_product(&pid).await {
        Ok(()) => {
            if let Err(e) = state.uploads.remove_product_dir(&pid).await {
                tracing::warn!(pid = %pid, error = %e, "could not remove product images");
            }
            flash::redirect_with(jar, STORAGE, FlashMessage::ProductDeleted)
        }
        Err(e) => {
            log_failure("delete product", &e);
            flash::redirect_with(jar, STORAGE, FlashMessage::ProductDeleteFailed)
        }
    }
}

pub async fn update_product_page(State(state): State<AdminState>, jar: CookieJar, Path(pid): Path<String>) -> Response {
    match state.backend.get_product(&pid).await {
        Ok(product) => {
            let (jar, flashes) = flash::take(jar);
            let page = Page::new("pages/products/update", "Edit product")
                .with("categories", categories())
                .with("data", ProductView::from(product))
                .with_flash(flashes);
            (jar, page).into_response()
        }
        Err(e) => {
            log_failure("load product", &e);
            flash::redirect_with(jar, STORAGE, FlashMessage::ProductNotFound)
        }
    }
}

/// A new image replaces the one at `oldpath`. The old file goes only once the backend has
/// accepted the update; the new one goes if it refuses.
pub async fn update_product(
    State(state): State<AdminState>,
    jar: CookieJar,
    Path(pid): Path<String>,
    multipart: Multipart,
) -> Response {
    match update_product_inner(&state, &pid, multipart).await {
        Ok(()) => flash::redirect_with(jar, STORAGE, FlashMessage::ProductUpdated),
        Err(e) => {
            log_failure("update product", &e);
            flash::redirect_with(jar, STORAGE, FlashMessage::ProductUpdateFailed)
        }
    }
}

async fn update_product_inner(state: &AdminState, pid: &str, multipart: Multipart) -> Result<(), ProxyError> {
    let form = ProductForm::from_multipart(multipart).await?;
    let mut fields = form.to_fields(form.oldpath.clone())?;
    let saved = match &form.image {
        Some(img) => Some(state.uploads.save_product_image(pid, &img.filename, &img.bytes).await?),
        None => None,
    };
    if saved.is_some() {
        fields.image_link = saved.clone();
    }
    if let Err(e) = state.backend.update_product(pid, &fields).await {
        if let Some(new) = &saved {
            discard_image(state, new).await;
        }
        return Err(e);
    }
    if let (Some(_), Some(old)) = (&saved, &form.oldpath) {
        discard_image(state, old).await;
    }
    Ok(())
}

/// Image cleanup never changes the outcome of the action it follows.
async fn discard_image(state: &AdminState, public_path: &str) {
    if let Err(e) = state.uploads.remove_public_file(public_path).await {
        tracing::warn!(path = %public_path, error = %e, "could not remove product image");
    }
}

pub async fn preview_product(State(state): State<AdminState>, jar: CookieJar, Path(pid): Path<String>) -> Response {
    match state.backend.get_product(&pid).await {
        Ok(product) => {
            let (jar, flashes) = flash::take(jar);
            let page = Page::new("pages/products/preview", "Product preview")
                .with("data", ProductPreview::from(ProductView::from(product)))
                .with_flash(flashes);
            (jar, page).into_response()
        }
        Err(e) => {
            log_failure("preview product", &e);
            flash::redirect_with(jar, STORAGE, FlashMessage::ProductNotFound)
        }
    }
}

pub async fn status_product(
    State(state): State<AdminState>,
    jar: CookieJar,
    Path((pid, is_available)): Path<(String, String)>,
) -> Response {
    match state.backend.switch_product_status(&pid, Flag::parse(&is_available)).await {
        Ok(()) => Redirect::to(STORAGE).into_response(),
        Err(e) => {
            log_failure("switch product status", &e);
            flash::redirect_with(jar, STORAGE, FlashMessage::ProductStatusFailed)
        }
    }
}

pub async fn preview_staff(State(state): State<AdminState>, jar: CookieJar, Path(uid): Path<String>) -> Response {
    match state.backend.get_staff(&uid).await {
        Ok(staff) => {
            let (jar, flashes) = flash::take(jar);
            let page = Page::new("pages/staffs/preview", "Staff information")
                .with("data", StaffView::new(staff, state.display_offset))
                .with_flash(flashes);
            (jar, page).into_response()
        }
        Err(e) => {
            log_failure("preview staff", &e);
            flash::redirect_with(jar, STAFF_LIST, FlashMessage::StaffNotFound)
        }
    }
}

pub async fn list_staffs(State(state): State<AdminState>, jar: CookieJar) -> Response {
    match state.backend.list_staff().await {
        Ok(staff) => {
            let (jar, flashes) = flash::take(jar);
            let data: Vec<StaffView> = staff
                .into_iter()
                .map(|s| StaffView::new(s, state.display_offset))
                .collect();
            let page = Page::new("pages/staffs/list", "Staff list")
                .with("data", data)
                .with_flash(flashes);
            (jar, page).into_response()
        }
        Err(e) => {
            log_failure("list staff", &e);
            flash::redirect_with(jar, DASHBOARD, FlashMessage::StaffListFailed)
        }
    }
}

pub async fn status_staff(
    State(state): State<AdminState>,
    jar: CookieJar,
    Path((uid, is_available)): Path<(String, String)>,
) -> Response {
    match state.backend.switch_staff_status(&uid, Flag::parse(&is_available)).await {
        Ok(()) => Redirect::to(STAFF_LIST).into_response(),
        Err(e) => {
            log_failure("switch staff status", &e);
            flash::redirect_with(jar, STAFF_LIST, FlashMessage::StaffStatusFailed)
        }
    }
}
