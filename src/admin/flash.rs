//! One-shot flash messages carried across a redirect in a cookie.
//!
//! The cookie holds a message key, never free text, so the page can only show messages
//! defined here.

use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Serialize;

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashMessage {
    ProductCreated,
    ProductCreateFailed,
    ProductUpdated,
    ProductUpdateFailed,
    ProductDeleted,
    ProductDeleteFailed,
    ProductNotFound,
    ProductStatusFailed,
    ProductsUnavailable,
    StaffNotFound,
    StaffListFailed,
    StaffStatusFailed,
}

impl FlashMessage {
    const ALL: [FlashMessage; 12] = [
        FlashMessage::ProductCreated,
        FlashMessage::ProductCreateFailed,
        FlashMessage::ProductUpdated,
        FlashMessage::ProductUpdateFailed,
        FlashMessage::ProductDeleted,
        FlashMessage::ProductDeleteFailed,
        FlashMessage::ProductNotFound,
        FlashMessage::ProductStatusFailed,
        FlashMessage::ProductsUnavailable,
        FlashMessage::StaffNotFound,
        FlashMessage::StaffListFailed,
        FlashMessage::StaffStatusFailed,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FlashMessage::ProductCreated => "product_created",
            FlashMessage::ProductCreateFailed => "product_create_failed",
            FlashMessage::ProductUpdated => "product_updated",
            FlashMessage::ProductUpdateFailed => "product_update_failed",
            FlashMessage::ProductDeleted => "product_deleted",
            FlashMessage::ProductDeleteFailed => "product_delete_failed",
            FlashMessage::ProductNotFound => "product_not_found",
            FlashMessage::ProductStatusFailed => "product_status_failed",
            FlashMessage::ProductsUnavailable => "products_unavailable",
            FlashMessage::StaffNotFound => "staff_not_found",
            FlashMessage::StaffListFailed => "staff_list_failed",
            FlashMessage::StaffStatusFailed => "staff_status_failed",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }

    pub fn is_success(self) -> bool {
        matches!(
            self,
            FlashMessage::ProductCreated | FlashMessage::ProductUpdated | FlashMessage::ProductDeleted
        )
    }

    pub fn text(self) -> &'static str {
        match self {
            FlashMessage::ProductCreated => "Product created successfully",
            FlashMessage::ProductCreateFailed => "Failed to create product",
            FlashMessage::ProductUpdated => "Product updated successfully",
            FlashMessage::ProductUpdateFailed => "Failed to update product",
            FlashMessage::ProductDeleted => "Product deleted successfully",
            FlashMessage::ProductDeleteFailed => "Failed to delete product",
            FlashMessage::ProductNotFound => "Product information not found",
            FlashMessage::ProductStatusFailed => "Failed to change product status",
            FlashMessage::ProductsUnavailable => "Could not load products",
            FlashMessage::StaffNotFound => "Staff information not found",
            FlashMessage::StaffListFailed => "No staff found",
            FlashMessage::StaffStatusFailed => "Failed to change staff status",
        }
    }
}

/// Flash slots exposed to a rendered page; empty strings when nothing is pending.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Flashes {
    pub success: String,
    pub error: String,
}

/// Reads and clears the pending flash.
pub fn take(jar: CookieJar) -> (CookieJar, Flashes) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, Flashes::default());
    };
    let mut flashes = Flashes::default();
    if let Some(msg) = FlashMessage::from_key(cookie.value()) {
        if msg.is_success() {
            flashes.success = msg.text().to_string();
        } else {
            flashes.error = msg.text().to_string();
        }
    }
    (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), flashes)
}

pub fn set(jar: CookieJar, msg: FlashMessage) -> CookieJar {
    jar.add(Cookie::build((FLASH_COOKIE, msg.key())).path("/").http_only(true))
}

/// Redirect that leaves a flash for the next page.
pub fn redirect_with(jar: CookieJar, to: &str, msg: FlashMessage) -> Response {
    (set(jar, msg), Redirect::to(to)).into_response()
}
