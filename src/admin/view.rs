//! View models handed to the admin pages.

use crate::models::{Product, ProductCategory, Staff};
use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
    pub pid: String,
    pub pname: String,
    pub pimg: Option<String>,
    pub category: ProductCategory,
    pub price: i64,
    pub priority: i32,
    pub is_available: bool,
}

impl From<Product> for ProductView {
    fn from(p: Product) -> Self {
        ProductView {
            pid: p.product_id,
            pname: p.product_name,
            pimg: p.image_link,
            category: p.product_category,
            price: p.product_price,
            priority: p.product_priority,
            is_available: p.is_available == 1,
        }
    }
}

/// Preview page shows no availability toggle.
#[derive(Debug, Clone, Serialize)]
pub struct ProductPreview {
    pub pid: String,
    pub pname: String,
    pub pimg: Option<String>,
    pub category: ProductCategory,
    pub price: i64,
    pub priority: i32,
}

impl From<ProductView> for ProductPreview {
    fn from(v: ProductView) -> Self {
        ProductPreview {
            pid: v.pid,
            pname: v.pname,
            pimg: v.pimg,
            category: v.category,
            price: v.price,
            priority: v.priority,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffView {
    pub uid: String,
    pub username: String,
    pub join_date: String,
    pub role: String,
    pub uimg: Option<String>,
    pub is_available: bool,
}

impl StaffView {
    pub fn new(s: Staff, offset: FixedOffset) -> Self {
        StaffView {
            uid: s.staff_id,
            username: s.staff_name,
            join_date: format_date(s.join_date, offset),
            role: s.roles,
            uimg: s.image_link,
            is_available: s.is_available == 1,
        }
    }
}

/// `HH:MM:SS DD/MM/YYYY` in the display offset, the way vi-VN locales print timestamps.
pub fn format_date(at: DateTime<Utc>, offset: FixedOffset) -> String {
    at.with_timezone(&offset).format("%H:%M:%S %d/%m/%Y").to_string()
}

/// Category list for the product forms.
pub fn categories() -> Vec<&'static str> {
    ProductCategory::ALL.iter().map(|c| c.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn product_fields_are_renamed() {
        let view = ProductView::from(Product {
            product_id: "P1".into(),
            product_name: "Hotpot".into(),
            image_link: Some("/uploads/pimg/P1/a.png".into()),
            product_category: ProductCategory::Buffet,
            product_price: 299000,
            product_priority: 1,
            is_available: 1,
        });
        assert_eq!(view.pid, "P1");
        assert_eq!(view.pname, "Hotpot");
        assert!(view.is_available);
    }

    #[test]
    fn dates_use_display_offset() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 20, 5, 7).unwrap();
        let plus7 = FixedOffset::east_opt(7 * 3600).unwrap();
        assert_eq!(format_date(at, plus7), "03:05:07 10/03/2024");
    }
}
