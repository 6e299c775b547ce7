//! Product model.

use super::Flag;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Buffet,
    Alacarte,
    Extra,
}

#[derive(Error, Debug)]
#[error("unknown product category: {0}")]
pub struct UnknownCategory(pub String);

impl ProductCategory {
    pub const ALL: [ProductCategory; 3] = [ProductCategory::Buffet, ProductCategory::Alacarte, ProductCategory::Extra];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductCategory::Buffet => "buffet",
            ProductCategory::Alacarte => "alacarte",
            ProductCategory::Extra => "extra",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ProductCategory {
    type Error = UnknownCategory;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ProductCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == value)
            .ok_or(UnknownCategory(value))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    #[serde(rename = "product_ID")]
    pub product_id: String,
    pub product_name: String,
    pub image_link: Option<String>,
    #[sqlx(try_from = "String")]
    pub product_category: ProductCategory,
    pub product_price: i64,
    pub product_priority: i32,
    pub is_available: i16,
}

/// Editable product columns, shared by create and update bodies. A missing
/// `is_available` means 0 on create and "leave as is" on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductFields {
    pub product_name: String,
    #[serde(default)]
    pub image_link: Option<String>,
    pub product_category: ProductCategory,
    #[serde(default)]
    pub product_price: i64,
    #[serde(default)]
    pub product_priority: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<Flag>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    #[serde(rename = "product_ID")]
    pub product_id: String,
    #[serde(flatten)]
    pub fields: ProductFields,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_from_store_text() {
        assert_eq!(ProductCategory::try_from("alacarte".to_string()).unwrap(), ProductCategory::Alacarte);
        assert!(ProductCategory::try_from("drinks".to_string()).is_err());
    }

    #[test]
    fn create_body_flattens_fields() {
        let body: ProductCreate = serde_json::from_value(json!({
            "product_ID": "P1",
            "product_name": "Hotpot",
            "product_category": "buffet",
            "product_price": 299000,
            "is_available": "on"
        }))
        .unwrap();
        assert_eq!(body.product_id, "P1");
        assert_eq!(body.fields.product_category, ProductCategory::Buffet);
        assert_eq!(body.fields.product_priority, 0);
        assert_eq!(body.fields.is_available, Some(Flag::ON));
    }

    #[test]
    fn update_body_without_availability_omits_it() {
        let fields: ProductFields = serde_json::from_value(json!({
            "product_name": "Hotpot",
            "product_category": "extra"
        }))
        .unwrap();
        assert_eq!(fields.is_available, None);
        let back = serde_json::to_value(&fields).unwrap();
        assert!(back.get("is_available").is_none());
    }

    #[test]
    fn unknown_category_is_rejected() {
        let res = serde_json::from_value::<ProductFields>(json!({
            "product_name": "Soda",
            "product_category": "drinks"
        }));
        assert!(res.is_err());
    }
}
