//! Multipart product form posted by the create/update pages.

use crate::error::ProxyError;
use crate::models::{Flag, ProductCategory, ProductFields};
use axum::extract::Multipart;

pub struct ImageFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

#[derive(Default)]
pub struct ProductForm {
    pub pname: String,
    pub category: String,
    pub price: String,
    pub priority: String,
    pub is_available: Option<String>,
    /// Public path of the image currently stored, sent back by the update page.
    pub oldpath: Option<String>,
    pub image: Option<ImageFile>,
}

impl ProductForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ProxyError> {
        let mut form = ProductForm::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ProxyError::Multipart(e.to_string()))?
        {
            let name = field.name().unwrap_or_default().to_string();
            if name == "pimg" {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(|e| ProxyError::Multipart(e.to_string()))?;
                // Browsers send an empty part when no file was picked.
                if !bytes.is_empty() {
                    form.image = Some(ImageFile {
                        filename,
                        bytes: bytes.to_vec(),
                    });
                }
                continue;
            }
            let value = field.text().await.map_err(|e| ProxyError::Multipart(e.to_string()))?;
            match name.as_str() {
                "pname" => form.pname = value,
                "category" => form.category = value,
                "price" => form.price = value,
                "priority" => form.priority = value,
                "is_available" => form.is_available = Some(value),
                "oldpath" => form.oldpath = Some(value).filter(|s| !s.is_empty()),
                _ => {}
            }
        }
        Ok(form)
    }

    /// Backend fields. Availability is forwarded only when the form posted it.
    pub fn to_fields(&self, image_link: Option<String>) -> Result<ProductFields, ProxyError> {
        let bad = |what: &str, raw: &str| ProxyError::Multipart(format!("invalid {what}: {raw:?}"));
        if self.pname.trim().is_empty() {
            return Err(ProxyError::Multipart("product name is required".into()));
        }
        let product_category =
            ProductCategory::try_from(self.category.clone()).map_err(|_| bad("category", &self.category))?;
        let product_price = parse_or_zero(&self.price).ok_or_else(|| bad("price", &self.price))?;
        let product_priority = parse_or_zero(&self.priority).ok_or_else(|| bad("priority", &self.priority))?;
        Ok(ProductFields {
            product_name: self.pname.trim().to_string(),
            image_link,
            product_category,
            product_price,
            product_priority,
            is_available: self.is_available.as_deref().map(Flag::parse),
        })
    }
}

fn parse_or_zero<T: std::str::FromStr + Default>(raw: &str) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        Some(T::default())
    } else {
        raw.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ProductForm {
        ProductForm {
            pname: " Hotpot ".into(),
            category: "buffet".into(),
            price: "299000".into(),
            priority: "".into(),
            ..Default::default()
        }
    }

    #[test]
    fn fields_from_form() {
        let f = form().to_fields(Some("/uploads/pimg/P1/a.png".into())).unwrap();
        assert_eq!(f.product_name, "Hotpot");
        assert_eq!(f.product_price, 299000);
        assert_eq!(f.product_priority, 0);
        assert_eq!(f.is_available, None);
    }

    #[test]
    fn posted_availability_is_forwarded() {
        let mut posted = form();
        posted.is_available = Some("off".into());
        assert_eq!(posted.to_fields(None).unwrap().is_available, Some(Flag::OFF));
    }

    #[test]
    fn bad_price_or_category_is_rejected() {
        let mut bad = form();
        bad.price = "cheap".into();
        assert!(bad.to_fields(None).is_err());
        let mut bad = form();
        bad.category = "drinks".into();
        assert!(bad.to_fields(None).is_err());
    }
}
