//! Typed HTTP client for the backend API, used by the admin pages.

use crate::error::ProxyError;
use crate::models::{Flag, Product, ProductCreate, ProductFields, Staff};
use crate::response::Envelope;
use reqwest::{Method, RequestBuilder, Url};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use std::time::Duration;

#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base: Url,
}

#[derive(Serialize)]
struct StatusBody {
    is_available: Flag,
}

impl BackendClient {
    /// `base` is the API root, e.g. `http://127.0.0.1:3000/api/`.
    pub fn new(base: &str, timeout: Duration) -> Result<Self, ProxyError> {
        let base = Url::parse(base).map_err(|e| ProxyError::Config(format!("API_URL: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ProxyError::Config(format!("API_URL is not a base URL: {base}")));
        }
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(BackendClient { http, base })
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, ProxyError> {
        self.fetch(Method::GET, &["products", "storage"]).await
    }

    pub async fn get_product(&self, pid: &str) -> Result<Product, ProxyError> {
        self.fetch(Method::GET, &["products", "getOne", pid]).await
    }

    pub async fn create_product(&self, body: &ProductCreate) -> Result<(), ProxyError> {
        let req = self.request(Method::POST, &["products", "create"])?.json(body);
        self.call::<IgnoredAny>(req).await.map(drop)
    }

    pub async fn update_product(&self, pid: &str, body: &ProductFields) -> Result<(), ProxyError> {
        let req = self.request(Method::PUT, &["products", "update", pid])?.json(body);
        self.call::<IgnoredAny>(req).await.map(drop)
    }

    pub async fn delete_product(&self, pid: &str) -> Result<(), ProxyError> {
        let req = self.request(Method::DELETE, &["products", "delete", pid])?;
        self.call::<IgnoredAny>(req).await.map(drop)
    }

    pub async fn switch_product_status(&self, pid: &str, is_available: Flag) -> Result<(), ProxyError> {
        let req = self
            .request(Method::PUT, &["products", "switch-status", pid])?
            .json(&StatusBody { is_available });
        self.call::<IgnoredAny>(req).await.map(drop)
    }

    pub async fn list_staff(&self) -> Result<Vec<Staff>, ProxyError> {
        self.fetch(Method::GET, &["users", "getUsers"]).await
    }

    pub async fn get_staff(&self, uid: &str) -> Result<Staff, ProxyError> {
        self.fetch(Method::GET, &["users", "getUser", uid]).await
    }

    pub async fn switch_staff_status(&self, uid: &str, is_available: Flag) -> Result<(), ProxyError> {
        let req = self
            .request(Method::PUT, &["users", "switch-status", uid])?
            .json(&StatusBody { is_available });
        self.call::<IgnoredAny>(req).await.map(drop)
    }

    /// Asks the API's `/ready`, which sits at the server root rather than under the API base.
    pub async fn ready(&self) -> Result<(), ProxyError> {
        let url = self
            .base
            .join("/ready")
            .map_err(|e| ProxyError::Config(format!("API_URL: {e}")))?;
        self.call::<IgnoredAny>(self.http.get(url)).await.map(drop)
    }

    /// Appends percent-encoded path segments to the base URL.
    fn url(&self, segments: &[&str]) -> Result<Url, ProxyError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ProxyError::Config(format!("API_URL is not a base URL: {}", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ProxyError> {
        Ok(self.http.request(method, self.url(segments)?))
    }

    async fn fetch<T: DeserializeOwned>(&self, method: Method, segments: &[&str]) -> Result<T, ProxyError> {
        let req = self.request(method, segments)?;
        self.call(req)
            .await?
            .ok_or_else(|| ProxyError::Decode("response has no data".into()))
    }

    /// Sends the request and unwraps the envelope; `success: false` becomes `ProxyError::Backend`.
    async fn call<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<Option<T>, ProxyError> {
        let res = req.send().await?;
        let status = res.status();
        let url = res.url().clone();
        let envelope: Envelope<T> = res
            .json()
            .await
            .map_err(|e| ProxyError::Decode(format!("{url}: {e}")))?;
        if !envelope.success {
            return Err(ProxyError::Backend {
                status: status.as_u16(),
                message: envelope.message,
            });
        }
        tracing::debug!(%url, status = status.as_u16(), "backend call ok");
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_are_encoded_and_joined() {
        let client = BackendClient::new("http://api.local:3000/api/", Duration::from_secs(1)).unwrap();
        let url = client.url(&["products", "getOne", "a b/c"]).unwrap();
        assert_eq!(url.as_str(), "http://api.local:3000/api/products/getOne/a%20b%2Fc");
    }

    #[test]
    fn base_without_trailing_slash_still_joins() {
        let client = BackendClient::new("http://api.local:3000/api", Duration::from_secs(1)).unwrap();
        let url = client.url(&["users", "getUsers"]).unwrap();
        assert_eq!(url.as_str(), "http://api.local:3000/api/users/getUsers");
    }

    #[test]
    fn readiness_lives_at_server_root() {
        let client = BackendClient::new("http://api.local:3000/api/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base.join("/ready").unwrap().as_str(), "http://api.local:3000/ready");
    }
}
