//! Routers for the API and the admin frontend.

pub mod admin;
pub mod api;
pub mod health;

pub use admin::admin_routes;
pub use api::api_routes;
pub use health::{admin_health_routes, api_health_routes};
