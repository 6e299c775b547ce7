//! Restaurant manager: REST backend over tables, products and staff, plus the admin
//! frontend that proxies to it.

pub mod admin;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use admin::AdminState;
pub use config::Config;
pub use error::{AppError, ConfigError, ProxyError, StoreError};
pub use response::{success_many, success_one, Envelope};
pub use routes::{admin_health_routes, admin_routes, api_health_routes, api_routes};
pub use state::AppState;
pub use store::{ensure_tables, open_pool};
