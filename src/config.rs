//! Runtime configuration read from the environment (a `.env` file is honoured by the binaries).

use crate::error::ConfigError;
use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

#[derive(Clone, Debug)]
pub struct Config {
    /// PostgreSQL connection string for the API.
    pub database_url: String,
    pub db_max_connections: u32,
    /// Bind address of the backend API.
    pub api_addr: String,
    /// Bind address of the admin frontend.
    pub admin_addr: String,
    /// Base URL the admin proxy calls, e.g. `http://127.0.0.1:3000/api/`.
    pub api_url: String,
    /// Root of the public upload tree; product images land in `<upload_dir>/pimg/<pid>/`.
    pub upload_dir: PathBuf,
    pub http_timeout: Duration,
    /// Offset applied when formatting dates for admin pages.
    pub display_utc_offset_hours: i32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            database_url: load("DATABASE_URL", "postgres://localhost/restaurant")?,
            db_max_connections: load("DB_MAX_CONNECTIONS", "5")?,
            api_addr: load("API_ADDR", "0.0.0.0:3000")?,
            admin_addr: load("ADMIN_ADDR", "0.0.0.0:8080")?,
            api_url: normalize_base_url(load("API_URL", "http://127.0.0.1:3000/api/")?),
            upload_dir: load::<String>("UPLOAD_DIR", "public/uploads")?.into(),
            http_timeout: Duration::from_secs(load("HTTP_TIMEOUT_SECS", "10")?),
            display_utc_offset_hours: load("DISPLAY_UTC_OFFSET_HOURS", "7")?,
        })
    }
}

fn load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        tracing::info!("{key} not set, using default: {default}");
        default.to_string()
    });
    raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        message: e.to_string(),
    })
}

/// Backend paths are joined onto the base URL, so it must end with a slash.
pub fn normalize_base_url(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        assert_eq!(normalize_base_url("http://api:3000/api".into()), "http://api:3000/api/");
        assert_eq!(normalize_base_url("http://api:3000/api/".into()), "http://api:3000/api/");
    }

    #[test]
    fn invalid_number_is_reported_with_key() {
        env::set_var("RM_TEST_BAD_NUMBER", "many");
        let err = load::<u32>("RM_TEST_BAD_NUMBER", "5").unwrap_err();
        assert!(err.to_string().contains("RM_TEST_BAD_NUMBER"));
    }
}
