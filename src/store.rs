//! Opening the store: the database and the three entity tables are created when missing.
//! Idempotent; this is not a migration system.

use crate::config::Config;
use crate::error::{ConfigError, StoreError};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};

/// Maintenance database every PostgreSQL server has; `CREATE DATABASE` runs from there.
const MAINTENANCE_DB: &str = "postgres";

const TABLE_DDL: &[(&str, &str)] = &[
    (
        "staff",
        r#"
        CREATE TABLE IF NOT EXISTS staff (
            staff_id TEXT PRIMARY KEY,
            staff_name TEXT NOT NULL,
            join_date TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            roles TEXT NOT NULL DEFAULT 'staff',
            image_link TEXT,
            is_available SMALLINT NOT NULL DEFAULT 1 CHECK (is_available IN (0, 1))
        )
        "#,
    ),
    (
        "dining_table",
        r#"
        CREATE TABLE IF NOT EXISTS dining_table (
            table_id TEXT PRIMARY KEY,
            table_seat INTEGER NOT NULL,
            is_available SMALLINT NOT NULL DEFAULT 1 CHECK (is_available IN (0, 1)),
            staff_id TEXT REFERENCES staff (staff_id) ON DELETE SET NULL
        )
        "#,
    ),
    (
        "product",
        r#"
        CREATE TABLE IF NOT EXISTS product (
            product_id TEXT PRIMARY KEY,
            product_name TEXT NOT NULL,
            image_link TEXT,
            product_category TEXT NOT NULL CHECK (product_category IN ('buffet', 'alacarte', 'extra')),
            product_price BIGINT NOT NULL DEFAULT 0,
            product_priority INTEGER NOT NULL DEFAULT 0,
            is_available SMALLINT NOT NULL DEFAULT 1 CHECK (is_available IN (0, 1))
        )
        "#,
    ),
];

/// Connects to `DATABASE_URL`, creating the database and the entity tables first when
/// they are missing.
pub async fn open_pool(config: &Config) -> Result<PgPool, StoreError> {
    let target = connect_options(&config.database_url)?;
    if let Some((maintenance, name)) = maintenance_target(&target) {
        create_database_if_missing(maintenance, &name).await?;
    }
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(target)
        .await?;
    ensure_tables(&pool).await?;
    tracing::info!(max_connections = config.db_max_connections, "store ready");
    Ok(pool)
}

/// Create `staff`, `dining_table` and `product` if they do not exist. Staff goes first
/// because `dining_table.staff_id` references it.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), sqlx::Error> {
    for (name, ddl) in TABLE_DDL {
        tracing::debug!(table = %name, "ensure table");
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Entity tables not visible on the pool's search path.
pub async fn missing_tables(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    let names: Vec<String> = TABLE_DDL.iter().map(|(name, _)| name.to_string()).collect();
    sqlx::query_scalar("SELECT name FROM unnest($1::text[]) AS t(name) WHERE to_regclass(name) IS NULL")
        .bind(names)
        .fetch_all(pool)
        .await
}

fn connect_options(url: &str) -> Result<PgConnectOptions, ConfigError> {
    url.parse().map_err(|e: sqlx::Error| ConfigError::Invalid {
        key: "DATABASE_URL",
        message: e.to_string(),
    })
}

/// Options for the maintenance database on the same server, paired with the database
/// name to create. `None` when the URL already points at the maintenance database.
fn maintenance_target(target: &PgConnectOptions) -> Option<(PgConnectOptions, String)> {
    let name = target.get_database().filter(|name| *name != MAINTENANCE_DB)?.to_string();
    Some((target.clone().database(MAINTENANCE_DB), name))
}

async fn create_database_if_missing(maintenance: PgConnectOptions, name: &str) -> Result<(), sqlx::Error> {
    let mut conn = maintenance.connect().await?;
    let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(name)
        .fetch_one(&mut conn)
        .await?;
    if exists {
        return Ok(());
    }
    tracing::info!(database = %name, "creating database");
    match sqlx::query(&format!("CREATE DATABASE {}", quote_ident(name)))
        .execute(&mut conn)
        .await
    {
        // Another instance created it between the check and here.
        Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some("42P04") => Ok(()),
        other => other.map(drop),
    }
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maintenance_target_keeps_server_and_swaps_database() {
        let target = connect_options("postgres://u:p@db:5432/restaurant?sslmode=disable").unwrap();
        let (maintenance, name) = maintenance_target(&target).unwrap();
        assert_eq!(name, "restaurant");
        assert_eq!(maintenance.get_database(), Some(MAINTENANCE_DB));
        assert_eq!(maintenance.get_host(), "db");
        assert_eq!(maintenance.get_port(), 5432);
    }

    #[test]
    fn maintenance_database_itself_needs_no_creation() {
        let target = connect_options("postgres://u:p@db:5432/postgres").unwrap();
        assert!(maintenance_target(&target).is_none());
    }

    #[test]
    fn bad_url_is_a_config_error() {
        let err = connect_options("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DATABASE_URL", .. }));
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident(r#"we"ird"#), r#""we""ird""#);
    }
}
