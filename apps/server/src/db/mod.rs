//! Database layer - repositories and data access

pub mod events;
pub mod filter;
pub mod next_event;
pub mod query;
pub mod races;
pub mod rows;
pub mod traits;

pub use events::EventRepository;
pub use filter::{FilterMap, EVENT_FILTERS, RACE_FILTERS, RACE_YEAR_FILTERS};
pub use query::{BindValue, SelectQuery};
pub use races::RaceRepository;
pub use traits::{EventSelection, EventStore, RaceStore};

use crate::{config::DatabaseConfig, metrics, Result};
use sqlx::{
    sqlite::{SqliteArguments, SqliteConnectOptions, SqlitePoolOptions, SqliteRow},
    query::Query,
    Sqlite, SqlitePool,
};
use std::{str::FromStr, time::Duration};

/// Open the shared connection pool.
///
/// The pool is created once at startup and handed to every repository.
pub async fn connect(config: &DatabaseConfig) -> std::result::Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .read_only(config.read_only)
        .busy_timeout(Duration::from_secs(config.busy_timeout_seconds));

    SqlitePoolOptions::new()
        .max_connections(config.pool_max_size)
        .acquire_timeout(Duration::from_secs(config.pool_timeout_seconds))
        .connect_with(options)
        .await
}

/// Cheap round trip used by the health endpoint.
pub async fn ping(pool: &SqlitePool) -> Result<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

fn bind_values<'q>(
    sql: &'q str,
    values: Vec<BindValue>,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    let mut query_builder = sqlx::query(sql);
    for value in values {
        query_builder = match value {
            BindValue::Text(v) => query_builder.bind(v),
            BindValue::Int(v) => query_builder.bind(v),
        };
    }
    query_builder
}

fn error_label(err: &sqlx::Error) -> &'static str {
    match err {
        sqlx::Error::RowNotFound => "row_not_found",
        sqlx::Error::PoolTimedOut => "pool_timeout",
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => "decode",
        sqlx::Error::Database(_) => "database",
        sqlx::Error::Io(_) => "io",
        _ => "other",
    }
}

fn observe<T>(
    kind: &'static str,
    result: std::result::Result<T, sqlx::Error>,
) -> std::result::Result<T, sqlx::Error> {
    if let Err(e) = &result {
        metrics::DB_QUERY_ERRORS_TOTAL
            .with_label_values(&[kind, error_label(e)])
            .inc();
    }
    result
}

pub(crate) async fn fetch_all(
    pool: &SqlitePool,
    kind: &'static str,
    query: &SelectQuery,
) -> Result<Vec<SqliteRow>> {
    let (sql, bind_params) = query.build_sql();
    tracing::debug!(query = kind, sql = %sql, binds = bind_params.len(), "Executing query");

    let timer = metrics::DB_QUERY_DURATION_SECONDS
        .with_label_values(&[kind])
        .start_timer();
    let result = bind_values(&sql, bind_params).fetch_all(pool).await;
    timer.observe_duration();

    Ok(observe(kind, result)?)
}

pub(crate) async fn fetch_optional(
    pool: &SqlitePool,
    kind: &'static str,
    query: &SelectQuery,
) -> Result<Option<SqliteRow>> {
    let (sql, bind_params) = query.build_sql();
    tracing::debug!(query = kind, sql = %sql, binds = bind_params.len(), "Executing query");

    let timer = metrics::DB_QUERY_DURATION_SECONDS
        .with_label_values(&[kind])
        .start_timer();
    let result = bind_values(&sql, bind_params).fetch_optional(pool).await;
    timer.observe_duration();

    Ok(observe(kind, result)?)
}
