//! Race repository - SQLite queries for the `races` table

use super::{
    fetch_all, fetch_optional,
    filter::FilterMap,
    query::SelectQuery,
    rows::{race_from_row, races_from_rows, RACES_TABLE, RACE_COLUMNS},
    traits::RaceStore,
};
use crate::{models::Race, Error, Result};
use async_trait::async_trait;
use sqlx::SqlitePool;

/// Repository for race database operations
#[derive(Clone)]
pub struct RaceRepository {
    pool: SqlitePool,
}

impl RaceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn select() -> SelectQuery {
        SelectQuery::new(RACES_TABLE, RACE_COLUMNS)
    }

    async fn fetch(&self, kind: &'static str, query: SelectQuery) -> Result<Vec<Race>> {
        let rows = fetch_all(&self.pool, kind, &query.order_by("year").order_by("round_")).await?;
        races_from_rows(&rows)
    }
}

#[async_trait]
impl RaceStore for RaceRepository {
    async fn find_all(&self, filter: &FilterMap) -> Result<Vec<Race>> {
        self.fetch("races.find_all", Self::select().filter_map(filter))
            .await
    }

    async fn find_by_id(&self, id: &str) -> Result<Race> {
        let query = Self::select().filter_eq("id_", id);

        match fetch_optional(&self.pool, "races.find_by_id", &query).await? {
            Some(row) => race_from_row(&row),
            None => Err(Error::not_found(format!("race '{id}'"))),
        }
    }

    async fn find_by_circuit_id(
        &self,
        circuit_id: &str,
        filter: &FilterMap,
    ) -> Result<Vec<Race>> {
        let query = Self::select()
            .filter_eq("circuitId", circuit_id)
            .filter_map(filter);
        self.fetch("races.find_by_circuit_id", query).await
    }

    async fn find_by_year(&self, year: i32, filter: &FilterMap) -> Result<Vec<Race>> {
        let query = Self::select().filter_eq("year", year).filter_map(filter);
        self.fetch("races.find_by_year", query).await
    }
}
