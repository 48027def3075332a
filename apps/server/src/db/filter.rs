//! Filter mappings built from allow-listed query parameters.
//!
//! A [`FilterMap`] maps *column names* to *canonical values*. It is built from
//! the raw query string of a request and later folded into a
//! [`SelectQuery`](super::query::SelectQuery) as conjunctive equality
//! conditions.

use std::collections::BTreeMap;

/// Filters accepted by `GET /events`.
pub const EVENT_FILTERS: &[&str] = &["raceId", "type", "gmtOffset"];

/// Filters accepted by `GET /races`.
pub const RACE_FILTERS: &[&str] = &["circuitId", "location"];

/// Filters accepted by `GET /races/{year}`.
pub const RACE_YEAR_FILTERS: &[&str] = &["location", "circuitId"];

/// Logical parameter names whose column differs (SQL keywords).
fn column_for(param: &str) -> &str {
    match param {
        "id" => "id_",
        "type" => "type_",
        other => other,
    }
}

fn canonicalize(column: &str, value: &str) -> String {
    match column {
        "type_" => value.to_uppercase(),
        // `+` arrives as a space when the offset is not percent-encoded.
        "gmtOffset" if !value.starts_with('-') => {
            let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
            if compact.starts_with('+') {
                compact
            } else {
                format!("+{compact}")
            }
        }
        _ => value.to_string(),
    }
}

/// Column name to filter value mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterMap {
    columns: BTreeMap<String, String>,
}

impl FilterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from query parameters, keeping only allow-listed names.
    ///
    /// When a parameter is repeated the first occurrence wins. Parameters that
    /// are allowed but absent are omitted, never defaulted.
    pub fn from_params<K, V>(params: &[(K, V)], allowed: &[&str]) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filter = Self::new();

        for name in allowed {
            let Some((_, value)) = params.iter().find(|(key, _)| key.as_ref() == *name) else {
                continue;
            };

            let column = column_for(name);
            filter
                .columns
                .insert(column.to_string(), canonicalize(column, value.as_ref()));
        }

        filter
    }

    /// Add a condition on a column, bypassing renaming and canonicalization.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.columns.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
