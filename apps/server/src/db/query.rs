//! SQL query builder for calendar lookups.
//!
//! Queries are described structurally and rendered to SQLite SQL with `?`
//! placeholders. Values never appear in the SQL text; they are returned as an
//! ordered list of [`BindValue`]s matching the placeholders.

use super::filter::FilterMap;

/// Bind values for `sqlx` queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Text(String),
    Int(i64),
}

impl From<String> for BindValue {
    fn from(value: String) -> Self {
        BindValue::Text(value)
    }
}

impl From<&str> for BindValue {
    fn from(value: &str) -> Self {
        BindValue::Text(value.to_string())
    }
}

impl From<i32> for BindValue {
    fn from(value: i32) -> Self {
        BindValue::Int(value.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Gte,
}

impl Comparison {
    fn as_sql(self) -> &'static str {
        match self {
            Comparison::Eq => "=",
            Comparison::Gte => ">=",
        }
    }
}

/// A single `column <op> ?` predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub column: String,
    pub comparison: Comparison,
    pub value: BindValue,
}

/// Quote an identifier for SQLite.
fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Conjunctive `SELECT` over a single table.
#[derive(Debug, Clone)]
pub struct SelectQuery {
    table: &'static str,
    columns: &'static [&'static str],
    conditions: Vec<Condition>,
    order_by: Vec<&'static str>,
    limit: Option<u32>,
}

impl SelectQuery {
    pub fn new(table: &'static str, columns: &'static [&'static str]) -> Self {
        Self {
            table,
            columns,
            conditions: Vec::new(),
            order_by: Vec::new(),
            limit: None,
        }
    }

    pub fn filter_eq(mut self, column: impl Into<String>, value: impl Into<BindValue>) -> Self {
        self.conditions.push(Condition {
            column: column.into(),
            comparison: Comparison::Eq,
            value: value.into(),
        });
        self
    }

    pub fn filter_gte(mut self, column: impl Into<String>, value: impl Into<BindValue>) -> Self {
        self.conditions.push(Condition {
            column: column.into(),
            comparison: Comparison::Gte,
            value: value.into(),
        });
        self
    }

    /// AND every entry of a filter mapping into the query.
    pub fn filter_map(mut self, filter: &FilterMap) -> Self {
        for (column, value) in filter.iter() {
            self = self.filter_eq(column, value);
        }
        self
    }

    pub fn order_by(mut self, column: &'static str) -> Self {
        self.order_by.push(column);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Render the `WHERE` predicate (without the keyword) and its bind values.
    ///
    /// Returns `None` when the query is unconstrained.
    pub fn where_clause(&self) -> Option<(String, Vec<BindValue>)> {
        if self.conditions.is_empty() {
            return None;
        }

        let mut bind_params = Vec::with_capacity(self.conditions.len());
        let fragments: Vec<String> = self
            .conditions
            .iter()
            .map(|condition| {
                bind_params.push(condition.value.clone());
                format!(
                    "{} {} ?",
                    quote_ident(&condition.column),
                    condition.comparison.as_sql()
                )
            })
            .collect();

        Some((fragments.join(" AND "), bind_params))
    }

    pub fn build_sql(&self) -> (String, Vec<BindValue>) {
        let columns: Vec<String> = self.columns.iter().map(|c| quote_ident(c)).collect();
        let mut sql = format!("SELECT {} FROM {}", columns.join(", "), quote_ident(self.table));
        let mut bind_params = Vec::new();

        if let Some((predicate, values)) = self.where_clause() {
            sql.push_str(" WHERE ");
            sql.push_str(&predicate);
            bind_params = values;
        }

        if !self.order_by.is_empty() {
            let order: Vec<String> = self
                .order_by
                .iter()
                .map(|c| format!("{} ASC", quote_ident(c)))
                .collect();
            sql.push_str(" ORDER BY ");
            sql.push_str(&order.join(", "));
        }

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        (sql, bind_params)
    }
}
