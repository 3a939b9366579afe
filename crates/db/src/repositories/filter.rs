//! Helpers for dynamically-built filtered queries.
//!
//! List endpoints accept optional filter fields; each present field
//! contributes exactly one `AND`ed predicate with a `$n` placeholder, and
//! the same WHERE fragment is shared between the page query, the count
//! query, and any aggregate query so they always see the same row set.

use labtrack_core::types::{Date, DbId};

/// Typed bind value for dynamically-built queries.
#[derive(Debug, Clone)]
pub enum BindValue {
    BigInt(DbId),
    Text(String),
    Date(Date),
}

/// Accumulates `column op $n` conditions and their bind values.
pub struct FilterBuilder {
    conditions: Vec<String>,
    values: Vec<BindValue>,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Add one predicate. `fragment` must contain a single `{}` where the
    /// placeholder index goes, e.g. `"status = ${}"`.
    pub fn push(&mut self, fragment: &str, value: BindValue) {
        let idx = self.values.len() + 1;
        self.conditions
            .push(fragment.replacen("{}", &idx.to_string(), 1));
        self.values.push(value);
    }

    /// The assembled `WHERE ...` clause, or an empty string when no filter
    /// field was supplied (absent filters contribute nothing).
    pub fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.conditions.join(" AND "))
        }
    }

    /// 1-based index of the next placeholder after the filter binds.
    pub fn next_idx(&self) -> usize {
        self.values.len() + 1
    }

    pub fn values(&self) -> &[BindValue] {
        &self.values
    }
}

impl Default for FilterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Bind accumulated values to a sqlx `QueryAs`.
pub fn bind_values<'q, O>(
    mut q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    values: &'q [BindValue],
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    for val in values {
        match val {
            BindValue::BigInt(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::Date(v) => q = q.bind(*v),
        }
    }
    q
}

/// Bind accumulated values to a sqlx `QueryScalar`.
pub fn bind_values_scalar<'q>(
    mut q: sqlx::query::QueryScalar<'q, sqlx::Postgres, i64, sqlx::postgres::PgArguments>,
    values: &'q [BindValue],
) -> sqlx::query::QueryScalar<'q, sqlx::Postgres, i64, sqlx::postgres::PgArguments> {
    for val in values {
        match val {
            BindValue::BigInt(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::Date(v) => q = q.bind(*v),
        }
    }
    q
}
