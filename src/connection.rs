//! DuckDB connection wrapper owning the dataset cache and the likes table.
//!
//! The database holds per-user liked products. It is in-memory by default
//! and can be backed by a file so likes survive restarts.

use crate::cache::CacheManager;
use crate::config::LIKES_TABLE;
use crate::error::Result;
use duckdb::{types::ValueRef, Connection as DuckDbConnection};
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

/// Wraps a DuckDB connection together with the dataset [`CacheManager`].
pub struct Connection {
    conn: DuckDbConnection,
    /// The cache manager used to locate and download the dataset.
    pub cache: RefCell<CacheManager>,
}

impl Connection {
    /// Create a connection backed by an in-memory DuckDB database.
    pub fn new(cache: CacheManager) -> Result<Self> {
        let conn = DuckDbConnection::open_in_memory()?;
        Self::init(conn, cache)
    }

    /// Create a connection whose likes persist in the DuckDB file at `path`.
    pub fn open<P: AsRef<Path>>(path: P, cache: CacheManager) -> Result<Self> {
        let conn = DuckDbConnection::open(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "opened likes database");
        Self::init(conn, cache)
    }

    fn init(conn: DuckDbConnection, cache: CacheManager) -> Result<Self> {
        conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {LIKES_TABLE} (\
               user_id VARCHAR NOT NULL, \
               name VARCHAR NOT NULL, \
               brand VARCHAR NOT NULL, \
               retail_price DOUBLE, \
               predicted_price DOUBLE, \
               release_date VARCHAR NOT NULL, \
               liked_at VARCHAR NOT NULL, \
               PRIMARY KEY (user_id, name))"
        ))?;
        Ok(Self {
            conn,
            cache: RefCell::new(cache),
        })
    }

    /// Execute SQL and return results as a `Vec` of `HashMap`s.
    ///
    /// Each row is represented as a `HashMap<String, serde_json::Value>`.
    /// Automatically converts DuckDB types to `serde_json::Value`.
    pub fn execute(
        &self,
        sql: &str,
        params: &[String],
    ) -> Result<Vec<HashMap<String, serde_json::Value>>> {
        let mut stmt = self.conn.prepare(sql)?;

        let param_values: Vec<&dyn duckdb::ToSql> = params
            .iter()
            .map(|p| p as &dyn duckdb::ToSql)
            .collect();

        let mut rows = stmt.query(param_values.as_slice())?;

        // Column metadata is only available once the query has run.
        let column_names: Vec<String> = match rows.as_ref() {
            Some(s) => s.column_names().into_iter().map(|s| s.to_string()).collect(),
            None => Vec::new(),
        };

        let mut out: Vec<HashMap<String, serde_json::Value>> = Vec::new();

        while let Some(row) = rows.next()? {
            let mut map = HashMap::with_capacity(column_names.len());
            for (i, col_name) in column_names.iter().enumerate() {
                let value = convert_value_ref(row.get_ref(i)?);
                map.insert(col_name.clone(), value);
            }
            out.push(map);
        }

        Ok(out)
    }

    /// Execute SQL and deserialize each row into type `T`.
    pub fn execute_into<T: DeserializeOwned>(
        &self,
        sql: &str,
        params: &[String],
    ) -> Result<Vec<T>> {
        let rows = self.execute(sql, params)?;
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            let value = serde_json::Value::Object(
                row.into_iter().collect::<serde_json::Map<String, serde_json::Value>>(),
            );
            let item: T = serde_json::from_value(value)?;
            results.push(item);
        }
        Ok(results)
    }

    /// Execute a statement with typed parameters, returning the affected row count.
    pub fn execute_statement(&self, sql: &str, params: &[&dyn duckdb::ToSql]) -> Result<usize> {
        Ok(self.conn.execute(sql, params)?)
    }
}

/// Convert a DuckDB `ValueRef` to a `serde_json::Value`.
fn convert_value_ref(val: ValueRef<'_>) -> serde_json::Value {
    match val {
        ValueRef::Null => serde_json::Value::Null,
        ValueRef::Boolean(b) => serde_json::Value::Bool(b),
        ValueRef::TinyInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::SmallInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::Int(n) => serde_json::Value::Number(n.into()),
        ValueRef::BigInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::HugeInt(n) => match i64::try_from(n) {
            Ok(i) => serde_json::Value::Number(i.into()),
            Err(_) => serde_json::Value::String(n.to_string()),
        },
        ValueRef::Float(f) => serde_json::Number::from_f64(f as f64)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Double(f) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Text(bytes) => serde_json::Value::String(String::from_utf8_lossy(bytes).to_string()),
        // Dates, timestamps and nested types are stored as VARCHAR by this crate.
        _ => serde_json::Value::Null,
    }
}
