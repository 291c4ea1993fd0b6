//! SQL builder with parameterized query construction.
//!
//! All user-supplied values go through DuckDB's parameter binding (`?` placeholders),
//! never through string interpolation. Builder methods return `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use sneakpeak_sdk::SqlBuilder;
//! let (sql, params) = SqlBuilder::new("liked_sneakers")
//!     .where_eq("user_id", "uid-1")
//!     .order_by(&["liked_at DESC"])
//!     .limit(10)
//!     .build();
//! assert_eq!(
//!     sql,
//!     "SELECT * FROM liked_sneakers WHERE user_id = ? ORDER BY liked_at DESC LIMIT 10"
//! );
//! assert_eq!(params, vec!["uid-1".to_string()]);
//! ```

/// Builds parameterized SELECT queries safely.
pub struct SqlBuilder {
    select_cols: Vec<String>,
    from_table: String,
    where_clauses: Vec<String>,
    params: Vec<String>,
    order_by_cols: Vec<String>,
    limit_val: Option<usize>,
}

impl SqlBuilder {
    /// Create a builder targeting the given table or view.
    pub fn new(table: &str) -> Self {
        Self {
            select_cols: vec!["*".to_string()],
            from_table: table.to_string(),
            where_clauses: Vec::new(),
            params: Vec::new(),
            order_by_cols: Vec::new(),
            limit_val: None,
        }
    }

    /// Set the columns to select (replaces the default `*`).
    pub fn select(&mut self, cols: &[&str]) -> &mut Self {
        self.select_cols = cols.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Add a WHERE condition with `?` placeholders for each param.
    pub fn where_clause(&mut self, condition: &str, params: &[&str]) -> &mut Self {
        self.where_clauses.push(condition.to_string());
        self.params.extend(params.iter().map(|p| p.to_string()));
        self
    }

    /// Add an equality condition: `{column} = ?`.
    pub fn where_eq(&mut self, column: &str, value: &str) -> &mut Self {
        self.where_clause(&format!("{} = ?", column), &[value])
    }

    /// Add ORDER BY expressions, e.g. `"liked_at DESC"`.
    pub fn order_by(&mut self, cols: &[&str]) -> &mut Self {
        self.order_by_cols.extend(cols.iter().map(|c| c.to_string()));
        self
    }

    pub fn limit(&mut self, n: usize) -> &mut Self {
        self.limit_val = Some(n);
        self
    }

    /// Render the SQL string and its bound parameters.
    pub fn build(&self) -> (String, Vec<String>) {
        let mut sql = format!(
            "SELECT {} FROM {}",
            self.select_cols.join(", "),
            self.from_table
        );
        if !self.where_clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.where_clauses.join(" AND "));
        }
        if !self.order_by_cols.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.order_by_cols.join(", "));
        }
        if let Some(n) = self.limit_val {
            sql.push_str(&format!(" LIMIT {}", n));
        }
        (sql, self.params.clone())
    }
}
