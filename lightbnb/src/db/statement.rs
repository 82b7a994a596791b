//! Structured assembly of parameterized `SELECT` statements.
//!
//! A [`Select`] is built from fixed SQL (the projection and joins) plus ordered lists of
//! [`Clause`]s for `WHERE` and `HAVING`. Each clause pairs a SQL fragment with the value it
//! compares against. Rendering walks the clauses once, pushing each fragment and its value onto a
//! [`QueryBuilder`], so the SQL text and the bind list in the resulting [`Statement`] always agree.
//!
//! ```
//! use lightbnb::db::statement::{Bind, Clause, Select};
//!
//! let statement = Select::new("SELECT * FROM properties")
//!     .filter(Clause::new("properties.city LIKE", "%van%".to_string()))
//!     .filter(Clause::new("properties.owner_id =", 7))
//!     .limit(10)
//!     .build();
//!
//! assert_eq!(
//!     statement.sql(),
//!     "SELECT * FROM properties WHERE properties.city LIKE $1 AND properties.owner_id = $2 LIMIT $3"
//! );
//! assert_eq!(
//!     statement.binds(),
//!     &[Bind::Text("%van%".to_string()), Bind::Int(7), Bind::Int(10)]
//! );
//! ```

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres, QueryBuilder};
use std::fmt;

/// A value bound to a positional placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum Bind {
    Text(String),
    Int(i64),
    Float(f64),
}

impl From<String> for Bind {
    fn from(value: String) -> Self {
        Bind::Text(value)
    }
}

impl From<i64> for Bind {
    fn from(value: i64) -> Self {
        Bind::Int(value)
    }
}

impl From<i32> for Bind {
    fn from(value: i32) -> Self {
        Bind::Int(i64::from(value))
    }
}

impl From<f64> for Bind {
    fn from(value: f64) -> Self {
        Bind::Float(value)
    }
}

/// A condition whose right-hand side is a bound value.
///
/// `fragment` is everything before the placeholder, e.g. `"properties.cost_per_night >="`.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    fragment: &'static str,
    bind: Bind,
}

impl Clause {
    pub fn new(fragment: &'static str, bind: impl Into<Bind>) -> Self {
        Self {
            fragment,
            bind: bind.into(),
        }
    }
}

/// Builder for a single `SELECT` statement.
#[derive(Debug, Clone)]
pub struct Select {
    base: &'static str,
    filters: Vec<Clause>,
    group_by: Option<&'static str>,
    having: Vec<Clause>,
    order_by: Option<&'static str>,
    limit: Option<i64>,
}

impl Select {
    /// Start from the projection and joins. `base` must not contain its own `WHERE`.
    pub fn new(base: &'static str) -> Self {
        Self {
            base,
            filters: Vec::new(),
            group_by: None,
            having: Vec::new(),
            order_by: None,
            limit: None,
        }
    }

    /// Add a `WHERE` condition; conditions are joined with `AND` in insertion order
    pub fn filter(mut self, clause: Clause) -> Self {
        self.filters.push(clause);
        self
    }

    pub fn group_by(mut self, columns: &'static str) -> Self {
        self.group_by = Some(columns);
        self
    }

    /// Add a post-aggregation condition; conditions are joined with `AND` in insertion order
    pub fn having(mut self, clause: Clause) -> Self {
        self.having.push(clause);
        self
    }

    pub fn order_by(mut self, ordering: &'static str) -> Self {
        self.order_by = Some(ordering);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Render the SQL text and the bind list together.
    pub fn build(self) -> Statement {
        let mut query = QueryBuilder::new(self.base);
        let mut binds = Vec::new();

        push_conditions(&mut query, &mut binds, "WHERE", self.filters);
        if let Some(columns) = self.group_by {
            query.push(" GROUP BY ").push(columns);
        }
        push_conditions(&mut query, &mut binds, "HAVING", self.having);
        if let Some(ordering) = self.order_by {
            query.push(" ORDER BY ").push(ordering);
        }
        if let Some(limit) = self.limit {
            query.push(" LIMIT ").push_bind(limit);
            binds.push(Bind::Int(limit));
        }

        Statement { query, binds }
    }
}

// the keyword is emitted only when a condition follows it
fn push_conditions(query: &mut QueryBuilder<'static, Postgres>, binds: &mut Vec<Bind>, keyword: &str, clauses: Vec<Clause>) {
    if clauses.is_empty() {
        return;
    }

    query.push(" ").push(keyword).push(" ");
    let mut conditions = query.separated(" AND ");
    for clause in clauses {
        conditions.push(clause.fragment);
        conditions.push_unseparated(" ");
        match &clause.bind {
            Bind::Text(value) => conditions.push_bind_unseparated(value.clone()),
            Bind::Int(value) => conditions.push_bind_unseparated(*value),
            Bind::Float(value) => conditions.push_bind_unseparated(*value),
        };
        binds.push(clause.bind);
    }
}

/// Rendered SQL with its positional parameters, in placeholder order
pub struct Statement {
    query: QueryBuilder<'static, Postgres>,
    binds: Vec<Bind>,
}

impl Statement {
    pub fn sql(&self) -> &str {
        self.query.sql()
    }

    pub fn binds(&self) -> &[Bind] {
        &self.binds
    }

    /// Build a sqlx query for this statement with every parameter already bound.
    ///
    /// The bound arguments move into the returned query, so a statement executes once.
    pub fn query_as<T>(&mut self) -> QueryAs<'_, Postgres, T, PgArguments>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        self.query.build_query_as::<T>()
    }
}

impl fmt::Debug for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Statement")
            .field("sql", &self.sql())
            .field("binds", &self.binds)
            .finish()
    }
}

impl PartialEq for Statement {
    fn eq(&self, other: &Self) -> bool {
        self.sql() == other.sql() && self.binds == other.binds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_only() {
        let statement = Select::new("SELECT * FROM users").build();
        assert_eq!(statement.sql(), "SELECT * FROM users");
        assert!(statement.binds().is_empty());
    }

    #[test]
    fn test_single_filter_emits_where_once() {
        let statement = Select::new("SELECT * FROM users")
            .filter(Clause::new("users.id =", 3))
            .build();
        assert_eq!(statement.sql(), "SELECT * FROM users WHERE users.id = $1");
        assert_eq!(statement.binds(), &[Bind::Int(3)]);
    }

    #[test]
    fn test_having_without_where() {
        let statement = Select::new("SELECT property_id, AVG(rating) FROM property_reviews")
            .group_by("property_id")
            .having(Clause::new("AVG(rating) >=", 4.0))
            .order_by("property_id")
            .limit(5)
            .build();

        assert_eq!(
            statement.sql(),
            "SELECT property_id, AVG(rating) FROM property_reviews GROUP BY property_id \
             HAVING AVG(rating) >= $1 ORDER BY property_id LIMIT $2"
        );
        assert_eq!(statement.binds(), &[Bind::Float(4.0), Bind::Int(5)]);
    }

    #[test]
    fn test_placeholders_number_across_where_and_having() {
        let statement = Select::new("SELECT * FROM t")
            .filter(Clause::new("a =", 1))
            .filter(Clause::new("b =", "x".to_string()))
            .group_by("t.id")
            .having(Clause::new("COUNT(*) >", 2))
            .having(Clause::new("MAX(c) <", 9.5))
            .build();

        assert_eq!(
            statement.sql(),
            "SELECT * FROM t WHERE a = $1 AND b = $2 GROUP BY t.id HAVING COUNT(*) > $3 AND MAX(c) < $4"
        );
        assert_eq!(statement.binds().len(), 4);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_statement_executes_with_its_binds(pool: sqlx::PgPool) {
        for name in ["Kavya", "Kaveh", "Milo"] {
            sqlx::query("INSERT INTO users (name, email, password) VALUES ($1, $2, 'hash')")
                .bind(name)
                .bind(format!("{}@example.com", name.to_lowercase()))
                .execute(&pool)
                .await
                .unwrap();
        }

        let mut statement = Select::new("SELECT name FROM users")
            .filter(Clause::new("users.name LIKE", "Kav%".to_string()))
            .filter(Clause::new("users.id >", 0))
            .order_by("users.name")
            .limit(5)
            .build();
        assert_eq!(
            statement.sql(),
            "SELECT name FROM users WHERE users.name LIKE $1 AND users.id > $2 ORDER BY users.name LIMIT $3"
        );

        let mut conn = pool.acquire().await.unwrap();
        let names: Vec<(String,)> = statement.query_as().fetch_all(&mut *conn).await.unwrap();
        assert_eq!(names, vec![("Kaveh".to_string(),), ("Kavya".to_string(),)]);
    }
}
