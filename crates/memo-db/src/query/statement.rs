//! Fully built SQL statements bound onto sqlx queries

use sqlx::any::{AnyArguments, AnyRow};
use sqlx::query::{Query, QueryAs};
use sqlx::{Any, FromRow};

use super::args::{Args, SqlArg};
use super::where_clause::WhereClause;

/// SQL text plus the arguments for its placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    sql: String,
    args: Vec<SqlArg>,
}

impl Statement {
    pub fn new(sql: impl Into<String>, args: Vec<SqlArg>) -> Self {
        Self {
            sql: sql.into(),
            args,
        }
    }

    /// Statement whose placeholders were all allocated from `args`
    pub fn with_args(sql: impl Into<String>, args: Args) -> Self {
        Self::new(sql, args.into_values())
    }

    /// `{head} WHERE {clause}{tail}`
    pub fn filtered(head: &str, clause: WhereClause, tail: &str) -> Self {
        let (conditions, args) = clause.into_parts();
        Self::new(format!("{head} WHERE {conditions}{tail}"), args)
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[SqlArg] {
        &self.args
    }

    /// Query with every argument bound in order
    pub fn query(&self) -> Query<'_, Any, AnyArguments<'_>> {
        self.args
            .iter()
            .fold(sqlx::query(&self.sql), |query, arg| match arg {
                SqlArg::Int(value) => query.bind(*value),
                SqlArg::Text(value) => query.bind(value.clone()),
            })
    }

    /// Typed query with every argument bound in order
    pub fn query_as<T>(&self) -> QueryAs<'_, Any, T, AnyArguments<'_>>
    where
        T: for<'r> FromRow<'r, AnyRow>,
    {
        self.args
            .iter()
            .fold(sqlx::query_as::<_, T>(&self.sql), |query, arg| match arg {
                SqlArg::Int(value) => query.bind(*value),
                SqlArg::Text(value) => query.bind(value.clone()),
            })
    }
}
