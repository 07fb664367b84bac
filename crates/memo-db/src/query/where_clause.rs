//! WHERE clause and pagination builders

use std::fmt;

use super::args::{Args, SqlArg};
use crate::dialect::Dialect;

/// Always-true seed so every condition can be appended as `AND ...`
pub const BASE_PREDICATE: &str = "1 = 1";

/// Conjunctive WHERE clause with its positional arguments
///
/// Conditions appear in the clause in the same order as their arguments.
#[derive(Debug, Clone)]
pub struct WhereClause {
    conditions: Vec<String>,
    args: Args,
}

impl WhereClause {
    pub fn new(dialect: Dialect) -> Self {
        Self::with_args(Args::new(dialect))
    }

    /// Continue numbering after arguments already used earlier in the statement
    pub fn with_args(args: Args) -> Self {
        Self {
            conditions: vec![BASE_PREDICATE.to_string()],
            args,
        }
    }

    /// `column = ?`
    pub fn and_eq(&mut self, column: &str, value: impl Into<SqlArg>) -> &mut Self {
        let placeholder = self.args.push(value);
        self.conditions.push(format!("{column} = {placeholder}"));
        self
    }

    /// `column = ?` when the value is present
    pub fn and_eq_opt<T: Into<SqlArg>>(&mut self, column: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.and_eq(column, value);
        }
        self
    }

    /// `column LIKE ?` bound to `%term%`
    pub fn and_like(&mut self, column: &str, term: &str) -> &mut Self {
        let placeholder = self.args.push(format!("%{term}%"));
        self.conditions.push(format!("{column} LIKE {placeholder}"));
        self
    }

    /// One `LIKE` condition per term
    pub fn and_like_all(&mut self, column: &str, terms: &[String]) -> &mut Self {
        for term in terms {
            self.and_like(column, term);
        }
        self
    }

    /// Rendered clause, without the `WHERE` keyword
    pub fn sql(&self) -> String {
        self.conditions.join(" AND ")
    }

    pub fn args(&self) -> &[SqlArg] {
        self.args.values()
    }

    pub fn into_parts(self) -> (String, Vec<SqlArg>) {
        (self.sql(), self.args.into_values())
    }
}

/// Textual LIMIT/OFFSET suffix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl Pagination {
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self { limit, offset }
    }
}

impl fmt::Display for Pagination {
    /// Renders nothing without a limit; an offset without a limit is dropped
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(limit) = self.limit {
            write!(f, " LIMIT {limit}")?;
            if let Some(offset) = self.offset {
                write!(f, " OFFSET {offset}")?;
            }
        }
        Ok(())
    }
}
