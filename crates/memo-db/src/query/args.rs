//! Positional SQL arguments

use crate::dialect::Dialect;

/// A value bound to a placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlArg {
    Int(i64),
    Text(String),
}

impl From<i64> for SqlArg {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for SqlArg {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<String> for SqlArg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for SqlArg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Ordered argument list that hands out matching placeholders
#[derive(Debug, Clone)]
pub struct Args {
    dialect: Dialect,
    values: Vec<SqlArg>,
}

impl Args {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            values: Vec::new(),
        }
    }

    /// Append a value and return the placeholder that refers to it
    pub fn push(&mut self, value: impl Into<SqlArg>) -> String {
        self.values.push(value.into());
        self.dialect.placeholder(self.values.len())
    }

    /// Like `push`, but renders an absent value as a `NULL` literal
    pub fn push_nullable(&mut self, value: Option<impl Into<SqlArg>>) -> String {
        match value {
            Some(value) => self.push(value),
            None => "NULL".to_string(),
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[SqlArg] {
        &self.values
    }

    pub fn into_values(self) -> Vec<SqlArg> {
        self.values
    }
}
