//! SQL dialects supported by the stores
//!
//! The sqlx `Any` driver passes SQL through untouched, so placeholder syntax
//! has to match the engine behind the pool. The dialect is chosen once, from
//! the connection URL, when the pool is created.

use std::fmt;

use thiserror::Error;

/// SQL dialect of the connected engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Numbered placeholders: `$1, $2, ...`
    Postgres,
    /// Positional placeholders: `?`
    Sqlite,
}

/// Connection URL with a scheme no store supports
#[derive(Debug, Error)]
#[error("Unsupported database URL scheme: {0}")]
pub struct UnsupportedDialect(pub String);

impl Dialect {
    /// Detect the dialect from a connection URL
    pub fn from_url(url: &str) -> Result<Self, UnsupportedDialect> {
        let scheme = url.split(':').next().unwrap_or_default();
        match scheme {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(UnsupportedDialect(other.to_string())),
        }
    }

    /// Placeholder for the 1-based argument `index`
    pub fn placeholder(self, index: usize) -> String {
        match self {
            Self::Postgres => format!("${index}"),
            Self::Sqlite => "?".to_string(),
        }
    }

    /// Engine name for logs
    pub fn name(self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
