//! Schema bootstrap
//!
//! Idempotent `CREATE ... IF NOT EXISTS` statements per dialect. Every integer
//! column is 64-bit so rows decode to `i64` on either engine.

use tracing::{info, instrument};

use crate::dialect::Dialect;
use crate::pool::Database;

const POSTGRES: [&str; 6] = [
    r"
    CREATE TABLE IF NOT EXISTS nest (
        id BIGSERIAL PRIMARY KEY,
        uid TEXT NOT NULL UNIQUE,
        created_ts BIGINT NOT NULL DEFAULT CAST(EXTRACT(EPOCH FROM NOW()) AS BIGINT),
        updated_ts BIGINT NOT NULL DEFAULT CAST(EXTRACT(EPOCH FROM NOW()) AS BIGINT),
        creator_id BIGINT NOT NULL,
        name TEXT NOT NULL DEFAULT ''
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS memo (
        id BIGSERIAL PRIMARY KEY,
        created_ts BIGINT NOT NULL DEFAULT CAST(EXTRACT(EPOCH FROM NOW()) AS BIGINT),
        updated_ts BIGINT NOT NULL DEFAULT CAST(EXTRACT(EPOCH FROM NOW()) AS BIGINT),
        creator_id BIGINT NOT NULL,
        nest_id BIGINT,
        content TEXT NOT NULL DEFAULT ''
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS memo_comment (
        id BIGSERIAL PRIMARY KEY,
        created_ts BIGINT NOT NULL DEFAULT CAST(EXTRACT(EPOCH FROM NOW()) AS BIGINT),
        updated_ts BIGINT NOT NULL DEFAULT CAST(EXTRACT(EPOCH FROM NOW()) AS BIGINT),
        content TEXT NOT NULL,
        username TEXT NOT NULL,
        memo_id BIGINT NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS reaction (
        id BIGSERIAL PRIMARY KEY,
        created_ts BIGINT NOT NULL DEFAULT CAST(EXTRACT(EPOCH FROM NOW()) AS BIGINT),
        creator_id BIGINT NOT NULL,
        content_id BIGINT NOT NULL,
        reaction_type TEXT NOT NULL,
        UNIQUE (creator_id, content_id, reaction_type)
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS memo_relation (
        memo_id BIGINT NOT NULL,
        related_memo_id BIGINT NOT NULL,
        relation_type TEXT NOT NULL,
        UNIQUE (memo_id, related_memo_id, relation_type)
    )
    ",
    "CREATE INDEX IF NOT EXISTS idx_memo_comment_memo_id ON memo_comment (memo_id)",
];

const SQLITE: [&str; 6] = [
    r"
    CREATE TABLE IF NOT EXISTS nest (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        uid TEXT NOT NULL UNIQUE,
        created_ts BIGINT NOT NULL DEFAULT (CAST(strftime('%s', 'now') AS INTEGER)),
        updated_ts BIGINT NOT NULL DEFAULT (CAST(strftime('%s', 'now') AS INTEGER)),
        creator_id INTEGER NOT NULL,
        name TEXT NOT NULL DEFAULT ''
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS memo (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        created_ts BIGINT NOT NULL DEFAULT (CAST(strftime('%s', 'now') AS INTEGER)),
        updated_ts BIGINT NOT NULL DEFAULT (CAST(strftime('%s', 'now') AS INTEGER)),
        creator_id INTEGER NOT NULL,
        nest_id INTEGER,
        content TEXT NOT NULL DEFAULT ''
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS memo_comment (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        created_ts BIGINT NOT NULL DEFAULT (CAST(strftime('%s', 'now') AS INTEGER)),
        updated_ts BIGINT NOT NULL DEFAULT (CAST(strftime('%s', 'now') AS INTEGER)),
        content TEXT NOT NULL,
        username TEXT NOT NULL,
        memo_id INTEGER NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS reaction (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        created_ts BIGINT NOT NULL DEFAULT (CAST(strftime('%s', 'now') AS INTEGER)),
        creator_id INTEGER NOT NULL,
        content_id INTEGER NOT NULL,
        reaction_type TEXT NOT NULL,
        UNIQUE (creator_id, content_id, reaction_type)
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS memo_relation (
        memo_id INTEGER NOT NULL,
        related_memo_id INTEGER NOT NULL,
        relation_type TEXT NOT NULL,
        UNIQUE (memo_id, related_memo_id, relation_type)
    )
    ",
    "CREATE INDEX IF NOT EXISTS idx_memo_comment_memo_id ON memo_comment (memo_id)",
];

/// DDL statements for a dialect, in dependency order
pub fn statements(dialect: Dialect) -> &'static [&'static str] {
    match dialect {
        Dialect::Postgres => &POSTGRES,
        Dialect::Sqlite => &SQLITE,
    }
}

/// Create any missing tables and indexes
#[instrument(skip(db), fields(dialect = %db.dialect()))]
pub async fn apply(db: &Database) -> Result<(), sqlx::Error> {
    for sql in statements(db.dialect()) {
        sqlx::query(sql).execute(db.pool()).await?;
    }
    info!("schema ready");
    Ok(())
}
