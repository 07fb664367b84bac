//! Cleanup of dependent rows inside delete transactions

use async_trait::async_trait;
use sqlx::AnyConnection;
use tracing::debug;

use crate::dialect::Dialect;
use crate::query::{Args, Statement, WhereClause};

/// The row a delete removed, which bounds what its cleanup may touch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VacuumScope {
    MemoComment(i64),
    Memo(i64),
    Nest(i64),
}

/// Removes rows left dangling by a delete
///
/// Runs on the connection of the enclosing transaction; an error aborts and
/// rolls back the whole delete.
#[async_trait]
pub trait Vacuum: Send + Sync {
    async fn vacuum(&self, conn: &mut AnyConnection, scope: VacuumScope) -> Result<(), sqlx::Error>;
}

/// Deletes the rows that hung off the deleted record and nothing else
///
/// A memo takes its comments, reactions and relations with it. A nest takes
/// its memos and, through them, their dependents. Comments have no dependents.
#[derive(Debug, Clone, Copy)]
pub struct OrphanVacuum {
    dialect: Dialect,
}

impl OrphanVacuum {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Cleanup statements for `scope`, in execution order
    pub fn statements(&self, scope: VacuumScope) -> Vec<(&'static str, Statement)> {
        match scope {
            VacuumScope::MemoComment(_) => Vec::new(),
            VacuumScope::Memo(id) => vec![
                ("memo_comment", self.delete_eq("memo_comment", "memo_id", id)),
                ("reaction", self.delete_eq("reaction", "content_id", id)),
                ("memo_relation", self.delete_relations("=", |args| args.push(id))),
            ],
            VacuumScope::Nest(id) => {
                let in_nest = |args: &mut Args| {
                    format!("(SELECT id FROM memo WHERE nest_id = {})", args.push(id))
                };
                vec![
                    ("memo_comment", self.delete_in("memo_comment", "memo_id", in_nest)),
                    ("reaction", self.delete_in("reaction", "content_id", in_nest)),
                    ("memo_relation", self.delete_relations("IN", in_nest)),
                    ("memo", self.delete_eq("memo", "nest_id", id)),
                ]
            }
        }
    }

    fn delete_eq(&self, table: &str, column: &str, id: i64) -> Statement {
        let mut clause = WhereClause::new(self.dialect);
        clause.and_eq(column, id);
        Statement::filtered(&format!("DELETE FROM {table}"), clause, "")
    }

    fn delete_in(&self, table: &str, column: &str, subquery: impl Fn(&mut Args) -> String) -> Statement {
        let mut args = Args::new(self.dialect);
        let ids = subquery(&mut args);
        Statement::with_args(format!("DELETE FROM {table} WHERE {column} IN {ids}"), args)
    }

    /// Relations pointing either way at the matched memos
    fn delete_relations(&self, op: &str, operand: impl Fn(&mut Args) -> String) -> Statement {
        let mut args = Args::new(self.dialect);
        let from = operand(&mut args);
        let to = operand(&mut args);
        Statement::with_args(
            format!("DELETE FROM memo_relation WHERE memo_id {op} {from} OR related_memo_id {op} {to}"),
            args,
        )
    }
}

#[async_trait]
impl Vacuum for OrphanVacuum {
    async fn vacuum(&self, conn: &mut AnyConnection, scope: VacuumScope) -> Result<(), sqlx::Error> {
        for (table, stmt) in self.statements(scope) {
            let removed = stmt.query().execute(&mut *conn).await?.rows_affected();
            if removed > 0 {
                debug!(table, removed, ?scope, "vacuumed dependent rows");
            }
        }
        Ok(())
    }
}
