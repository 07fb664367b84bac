//! Write transaction coordinator
//!
//! Drives a delete through `Begin -> Mutate -> [Cleanup] -> Commit`. A
//! failure in Mutate or Cleanup moves to `Rollback`, rolls back explicitly and
//! hands the triggering error back unchanged. Dropping the coordinator before
//! commit (early return, cancelled future, panic) leaves the rollback to the
//! sqlx transaction guard.

use std::fmt;

use sqlx::{AnyConnection, AnyPool};
use sqlx::{Any, Transaction};
use tracing::{debug, error, warn};

use super::vacuum::{Vacuum, VacuumScope};
use crate::query::Statement;

/// Lifecycle phase of a write transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxPhase {
    Begin,
    Mutate,
    Cleanup,
    Commit,
    Rollback,
}

impl TxPhase {
    /// Whether `next` may follow this phase
    pub fn can_transition_to(self, next: TxPhase) -> bool {
        use TxPhase::{Begin, Cleanup, Commit, Mutate, Rollback};
        matches!(
            (self, next),
            (Begin, Mutate | Rollback)
                | (Mutate, Mutate | Cleanup | Commit | Rollback)
                | (Cleanup, Commit | Rollback)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Commit | Self::Rollback)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Begin => "begin",
            Self::Mutate => "mutate",
            Self::Cleanup => "cleanup",
            Self::Commit => "commit",
            Self::Rollback => "rollback",
        }
    }
}

impl fmt::Display for TxPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transaction that only commits after every phase succeeded
pub struct WriteTransaction {
    tx: Option<Transaction<'static, Any>>,
    phase: TxPhase,
    operation: &'static str,
}

impl WriteTransaction {
    /// Open a transaction on the pool
    pub async fn begin(pool: &AnyPool, operation: &'static str) -> Result<Self, sqlx::Error> {
        let tx = pool.begin().await?;
        debug!(operation, phase = %TxPhase::Begin, "transaction started");
        Ok(Self {
            tx: Some(tx),
            phase: TxPhase::Begin,
            operation,
        })
    }

    pub fn phase(&self) -> TxPhase {
        self.phase
    }

    /// Connection of the open transaction
    pub fn conn(&mut self) -> Result<&mut AnyConnection, sqlx::Error> {
        let operation = self.operation;
        self.tx.as_deref_mut().ok_or_else(|| {
            sqlx::Error::Protocol(format!("{operation}: transaction already finished"))
        })
    }

    /// Execute a mutating statement and return the affected row count
    pub async fn mutate(&mut self, stmt: &Statement) -> Result<u64, sqlx::Error> {
        self.advance(TxPhase::Mutate)?;
        let result = {
            let conn = self.conn()?;
            stmt.query().execute(conn).await
        };
        match result {
            Ok(done) => Ok(done.rows_affected()),
            Err(e) => Err(self.fail(e).await),
        }
    }

    /// Run the vacuum for `scope` on the transaction's connection
    pub async fn cleanup(&mut self, vacuum: &dyn Vacuum, scope: VacuumScope) -> Result<(), sqlx::Error> {
        self.advance(TxPhase::Cleanup)?;
        let result = {
            let conn = self.conn()?;
            vacuum.vacuum(conn, scope).await
        };
        match result {
            Ok(()) => Ok(()),
            Err(e) => Err(self.fail(e).await),
        }
    }

    /// Commit the transaction
    ///
    /// The phase only becomes `Commit` once the database accepted the commit;
    /// a rejected commit leaves the coordinator in `Rollback`.
    pub async fn commit(&mut self) -> Result<(), sqlx::Error> {
        self.check(TxPhase::Commit)?;
        let tx = self.tx.take().ok_or_else(|| {
            sqlx::Error::Protocol(format!("{}: transaction already finished", self.operation))
        })?;
        match tx.commit().await {
            Ok(()) => {
                self.enter(TxPhase::Commit);
                debug!(operation = self.operation, "transaction committed");
                Ok(())
            }
            Err(e) => {
                error!(operation = self.operation, error = %e, "commit failed");
                self.enter(TxPhase::Rollback);
                Err(e)
            }
        }
    }

    fn advance(&mut self, next: TxPhase) -> Result<(), sqlx::Error> {
        self.check(next)?;
        self.enter(next);
        Ok(())
    }

    fn check(&self, next: TxPhase) -> Result<(), sqlx::Error> {
        if self.phase.can_transition_to(next) {
            return Ok(());
        }
        Err(sqlx::Error::Protocol(format!(
            "{}: invalid transaction transition {} -> {}",
            self.operation, self.phase, next
        )))
    }

    fn enter(&mut self, next: TxPhase) {
        debug!(operation = self.operation, from = %self.phase, to = %next, "transaction phase");
        self.phase = next;
    }

    /// Roll back and return the error that caused it
    async fn fail(&mut self, cause: sqlx::Error) -> sqlx::Error {
        debug!(operation = self.operation, error = %cause, "statement failed");
        self.enter(TxPhase::Rollback);
        if let Some(tx) = self.tx.take() {
            if let Err(e) = tx.rollback().await {
                error!(operation = self.operation, error = %e, "rollback failed");
            }
        }
        cause
    }
}

impl Drop for WriteTransaction {
    fn drop(&mut self) {
        if self.tx.is_some() {
            warn!(
                operation = self.operation,
                phase = %self.phase,
                "transaction dropped before commit, rolling back"
            );
        }
    }
}

impl fmt::Debug for WriteTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriteTransaction")
            .field("operation", &self.operation)
            .field("phase", &self.phase)
            .field("open", &self.tx.is_some())
            .finish()
    }
}
