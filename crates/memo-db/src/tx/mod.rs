//! Transactions for multi-statement writes

mod vacuum;
mod write_transaction;

pub use vacuum::{OrphanVacuum, Vacuum, VacuumScope};
pub use write_transaction::{TxPhase, WriteTransaction};
