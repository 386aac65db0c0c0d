//! Core business logic: ledger, aggregation, budget and metals

pub mod analytics;
pub mod budget;
pub mod config;
pub mod error;
pub mod ledger;
pub mod log;
pub mod metals;
pub mod session;

// Re-export main types for cleaner imports
pub use budget::{BudgetBucket, BudgetDistribution};
pub use error::{KasseError, Result};
pub use ledger::{Ledger, Transaction, TransactionInput, TransactionKind};
pub use session::{Profile, ProfileUpdate, Session};
