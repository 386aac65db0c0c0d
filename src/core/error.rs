//! Typed errors for the ledger core
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KasseError {
    #[error("invalid budget allocation: {0}")]
    InvalidAllocation(String),

    #[error("unknown weight unit: {0}")]
    UnknownUnit(String),

    #[error("unknown budget category: {0}")]
    UnknownCategory(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

pub type Result<T> = std::result::Result<T, KasseError>;
