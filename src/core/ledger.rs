//! The transaction store: an ordered ledger with balance bookkeeping
use crate::core::budget::BudgetBucket;
use crate::core::error::{KasseError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// A recorded transaction. Immutable once stored; the only way to get rid of
/// one is [`Ledger::remove`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub date: DateTime<Utc>,
    pub description: String,
    pub category: Option<BudgetBucket>,
    pub tags: Vec<String>,
}

impl Transaction {
    /// The balance delta this transaction contributes: positive for income,
    /// negative for expense.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// Input for a new transaction; the ledger assigns the id.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionInput {
    pub amount: f64,
    pub kind: TransactionKind,
    pub date: DateTime<Utc>,
    pub description: String,
    #[serde(default)]
    pub category: Option<BudgetBucket>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Ordered collection of transactions, newest first, with the running balance
/// folded in on every insert and removal.
#[derive(Debug)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    balance: f64,
    next_id: u64,
}

impl Ledger {
    pub fn new(starting_balance: f64) -> Self {
        Self {
            transactions: Vec::new(),
            balance: starting_balance,
            next_id: 0,
        }
    }

    /// Validates the input, assigns a unique id and inserts the transaction at
    /// the head of the ledger. The balance is updated in the same step.
    ///
    /// Ids come from a monotonic counter so rapid successive inserts can never
    /// collide.
    pub fn add(&mut self, input: TransactionInput) -> Result<&Transaction> {
        if !input.amount.is_finite() || input.amount <= 0.0 {
            return Err(KasseError::InvalidAmount(format!(
                "amount must be a positive number, got {}",
                input.amount
            )));
        }

        self.next_id += 1;
        let transaction = Transaction {
            id: format!("txn-{}", self.next_id),
            amount: input.amount,
            kind: input.kind,
            date: input.date,
            description: input.description,
            category: input.category,
            tags: input.tags,
        };

        self.balance += transaction.signed_amount();
        debug!(
            id = %transaction.id,
            amount = transaction.amount,
            kind = ?transaction.kind,
            balance = self.balance,
            "Recorded transaction"
        );
        self.transactions.insert(0, transaction);
        Ok(&self.transactions[0])
    }

    /// Removes the transaction with the given id and reverses its balance
    /// delta. A missing id is a no-op, not an error.
    pub fn remove(&mut self, id: &str) {
        match self.transactions.iter().position(|t| t.id == id) {
            Some(index) => {
                let removed = self.transactions.remove(index);
                self.balance -= removed.signed_amount();
                debug!(id, balance = self.balance, "Removed transaction");
            }
            None => debug!(id, "Ignoring removal of unknown transaction"),
        }
    }

    /// All transactions, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }
}
