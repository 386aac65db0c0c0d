//! Pure aggregation functions over the transaction list.
//!
//! Everything here is side-effect free and cheap enough to recompute on every
//! query, so no derived value is ever cached in mutable state.
use crate::core::budget::BudgetBucket;
use crate::core::ledger::{Transaction, TransactionKind};
use chrono::Datelike;
use std::collections::HashSet;

const GERMAN_MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// German full month name for a 1-based month number.
pub fn month_label(month: u32) -> &'static str {
    GERMAN_MONTHS[(month as usize - 1) % 12]
}

/// Income and expense totals of one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyFlow {
    /// Grouping key, `YYYY-MM`.
    pub month: String,
    /// Display label, e.g. "März 2024".
    pub label: String,
    pub income: f64,
    pub expenses: f64,
}

/// Total expenses divided by the number of distinct `YYYY-MM` months across
/// *all* transactions (income months count too). Returns 0.0 for an empty
/// ledger.
pub fn monthly_average_spend(transactions: &[Transaction]) -> f64 {
    let expenses = total_expenses(transactions);
    let months: HashSet<String> = transactions
        .iter()
        .map(|t| t.date.format("%Y-%m").to_string())
        .collect();

    if months.is_empty() {
        0.0
    } else {
        expenses / months.len() as f64
    }
}

/// Sum of all expense amounts, regardless of category.
pub fn total_expenses(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .map(|t| t.amount)
        .sum()
}

/// Groups categorized expenses by budget bucket. Income transactions and
/// expenses without a category are excluded. Buckets appear in first-seen
/// order.
pub fn spending_by_bucket(transactions: &[Transaction]) -> Vec<(BudgetBucket, f64)> {
    let mut totals: Vec<(BudgetBucket, f64)> = Vec::new();

    for transaction in transactions {
        if transaction.kind != TransactionKind::Expense {
            continue;
        }
        let Some(bucket) = transaction.category else {
            continue;
        };
        match totals.iter().position(|(b, _)| *b == bucket) {
            Some(index) => totals[index].1 += transaction.amount,
            None => totals.push((bucket, transaction.amount)),
        }
    }

    totals
}

/// Groups all transactions by calendar month (`YYYY-MM`), accumulating income
/// and expenses separately. Months appear in first-seen order.
///
/// The key deliberately includes the year; the month name alone would merge
/// the same month of different years into one group.
pub fn monthly_trend(transactions: &[Transaction]) -> Vec<MonthlyFlow> {
    let mut months: Vec<MonthlyFlow> = Vec::new();

    for transaction in transactions {
        let key = transaction.date.format("%Y-%m").to_string();
        let index = match months.iter().position(|m| m.month == key) {
            Some(index) => index,
            None => {
                months.push(MonthlyFlow {
                    month: key,
                    label: format!(
                        "{} {}",
                        month_label(transaction.date.month()),
                        transaction.date.year()
                    ),
                    income: 0.0,
                    expenses: 0.0,
                });
                months.len() - 1
            }
        };
        let entry = &mut months[index];
        match transaction.kind {
            TransactionKind::Income => entry.income += transaction.amount,
            TransactionKind::Expense => entry.expenses += transaction.amount,
        }
    }

    months
}

/// `(monthly_income - total_expenses) / monthly_income * 100`, rounded to one
/// decimal. `None` when the income is zero, since the rate is undefined then.
pub fn savings_rate(transactions: &[Transaction], monthly_income: f64) -> Option<f64> {
    if monthly_income == 0.0 {
        return None;
    }
    let rate = (monthly_income - total_expenses(transactions)) / monthly_income * 100.0;
    Some((rate * 10.0).round() / 10.0)
}

/// Percentage of `part` relative to `whole`, used for bar widths. Guards
/// against empty and zero groups by returning 0.0.
pub fn proportion_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 { part / whole * 100.0 } else { 0.0 }
}

/// Most recent income transaction. Expects the newest-first ledger order.
pub fn last_income(transactions: &[Transaction]) -> Option<&Transaction> {
    transactions
        .iter()
        .find(|t| t.kind == TransactionKind::Income)
}

/// Most recent expense transaction. Expects the newest-first ledger order.
pub fn last_expense(transactions: &[Transaction]) -> Option<&Transaction> {
    transactions
        .iter()
        .find(|t| t.kind == TransactionKind::Expense)
}
