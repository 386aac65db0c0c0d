//! The session object: one user's profile plus their ledger.
//!
//! A `Session` is an explicit value the presentation layer receives by
//! reference; there is no process-wide singleton. All mutations go through
//! the handful of methods below, all reads are pure queries.
use crate::core::analytics::{self, MonthlyFlow};
use crate::core::budget::{BudgetBucket, BudgetDistribution};
use crate::core::error::Result;
use crate::core::ledger::{Ledger, Transaction, TransactionInput};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A user-defined spending category tied to one of the four budget buckets.
///
/// The amount spent against a category is never stored; it is recomputed from
/// the ledger on every query, see [`Session::category_report`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub bucket: BudgetBucket,
    pub budget: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: Option<DateTime<Utc>>,
}

impl SavingsGoal {
    /// Progress towards the target in percent, capped at 100.
    pub fn progress(&self) -> f64 {
        analytics::proportion_of(self.current_amount, self.target_amount).min(100.0)
    }
}

#[derive(Debug, Clone)]
pub struct Profile {
    pub monthly_income: f64,
    pub budget: BudgetDistribution,
    pub categories: Vec<Category>,
    pub savings_goals: Vec<SavingsGoal>,
}

/// Partial profile update; `None` fields are left untouched.
///
/// The budget split is deliberately absent here: it only changes through the
/// validated [`Session::set_budget`] path.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub monthly_income: Option<f64>,
    pub categories: Option<Vec<Category>>,
    pub savings_goals: Option<Vec<SavingsGoal>>,
}

/// A category together with its spending derived from the ledger.
#[derive(Debug, Clone)]
pub struct CategoryStatus {
    pub name: String,
    pub bucket: BudgetBucket,
    pub budget: f64,
    pub spent: f64,
}

#[derive(Debug)]
pub struct Session {
    profile: Profile,
    ledger: Ledger,
}

impl Session {
    pub fn new(profile: Profile, starting_balance: f64) -> Self {
        Self {
            profile,
            ledger: Ledger::new(starting_balance),
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn balance(&self) -> f64 {
        self.ledger.balance()
    }

    /// All transactions, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    pub fn add_transaction(&mut self, input: TransactionInput) -> Result<Transaction> {
        Ok(self.ledger.add(input)?.clone())
    }

    /// Removes a transaction and undoes its balance effect. Unknown ids are
    /// ignored.
    pub fn delete_transaction(&mut self, id: &str) {
        self.ledger.remove(id);
    }

    pub fn update_profile(&mut self, update: ProfileUpdate) -> &Profile {
        if let Some(monthly_income) = update.monthly_income {
            debug!(monthly_income, "Updating monthly income");
            self.profile.monthly_income = monthly_income;
        }
        if let Some(categories) = update.categories {
            self.profile.categories = categories;
        }
        if let Some(savings_goals) = update.savings_goals {
            self.profile.savings_goals = savings_goals;
        }
        &self.profile
    }

    /// Replaces the budget split after validating it against the current
    /// monthly income. On rejection the previous split stays in place.
    pub fn set_budget(&mut self, budget: BudgetDistribution) -> Result<()> {
        budget.validate(self.profile.monthly_income)?;
        self.profile.budget = budget;
        Ok(())
    }

    pub fn monthly_average(&self) -> f64 {
        analytics::monthly_average_spend(self.transactions())
    }

    pub fn spending_by_bucket(&self) -> Vec<(BudgetBucket, f64)> {
        analytics::spending_by_bucket(self.transactions())
    }

    pub fn monthly_trend(&self) -> Vec<MonthlyFlow> {
        analytics::monthly_trend(self.transactions())
    }

    pub fn savings_rate(&self) -> Option<f64> {
        analytics::savings_rate(self.transactions(), self.profile.monthly_income)
    }

    pub fn last_income(&self) -> Option<&Transaction> {
        analytics::last_income(self.transactions())
    }

    pub fn last_expense(&self) -> Option<&Transaction> {
        analytics::last_expense(self.transactions())
    }

    /// Every category with its spending recomputed from the ledger. Spending
    /// is attributed per bucket, so categories sharing a bucket report the
    /// same spent amount.
    pub fn category_report(&self) -> Vec<CategoryStatus> {
        let spending = self.spending_by_bucket();
        self.profile
            .categories
            .iter()
            .map(|category| CategoryStatus {
                name: category.name.clone(),
                bucket: category.bucket,
                budget: category.budget,
                spent: spending
                    .iter()
                    .find(|(bucket, _)| *bucket == category.bucket)
                    .map_or(0.0, |(_, amount)| *amount),
            })
            .collect()
    }
}
