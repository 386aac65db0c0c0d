use crate::core::budget::{BudgetBucket, BudgetDistribution};
use crate::core::ledger::{TransactionInput, TransactionKind};
use crate::core::session::{Category, Profile, SavingsGoal, Session};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub monthly_income: f64,
    #[serde(default)]
    pub starting_balance: f64,
    pub budget: BudgetDistribution,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub savings_goals: Vec<SavingsGoal>,
    /// Seed transactions, oldest first. They pass through the same validation
    /// and balance bookkeeping as interactively added ones.
    #[serde(default)]
    pub transactions: Vec<SeedTransaction>,
}

/// A transaction as written in the config file. Mirrors [`TransactionInput`]
/// but keeps the file format decoupled from the in-process API.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SeedTransaction {
    pub amount: f64,
    pub kind: TransactionKind,
    pub date: DateTime<Utc>,
    pub description: String,
    #[serde(default)]
    pub category: Option<BudgetBucket>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<SeedTransaction> for TransactionInput {
    fn from(seed: SeedTransaction) -> Self {
        TransactionInput {
            amount: seed.amount,
            kind: seed.kind,
            date: seed.date,
            description: seed.description,
            category: seed.category,
            tags: seed.tags,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("de", "kasse", "kasse")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Builds a session from this config: validates the budget split against
    /// the income and replays the seed transactions through the ledger.
    pub fn build_session(&self) -> Result<Session> {
        self.budget
            .validate(self.monthly_income)
            .context("Invalid budget in config")?;

        let profile = Profile {
            monthly_income: self.monthly_income,
            budget: self.budget,
            categories: self.categories.clone(),
            savings_goals: self.savings_goals.clone(),
        };

        let mut session = Session::new(profile, self.starting_balance);
        for seed in &self.transactions {
            session
                .add_transaction(seed.clone().into())
                .with_context(|| format!("Invalid seed transaction: {}", seed.description))?;
        }
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
monthly_income: 3500.0
starting_balance: 5000.0
budget:
  fixed: 1750.0
  needs: 1050.0
  wants: 350.0
  savings: 350.0
categories:
  - id: "cat-1"
    name: "Lebensmittel"
    bucket: needs
    budget: 400.0
savings_goals:
  - id: "goal-1"
    name: "Notgroschen"
    target_amount: 10000.0
    current_amount: 2500.0
transactions:
  - amount: 3500.0
    kind: income
    date: "2024-03-01T08:00:00Z"
    description: "Gehalt"
  - amount: 1050.0
    kind: expense
    date: "2024-03-02T10:30:00Z"
    description: "Miete"
    category: needs
    tags: ["wohnen"]
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.monthly_income, 3500.0);
        assert_eq!(config.starting_balance, 5000.0);
        assert_eq!(config.budget.fixed, 1750.0);
        assert_eq!(config.categories.len(), 1);
        assert_eq!(config.categories[0].bucket, BudgetBucket::Needs);
        assert_eq!(config.savings_goals[0].target_amount, 10000.0);
        assert!(config.savings_goals[0].deadline.is_none());
        assert_eq!(config.transactions.len(), 2);
        assert_eq!(config.transactions[1].category, Some(BudgetBucket::Needs));
        assert_eq!(config.transactions[1].tags, vec!["wohnen".to_string()]);
    }

    #[test]
    fn test_build_session_replays_seed_transactions() {
        let yaml_str = r#"
monthly_income: 3500.0
starting_balance: 5000.0
budget:
  fixed: 1750.0
  needs: 1050.0
  wants: 350.0
  savings: 350.0
transactions:
  - amount: 3500.0
    kind: income
    date: "2024-03-01T08:00:00Z"
    description: "Gehalt"
  - amount: 1050.0
    kind: expense
    date: "2024-03-02T10:30:00Z"
    description: "Miete"
    category: needs
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).unwrap();
        let session = config.build_session().unwrap();

        assert_eq!(session.balance(), 5000.0 + 3500.0 - 1050.0);
        // Newest first: the rent expense was added last.
        assert_eq!(session.transactions()[0].description, "Miete");
    }

    #[test]
    fn test_build_session_rejects_invalid_budget() {
        let yaml_str = r#"
monthly_income: 3500.0
budget:
  fixed: 1000.0
  needs: 1000.0
  wants: 1000.0
  savings: 1000.0
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).unwrap();
        let err = config.build_session().unwrap_err();
        assert!(err.to_string().contains("Invalid budget"));
    }

    #[test]
    fn test_optional_sections_default_to_empty() {
        let yaml_str = r#"
monthly_income: 2000.0
budget:
  fixed: 500.0
  needs: 500.0
  wants: 500.0
  savings: 500.0
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).unwrap();
        assert_eq!(config.starting_balance, 0.0);
        assert!(config.categories.is_empty());
        assert!(config.transactions.is_empty());

        let session = config.build_session().unwrap();
        assert_eq!(session.balance(), 0.0);
    }
}
