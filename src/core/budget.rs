//! Budget buckets and the 4-way income split
use crate::core::error::{KasseError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Allowed drift between the split total and the monthly income. Amounts are
/// entered with cent precision, so anything below a cent is treated as equal.
pub const ALLOCATION_EPSILON: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetBucket {
    Fixed,
    Needs,
    Wants,
    Savings,
}

impl BudgetBucket {
    pub const ALL: [BudgetBucket; 4] = [
        BudgetBucket::Fixed,
        BudgetBucket::Needs,
        BudgetBucket::Wants,
        BudgetBucket::Savings,
    ];

    /// Returns the German display label for the bucket
    pub fn label(&self) -> &'static str {
        match self {
            BudgetBucket::Fixed => "Fixkosten",
            BudgetBucket::Needs => "Bedürfnisse",
            BudgetBucket::Wants => "Wünsche",
            BudgetBucket::Savings => "Sparen/Investieren",
        }
    }
}

impl Display for BudgetBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                BudgetBucket::Fixed => "fixed",
                BudgetBucket::Needs => "needs",
                BudgetBucket::Wants => "wants",
                BudgetBucket::Savings => "savings",
            }
        )
    }
}

impl FromStr for BudgetBucket {
    type Err = KasseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "fixed" => Ok(BudgetBucket::Fixed),
            "needs" => Ok(BudgetBucket::Needs),
            "wants" => Ok(BudgetBucket::Wants),
            "savings" => Ok(BudgetBucket::Savings),
            _ => Err(KasseError::UnknownCategory(s.to_string())),
        }
    }
}

/// A requested 4-way split of the monthly income.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetDistribution {
    pub fixed: f64,
    pub needs: f64,
    pub wants: f64,
    pub savings: f64,
}

impl BudgetDistribution {
    pub fn share(&self, bucket: BudgetBucket) -> f64 {
        match bucket {
            BudgetBucket::Fixed => self.fixed,
            BudgetBucket::Needs => self.needs,
            BudgetBucket::Wants => self.wants,
            BudgetBucket::Savings => self.savings,
        }
    }

    /// Shares in bucket order, handy for table rendering.
    pub fn shares(&self) -> [(BudgetBucket, f64); 4] {
        BudgetBucket::ALL.map(|bucket| (bucket, self.share(bucket)))
    }

    pub fn total(&self) -> f64 {
        self.fixed + self.needs + self.wants + self.savings
    }

    /// Checks the split against the monthly income: every share must be a
    /// non-negative finite number and the four shares must sum to the income
    /// within [`ALLOCATION_EPSILON`].
    pub fn validate(&self, monthly_income: f64) -> Result<()> {
        for (bucket, share) in self.shares() {
            if !share.is_finite() || share < 0.0 {
                return Err(KasseError::InvalidAllocation(format!(
                    "{bucket} share must be a non-negative number, got {share}"
                )));
            }
        }

        let difference = self.total() - monthly_income;
        if difference.abs() > ALLOCATION_EPSILON {
            return Err(KasseError::InvalidAllocation(format!(
                "shares sum to {:.2} but monthly income is {:.2} (difference {:+.2})",
                self.total(),
                monthly_income,
                difference
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(fixed: f64, needs: f64, wants: f64, savings: f64) -> BudgetDistribution {
        BudgetDistribution {
            fixed,
            needs,
            wants,
            savings,
        }
    }

    #[test]
    fn test_exact_split_is_accepted() {
        let budget = split(1750.0, 1050.0, 350.0, 350.0);
        assert!(budget.validate(3500.0).is_ok());
        assert_eq!(budget.total(), 3500.0);
    }

    #[test]
    fn test_split_within_epsilon_is_accepted() {
        let budget = split(1750.0, 1050.0, 350.0, 349.995);
        assert!(budget.validate(3500.0).is_ok());
    }

    #[test]
    fn test_shortfall_is_rejected_with_difference() {
        let budget = split(1750.0, 1050.0, 350.0, 250.0);
        let err = budget.validate(3500.0).unwrap_err();
        assert!(matches!(err, KasseError::InvalidAllocation(_)));
        assert!(err.to_string().contains("-100.00"));
    }

    #[test]
    fn test_excess_is_rejected_with_difference() {
        let budget = split(2000.0, 1050.0, 350.0, 350.0);
        let err = budget.validate(3500.0).unwrap_err();
        assert!(err.to_string().contains("+250.00"));
    }

    #[test]
    fn test_negative_share_is_rejected() {
        let budget = split(3550.0, 1050.0, 350.0, -50.0);
        let err = budget.validate(3500.0).unwrap_err();
        assert!(err.to_string().contains("savings"));
    }

    #[test]
    fn test_bucket_round_trip() {
        for bucket in BudgetBucket::ALL {
            assert_eq!(bucket.to_string().parse::<BudgetBucket>().unwrap(), bucket);
        }
        assert!(matches!(
            "groceries".parse::<BudgetBucket>(),
            Err(KasseError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_bucket_serde_is_lowercase() {
        let yaml = serde_yaml::to_string(&BudgetBucket::Needs).unwrap();
        assert_eq!(yaml.trim(), "needs");
        let parsed: BudgetBucket = serde_yaml::from_str("wants").unwrap();
        assert_eq!(parsed, BudgetBucket::Wants);
    }
}
