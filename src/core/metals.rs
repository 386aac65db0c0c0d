//! Precious-metal spot quotes and the weight-unit calculator
use crate::core::error::{KasseError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Ounce,
    Gram,
    Kilogram,
    Pound,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 4] = [
        WeightUnit::Ounce,
        WeightUnit::Gram,
        WeightUnit::Kilogram,
        WeightUnit::Pound,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            WeightUnit::Ounce => "oz",
            WeightUnit::Gram => "g",
            WeightUnit::Kilogram => "kg",
            WeightUnit::Pound => "lb",
        }
    }

    /// Multiplier to troy ounces. These are the fixed approximations shown in
    /// the UI (1 oz rounded to 31.1 g), kept as literal constants so that
    /// computed values match the displayed figures.
    pub fn troy_ounces(&self) -> f64 {
        match self {
            WeightUnit::Ounce => 1.0,
            WeightUnit::Gram => 0.03215,
            WeightUnit::Kilogram => 32.15,
            WeightUnit::Pound => 14.58,
        }
    }
}

impl Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for WeightUnit {
    type Err = KasseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "oz" => Ok(WeightUnit::Ounce),
            "g" => Ok(WeightUnit::Gram),
            "kg" => Ok(WeightUnit::Kilogram),
            "lb" => Ok(WeightUnit::Pound),
            _ => Err(KasseError::UnknownUnit(s.to_string())),
        }
    }
}

/// Converts a weight in the given unit to its value in the base currency at
/// the given spot price per troy ounce. Fails with [`KasseError::UnknownUnit`]
/// when the unit symbol is not in the table.
pub fn value_in_base_currency(weight: f64, unit: &str, spot_price_per_ounce: f64) -> Result<f64> {
    let unit: WeightUnit = unit.parse()?;
    Ok(weight * unit.troy_ounces() * spot_price_per_ounce)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metal {
    Gold,
    Silver,
}

impl Metal {
    /// Returns the German display label for the metal
    pub fn label(&self) -> &'static str {
        match self {
            Metal::Gold => "Gold",
            Metal::Silver => "Silber",
        }
    }
}

/// Spot price per troy ounce plus the 24h change in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetalQuote {
    pub price: f64,
    pub change_24h: f64,
}

pub trait SpotPriceProvider {
    fn quote(&self, metal: Metal) -> MetalQuote;
}

/// Simulated quotes. A live price feed is out of scope, so the values are the
/// static figures the UI has always shown.
pub struct StaticQuoteProvider;

impl SpotPriceProvider for StaticQuoteProvider {
    fn quote(&self, metal: Metal) -> MetalQuote {
        match metal {
            Metal::Gold => MetalQuote {
                price: 1876.50,
                change_24h: 2.3,
            },
            Metal::Silver => MetalQuote {
                price: 23.15,
                change_24h: -0.8,
            },
        }
    }
}
