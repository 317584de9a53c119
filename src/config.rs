use crate::pricing::{PriceConverter, PricingError, RateTable, TaxCode, DEFAULT_DIGITS};
use anyhow::Context;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Largest scale a `Decimal` can carry
const MAX_DIGITS: u32 = 28;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unit_price_digits must be at most 28, got {0}")]
    InvalidDigits(u32),
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Settings shared by every command, read from an optional JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// Fractional digits of exclusive prices derived from inclusive ones
    pub unit_price_digits: u32,
    /// Reject unknown tax tags instead of treating them as zero-rated
    pub strict: bool,
    /// Rate overrides keyed by tax tag (e.g. "iva14": "0.15")
    #[schemars(with = "BTreeMap<String, f64>")]
    pub rates: BTreeMap<String, Decimal>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            unit_price_digits: DEFAULT_DIGITS,
            strict: false,
            rates: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file {}", path.display()))?;
        let config: Config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn rate_table(&self) -> Result<RateTable, ConfigError> {
        let mut table = RateTable::default();
        for (tag, rate) in &self.rates {
            let code = TaxCode::from_tag(tag)
                .ok_or_else(|| PricingError::UnknownTaxCode(tag.clone()))?;
            table = table.with_rate(code, *rate)?;
            log::debug!("Rate for {} set to {}", code, rate);
        }
        Ok(table)
    }

    pub fn converter(&self) -> Result<PriceConverter, ConfigError> {
        if self.unit_price_digits > MAX_DIGITS {
            return Err(ConfigError::InvalidDigits(self.unit_price_digits));
        }
        Ok(PriceConverter::new(self.rate_table()?, self.unit_price_digits))
    }
}
