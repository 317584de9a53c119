use super::tax_code::TaxCode;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("invalid tax rate {rate} for {code}: rate must be greater than -1")]
    InvalidTaxRate { code: TaxCode, rate: Decimal },
    #[error("unknown tax code: {0}")]
    UnknownTaxCode(String),
    #[error("arithmetic overflow converting price")]
    Overflow,
}

/// Tax rate per tax code, as an exact decimal fraction (0.12 = 12%)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    rates: BTreeMap<TaxCode, Decimal>,
}

impl Default for RateTable {
    fn default() -> Self {
        let rates = BTreeMap::from([
            (TaxCode::NoneRate, dec!(0.00)),
            (TaxCode::NoTax, dec!(0.00)),
            (TaxCode::Rate12, dec!(0.12)),
            (TaxCode::Rate14, dec!(0.14)),
        ]);
        RateTable { rates }
    }
}

impl RateTable {
    /// Rate for a code; codes without an entry are zero-rated
    pub fn rate(&self, code: TaxCode) -> Decimal {
        self.rates.get(&code).copied().unwrap_or(Decimal::ZERO)
    }

    /// Replace the rate of a single code.
    ///
    /// Rates at or below -100% would make the inclusive factor non-positive.
    pub fn with_rate(mut self, code: TaxCode, rate: Decimal) -> Result<Self, PricingError> {
        check_rate(code, rate)?;
        self.rates.insert(code, rate);
        Ok(self)
    }

    /// Multiplier from exclusive to inclusive price (`1 + rate`)
    pub fn factor(&self, code: TaxCode) -> Result<Decimal, PricingError> {
        let rate = self.rate(code);
        check_rate(code, rate)?;
        Ok(Decimal::ONE + rate)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TaxCode, Decimal)> + '_ {
        self.rates.iter().map(|(code, rate)| (*code, *rate))
    }
}

fn check_rate(code: TaxCode, rate: Decimal) -> Result<(), PricingError> {
    if rate <= -Decimal::ONE {
        return Err(PricingError::InvalidTaxRate { code, rate });
    }
    Ok(())
}
