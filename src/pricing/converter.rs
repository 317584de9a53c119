use super::rates::{PricingError, RateTable};
use super::tax_code::TaxCode;
use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits for unit prices when nothing else is configured
pub const DEFAULT_DIGITS: u32 = 4;

/// Add tax to an exclusive price.
///
/// An absent price stays absent, and so does one too large to carry its tax.
/// No rounding is applied in this direction.
pub fn to_inclusive(amount: Option<Decimal>, code: TaxCode, rates: &RateTable) -> Option<Decimal> {
    let amount = amount?;
    let rate = rates.rate(code);
    let Some(inclusive) = amount
        .checked_mul(rate)
        .and_then(|tax| amount.checked_add(tax))
    else {
        log::warn!("Price {} overflows with {} tax, not computed", amount, code);
        return None;
    };
    log::debug!("{} + {} ({}) = {}", amount, rate, code, inclusive);
    Some(inclusive)
}

/// Remove tax from an inclusive price, rounded half-even to `digits` places.
pub fn to_exclusive(
    amount: Decimal,
    code: TaxCode,
    digits: u32,
    rates: &RateTable,
) -> Result<Decimal, PricingError> {
    let factor = rates.factor(code)?;
    let mut exclusive = amount
        .checked_div(factor)
        .ok_or(PricingError::Overflow)?
        .round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven);
    exclusive.rescale(digits);
    log::debug!("{} / {} ({}) = {}", amount, factor, code, exclusive);
    Ok(exclusive)
}

/// Rate table and precision used for every conversion of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceConverter {
    pub rates: RateTable,
    pub digits: u32,
}

impl Default for PriceConverter {
    fn default() -> Self {
        PriceConverter {
            rates: RateTable::default(),
            digits: DEFAULT_DIGITS,
        }
    }
}

impl PriceConverter {
    pub fn new(rates: RateTable, digits: u32) -> Self {
        PriceConverter { rates, digits }
    }

    pub fn inclusive(&self, amount: Option<Decimal>, code: TaxCode) -> Option<Decimal> {
        to_inclusive(amount, code, &self.rates)
    }

    pub fn exclusive(&self, amount: Decimal, code: TaxCode) -> Result<Decimal, PricingError> {
        to_exclusive(amount, code, self.digits, &self.rates)
    }
}
