use super::template::Template;
use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// A sellable variant of a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub code: String,
    pub template: Template,
    /// Days between order and delivery
    pub delivery_time: u32,
}

/// Conversions applied when quoting a sale price.
///
/// `uom_factor` converts a price per default unit into a price per sale
/// unit; `currency_rate` converts the company currency into the quoted one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaleContext {
    pub uom_factor: Option<Decimal>,
    pub currency_rate: Option<Decimal>,
}

impl Product {
    pub fn new(code: impl Into<String>, template: Template) -> Self {
        Product {
            code: code.into(),
            template,
            delivery_time: 0,
        }
    }

    /// Sale price for this product, `None` when the template has no list price
    /// or the conversions overflow
    pub fn sale_price(&self, ctx: &SaleContext) -> Option<Decimal> {
        let mut price = self.template.list_price?;
        for factor in [ctx.uom_factor, ctx.currency_rate].into_iter().flatten() {
            price = price.checked_mul(factor).or_else(|| {
                log::warn!("Sale price of {} overflows, not computed", self.code);
                None
            })?;
        }
        Some(price)
    }

    /// Date the product can be delivered when ordered on `date`
    pub fn compute_delivery_date(&self, date: NaiveDate) -> Option<NaiveDate> {
        date.checked_add_days(Days::new(u64::from(self.delivery_time)))
    }
}

/// Sale prices keyed by product code
pub fn sale_prices(products: &[Product], ctx: &SaleContext) -> BTreeMap<String, Option<Decimal>> {
    products
        .iter()
        .map(|p| (p.code.clone(), p.sale_price(ctx)))
        .collect()
}
