//! Inclusive/exclusive commands - convert a single price

use crate::cmd::format_amount;
use crate::config::Config;
use crate::pricing::{parse_tax_tag, TaxCode};
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct InclusiveCommand {
    /// Price before tax (omit for an unset price)
    #[arg(short, long)]
    price: Option<Decimal>,

    /// Tax tag: iva0, no_iva, iva12 or iva14
    #[arg(short, long)]
    tax: Option<String>,
}

#[derive(Args, Debug)]
pub struct ExclusiveCommand {
    /// Price with tax included
    #[arg(short, long)]
    price: Decimal,

    /// Tax tag: iva0, no_iva, iva12 or iva14
    #[arg(short, long)]
    tax: Option<String>,
}

fn tax_code(tag: Option<&str>, config: &Config) -> anyhow::Result<TaxCode> {
    let code = parse_tax_tag(tag, config.strict)?;
    Ok(code.unwrap_or_default())
}

impl InclusiveCommand {
    pub fn exec(&self, config: &Config) -> anyhow::Result<()> {
        let converter = config.converter()?;
        let code = tax_code(self.tax.as_deref(), config)?;
        println!("{}", format_amount(converter.inclusive(self.price, code)));
        Ok(())
    }
}

impl ExclusiveCommand {
    pub fn exec(&self, config: &Config) -> anyhow::Result<()> {
        let converter = config.converter()?;
        let code = tax_code(self.tax.as_deref(), config)?;
        println!("{}", converter.exclusive(self.price, code)?);
        Ok(())
    }
}
