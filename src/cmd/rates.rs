//! Rates command - print the effective tax rate table

use crate::config::Config;
use clap::Args;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct RatesCommand {
    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Tabled, Serialize)]
struct RateRow {
    #[tabled(rename = "Tag")]
    tag: &'static str,
    #[tabled(rename = "Tax")]
    label: &'static str,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Factor")]
    factor: String,
}

impl RatesCommand {
    pub fn exec(&self, config: &Config) -> anyhow::Result<()> {
        let converter = config.converter()?;
        let rows = converter
            .rates
            .iter()
            .map(|(code, rate)| -> anyhow::Result<RateRow> {
                Ok(RateRow {
                    tag: code.tag(),
                    label: code.label(),
                    rate: rate.to_string(),
                    factor: converter.rates.factor(code)?.to_string(),
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        } else {
            let table = Table::new(&rows)
                .with(Style::rounded())
                .with(Modify::new(Columns::new(2..)).with(Alignment::right()))
                .to_string();
            println!("{}", table);
        }
        Ok(())
    }
}
