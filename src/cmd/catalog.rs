//! Catalog command - price every template of a catalog file

use crate::catalog::{build_catalog, Catalog};
use crate::cmd::{format_amount, read_catalog};
use crate::config::Config;
use crate::pricing::{sale_prices, SaleContext};
use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct CatalogCommand {
    /// JSON catalog file (or "-" for stdin)
    #[arg(short, long)]
    file: PathBuf,

    /// List products (sale price, delivery date) instead of templates
    #[arg(long)]
    products: bool,

    /// Order date used for delivery dates
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Unit of measure factor applied to sale prices
    #[arg(long)]
    uom_factor: Option<Decimal>,

    /// Currency rate applied to sale prices
    #[arg(long)]
    currency_rate: Option<Decimal>,

    /// Output as JSON instead of formatted table
    #[arg(long, conflicts_with = "csv")]
    json: bool,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

/// Row for the templates table output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TemplateRow {
    #[tabled(rename = "Template")]
    pub name: String,

    #[tabled(rename = "Tax")]
    pub tax: String,

    #[tabled(rename = "List Price")]
    pub list_price: String,

    #[tabled(rename = "List Price With Tax")]
    pub list_price_with_tax: String,

    #[tabled(rename = "Cost Price")]
    pub cost_price: String,

    #[tabled(rename = "Cost Price With Tax")]
    pub cost_price_with_tax: String,
}

/// Row for the products table output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ProductRow {
    #[tabled(rename = "Code")]
    pub code: String,

    #[tabled(rename = "Template")]
    pub template: String,

    #[tabled(rename = "Sale Price")]
    pub sale_price: String,

    #[tabled(rename = "Delivery")]
    pub delivery_date: String,
}

impl CatalogCommand {
    pub fn exec(&self, config: &Config) -> anyhow::Result<()> {
        let converter = config.converter()?;
        let input = read_catalog(&self.file)?;
        let catalog = build_catalog(&input, &converter, config.strict)?;

        if self.products {
            let ctx = SaleContext {
                uom_factor: self.uom_factor,
                currency_rate: self.currency_rate,
            };
            let rows = build_product_rows(&catalog, &ctx, self.date);
            self.output(&rows, "No products found")
        } else {
            let rows = build_template_rows(&catalog);
            self.output(&rows, "No templates found")
        }
    }

    fn output<R: Tabled + Serialize>(&self, rows: &[R], empty: &str) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(rows)?);
        } else if self.csv {
            let mut wtr = csv::Writer::from_writer(io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        } else if rows.is_empty() {
            println!("{}", empty);
        } else {
            let table = Table::new(rows)
                .with(Style::rounded())
                .with(Modify::new(Columns::new(2..)).with(Alignment::right()))
                .to_string();
            println!("{}", table);
        }
        Ok(())
    }
}

pub fn build_template_rows(catalog: &Catalog) -> Vec<TemplateRow> {
    catalog
        .templates
        .iter()
        .map(|t| TemplateRow {
            name: t.name.clone(),
            tax: t.tax_code().map_or_else(|| "-".to_string(), |c| c.to_string()),
            list_price: format_amount(t.list_price),
            list_price_with_tax: format_amount(t.list_price_with_tax),
            cost_price: format_amount(t.cost_price),
            cost_price_with_tax: format_amount(t.cost_price_with_tax),
        })
        .collect()
}

pub fn build_product_rows(
    catalog: &Catalog,
    ctx: &SaleContext,
    date: Option<NaiveDate>,
) -> Vec<ProductRow> {
    let prices = sale_prices(&catalog.products, ctx);
    catalog
        .products
        .iter()
        .map(|p| ProductRow {
            code: p.code.clone(),
            template: p.template.name.clone(),
            sale_price: format_amount(prices.get(&p.code).copied().flatten()),
            delivery_date: date
                .and_then(|d| p.compute_delivery_date(d))
                .map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string()),
        })
        .collect()
}
