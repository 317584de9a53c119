//! Schema command - print expected input formats

use crate::catalog::CatalogInput;
use crate::config::Config;
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Which input to describe
    #[arg(value_enum, default_value = "catalog")]
    input: SchemaInput,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaInput {
    /// Catalog file read by the catalog command
    Catalog,
    /// Config file passed with --config
    Config,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let schema = match self.input {
            SchemaInput::Catalog => schema_for!(CatalogInput),
            SchemaInput::Config => schema_for!(Config),
        };
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }
}
