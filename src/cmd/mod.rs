pub mod catalog;
pub mod convert;
pub mod rates;
pub mod schema;

use crate::catalog::{read_catalog_json, CatalogInput};
use crate::config::Config;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Load the config file (if any) and apply command line overrides
pub fn load_config(path: Option<&Path>, digits: Option<u32>, strict: bool) -> anyhow::Result<Config> {
    let mut config = match path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(digits) = digits {
        config.unit_price_digits = digits;
    }
    config.strict |= strict;
    Ok(config)
}

/// Read catalog JSON from a file (or stdin with "-")
pub fn read_catalog(path: &Path) -> anyhow::Result<CatalogInput> {
    if path.as_os_str() == "-" {
        read_from_stdin()
    } else {
        let file = File::open(path)?;
        read_catalog_json(BufReader::new(file))
    }
}

fn read_from_stdin() -> anyhow::Result<CatalogInput> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    read_catalog_json(io::Cursor::new(buffer))
}

/// Display an optional amount, "-" when absent
pub fn format_amount(amount: Option<rust_decimal::Decimal>) -> String {
    amount.map_or_else(|| "-".to_string(), |a| a.to_string())
}
