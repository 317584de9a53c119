use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod catalog;
mod cmd;
mod config;
mod pricing;

/// Tax-inclusive price conversion for product catalogs
#[derive(Parser, Debug)]
#[command(version, about)]
struct Opts {
    /// JSON config file (digits, strict mode, rate overrides)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fractional digits of derived exclusive prices
    #[arg(long, global = true)]
    digits: Option<u32>,

    /// Reject unknown tax tags instead of treating them as zero-rated
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add tax to a price
    Inclusive(cmd::convert::InclusiveCommand),
    /// Remove tax from a price
    Exclusive(cmd::convert::ExclusiveCommand),
    /// Price the templates and products of a catalog file
    Catalog(cmd::catalog::CatalogCommand),
    /// Show the tax rate table
    Rates(cmd::rates::RatesCommand),
    /// Print the JSON schema of an input file
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    let config = cmd::load_config(opts.config.as_deref(), opts.digits, opts.strict)?;
    log::debug!("{:?}", config);

    match opts.command {
        Command::Inclusive(cmd) => cmd.exec(&config),
        Command::Exclusive(cmd) => cmd.exec(&config),
        Command::Catalog(cmd) => cmd.exec(&config),
        Command::Rates(cmd) => cmd.exec(&config),
        Command::Schema(cmd) => cmd.exec(),
    }
}
