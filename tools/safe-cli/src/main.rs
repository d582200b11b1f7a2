//! ConsumeSafe CLI - boycott checks with local alternatives.
//!
//! Commands:
//! - `consumesafe check` - Check a product by name or barcode
//! - `consumesafe search` - Search products by name and brand or description
//! - `consumesafe list` - List all, boycotted or Tunisian products
//! - `consumesafe reason` - Show why a product is boycotted
//! - `consumesafe show` - Show one product with its alternatives
//! - `consumesafe exists` - Check whether a name or barcode is known
//! - `consumesafe add` - Add a product
//! - `consumesafe alternative` - Recommend one product in place of another
//! - `consumesafe delete` - Delete a product
//! - `consumesafe seed` - Load seed data
//! - `consumesafe config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    AddArgs, AlternativeArgs, CheckArgs, ConfigArgs, DeleteArgs, ExistsArgs, ListArgs, NameArgs,
    SearchArgs, SeedArgs, ShowArgs,
};

/// ConsumeSafe - Check products against the boycott list and find local alternatives
#[derive(Parser)]
#[command(name = "consumesafe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<String>,

    /// Catalog file path (overrides the config file)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a product is boycotted
    Check(CheckArgs),

    /// Search products
    Search(SearchArgs),

    /// List products
    List(ListArgs),

    /// Show the boycott reason for a product
    Reason(NameArgs),

    /// Show a product by id
    Show(ShowArgs),

    /// Check whether a product name or barcode exists
    Exists(ExistsArgs),

    /// Add a product to the catalog
    Add(AddArgs),

    /// Recommend an alternative for a boycotted product
    Alternative(AlternativeArgs),

    /// Delete a product and its alternatives
    Delete(DeleteArgs),

    /// Load seed data into the catalog
    Seed(SeedArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config and catalog
    let ctx = match context::Context::load(cli.config.as_deref(), cli.catalog.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Check(args) => commands::check::run(args, &ctx),
        Commands::Search(args) => commands::search::run(args, &ctx),
        Commands::List(args) => commands::list::run(args, &ctx),
        Commands::Reason(args) => commands::check::reason(args, &ctx),
        Commands::Show(args) => commands::list::show(args, &ctx),
        Commands::Exists(args) => commands::check::exists(args, &ctx),
        Commands::Add(args) => commands::edit::add(args, &ctx),
        Commands::Alternative(args) => commands::edit::alternative(args, &ctx),
        Commands::Delete(args) => commands::edit::delete(args, &ctx),
        Commands::Seed(args) => commands::seed::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
