//! CLI command implementations.

pub mod check;
pub mod config;
pub mod edit;
pub mod list;
pub mod search;
pub mod seed;

use clap::{ArgGroup, Args, Subcommand, ValueEnum};
use safe_catalog::prelude::{ProductId, SearchField};

/// Arguments for the check command.
#[derive(Args)]
#[command(group(ArgGroup::new("identifier").required(true).args(["name", "barcode"])))]
pub struct CheckArgs {
    /// Product name (case-insensitive).
    pub name: Option<String>,

    /// Look the product up by barcode instead.
    #[arg(short, long)]
    pub barcode: Option<String>,
}

/// Which text field a search also looks at, besides the name.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum FieldArg {
    #[default]
    Brand,
    Description,
}

impl From<FieldArg> for SearchField {
    fn from(field: FieldArg) -> Self {
        match field {
            FieldArg::Brand => SearchField::Brand,
            FieldArg::Description => SearchField::Description,
        }
    }
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search term; empty matches everything.
    #[arg(default_value = "")]
    pub term: String,

    /// Field searched alongside the name.
    #[arg(short, long, value_enum, default_value_t = FieldArg::Brand)]
    pub field: FieldArg,
}

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    #[command(subcommand)]
    pub command: Option<ListCommand>,
}

#[derive(Subcommand)]
pub enum ListCommand {
    /// Every product (default).
    All,
    /// Local products, optionally in one category.
    Tunisian {
        /// Exact category name.
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Products on the boycott list.
    Boycotted,
}

/// Arguments for commands taking a product name.
#[derive(Args)]
pub struct NameArgs {
    /// Product name (case-insensitive).
    pub name: String,
}

/// Arguments for the exists command.
#[derive(Args)]
#[command(group(ArgGroup::new("identifier").required(true).args(["name", "barcode"])))]
pub struct ExistsArgs {
    /// Exact product name.
    pub name: Option<String>,

    /// Check a barcode instead.
    #[arg(short, long)]
    pub barcode: Option<String>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id.
    pub id: ProductId,
}

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product name.
    #[arg(short, long)]
    pub name: String,

    /// Mark as boycotted, with the reason shown to consumers.
    #[arg(long, value_name = "REASON", conflicts_with = "tunisian")]
    pub boycotted: Option<String>,

    /// Mark as a local Tunisian product.
    #[arg(short, long)]
    pub tunisian: bool,

    #[arg(short, long)]
    pub description: Option<String>,

    #[arg(short, long)]
    pub category: Option<String>,

    #[arg(long)]
    pub brand: Option<String>,

    #[arg(long)]
    pub barcode: Option<String>,

    #[arg(long)]
    pub image_url: Option<String>,

    /// Price in TND.
    #[arg(short, long)]
    pub price: Option<f64>,
}

/// Arguments for the alternative command.
#[derive(Args)]
pub struct AlternativeArgs {
    /// Id of the boycotted product.
    pub boycotted: ProductId,

    /// Id of the recommended replacement.
    pub alternative: ProductId,

    /// Why the replacement fits.
    #[arg(short, long)]
    pub reason: String,

    /// Similarity score (defaults to 0.95).
    #[arg(short, long)]
    pub score: Option<f64>,
}

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Product id.
    pub id: ProductId,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the seed command.
#[derive(Args)]
pub struct SeedArgs {
    /// Seed document (.json or .toml) instead of the built-in demo catalog.
    #[arg(short, long)]
    pub from: Option<String>,

    /// Replace the current catalog instead of seeding only when empty.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
