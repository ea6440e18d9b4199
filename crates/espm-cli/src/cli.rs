use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "espm-cards")]
#[command(about = "Browse ESPM suppliers and sync them with Mobile Cards")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to the config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Mobile Cards user, overriding the configured one
    #[arg(long, global = true, value_name = "NAME")]
    pub user: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register cards for the selected suppliers and delete the rest
    Sync {
        /// Supplier catalog JSON file
        #[arg(long, value_name = "PATH")]
        catalog: PathBuf,
        /// Supplier id to keep a card for (repeatable)
        #[arg(long = "select", value_name = "ID")]
        selected: Vec<String>,
        /// Keep a card for every supplier in the catalog
        #[arg(long, conflicts_with = "selected")]
        all: bool,
        /// Registration template id for this pass
        #[arg(long, value_name = "ID")]
        template: Option<String>,
        /// Show the planned card list without changing anything
        #[arg(long)]
        dry_run: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete every card registered for the user
    DeleteAll,
    /// List the cards currently registered for the user
    Cards {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the supplier master list
    Suppliers {
        /// Supplier catalog JSON file
        #[arg(long, value_name = "PATH")]
        catalog: PathBuf,
        /// Search supplier names
        #[arg(short, long)]
        search: Option<String>,
        /// Only show suppliers from this country
        #[arg(long)]
        country: Option<String>,
        /// Sort column
        #[arg(long, value_enum, default_value_t = SortColumn::SupplierName)]
        sort: SortColumn,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage the Mobile Cards connection config
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SortColumn {
    SupplierName,
    SupplierId,
    City,
    Country,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Create or update the config file
    Init {
        /// Mobile Services base URL
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
        /// Default Mobile Cards user
        #[arg(long, value_name = "NAME")]
        username: Option<String>,
        /// Registration template id
        #[arg(long, value_name = "ID")]
        template: Option<String>,
        /// Application URL deep links point to
        #[arg(long, value_name = "URL")]
        app_url: Option<String>,
        /// Milliseconds between card request starts
        #[arg(long, value_name = "MS")]
        stagger_ms: Option<u64>,
    },
    /// Print the effective config
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
