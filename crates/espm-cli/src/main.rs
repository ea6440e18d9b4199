//! ESPM Cards CLI - supplier master list and Mobile Cards sync from the terminal
//!
//! Browse a supplier catalog, pick the suppliers that should have a card, and
//! reconcile the user's Mobile Cards registrations with that selection.

mod catalog;
mod cli;
mod commands;
mod console;
mod error;

use clap::Parser;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::cards::run_cards;
use crate::commands::common::resolve_config_path;
use crate::commands::completions::run_completions;
use crate::commands::config::run_config;
use crate::commands::delete_all::run_delete_all;
use crate::commands::suppliers::run_suppliers;
use crate::commands::sync::{run_sync, SyncOptions};
use crate::console::ConsoleNotifier;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "espm=info".parse::<Directive>() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let user = cli.user.as_deref();

    match cli.command {
        Commands::Sync {
            catalog,
            selected,
            all,
            template,
            dry_run,
            json,
        } => {
            let config_path = resolve_config_path(cli.config.as_deref())?;
            let options = SyncOptions {
                catalog: &catalog,
                selected: &selected,
                all,
                template: template.as_deref(),
                dry_run,
                as_json: json,
            };
            let mut stdout = std::io::stdout().lock();
            run_sync(options, &config_path, user, &ConsoleNotifier, &mut stdout).await?;
        }
        Commands::DeleteAll => {
            let config_path = resolve_config_path(cli.config.as_deref())?;
            run_delete_all(&config_path, user).await?;
        }
        Commands::Cards { json } => {
            let config_path = resolve_config_path(cli.config.as_deref())?;
            run_cards(json, &config_path, user).await?;
        }
        Commands::Suppliers {
            catalog,
            search,
            country,
            sort,
            json,
        } => run_suppliers(&catalog, search.as_deref(), country.as_deref(), sort, json)?,
        Commands::Config { command } => {
            let config_path = resolve_config_path(cli.config.as_deref())?;
            run_config(command, &config_path)?;
        }
        Commands::Completions { shell, output } => run_completions(shell, output.as_deref())?,
    }

    Ok(())
}
