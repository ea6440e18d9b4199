use std::path::Path;

use espm_core::cards::{CardRegistry, RegistrationScope};

use crate::commands::common::{
    build_engine, format_card_lines, remote_card_to_item, resolve_settings, CardListItem,
};
use crate::error::CliError;

pub async fn run_cards(
    as_json: bool,
    config_path: &Path,
    user: Option<&str>,
) -> Result<(), CliError> {
    let settings = resolve_settings(config_path, user)?;
    let engine = build_engine(&settings)?;
    let scope = RegistrationScope::new(settings.username, settings.sync.template_name);
    let cards = engine.registry().list(&scope).await?;

    let items = cards
        .iter()
        .map(remote_card_to_item)
        .collect::<Vec<CardListItem>>();
    if as_json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if items.is_empty() {
        println!("No cards registered.");
    } else {
        for line in format_card_lines(&items) {
            println!("{line}");
        }
    }
    Ok(())
}
