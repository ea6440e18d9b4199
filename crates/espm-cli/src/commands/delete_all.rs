use std::path::Path;

use crate::commands::common::{build_engine, master_for, resolve_settings};
use crate::console::ConsoleNotifier;
use crate::error::CliError;

pub async fn run_delete_all(config_path: &Path, user: Option<&str>) -> Result<(), CliError> {
    let settings = resolve_settings(config_path, user)?;
    let engine = build_engine(&settings)?;
    let mut master = master_for(Vec::new());

    master
        .on_delete_all_cards(&engine, &settings.username, &ConsoleNotifier)
        .await?;
    Ok(())
}
