use std::io::Write;
use std::path::Path;

use espm_core::sync::{Notifier, SyncReport};
use espm_core::SupplierId;
use serde::Serialize;
use tracing::info;

use crate::commands::common::{
    build_engine, card_to_item, format_card_lines, open_master, resolve_settings, CardListItem,
    CliController,
};
use crate::error::CliError;

pub struct SyncOptions<'a> {
    pub catalog: &'a Path,
    pub selected: &'a [String],
    pub all: bool,
    pub template: Option<&'a str>,
    pub dry_run: bool,
    pub as_json: bool,
}

#[derive(Debug, Serialize)]
pub struct SyncReportItem {
    pub registered: usize,
    pub deleted: usize,
    pub unchanged: usize,
    pub completed_at: String,
}

impl From<&SyncReport> for SyncReportItem {
    fn from(report: &SyncReport) -> Self {
        Self {
            registered: report.registered,
            deleted: report.deleted,
            unchanged: report.unchanged,
            completed_at: report.completed_at.to_rfc3339(),
        }
    }
}

/// Run a sync pass. Results go to `out`; toasts go to `notifier`.
pub async fn run_sync(
    options: SyncOptions<'_>,
    config_path: &Path,
    user: Option<&str>,
    notifier: &dyn Notifier,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let settings = resolve_settings(config_path, user)?;
    let mut engine = build_engine(&settings)?;
    let mut master = open_master(options.catalog)?;
    check_suppliers(&mut master, options.selected, options.all)?;

    if options.dry_run {
        if let Some(template) = options.template {
            engine.set_template_name(espm_core::config::validate_template_id(template)?);
        }
        let cards = engine
            .plan(&settings.username, &master.card_selector())
            .await?;
        let items = cards.iter().map(card_to_item).collect::<Vec<CardListItem>>();
        if options.as_json {
            writeln!(out, "{}", serde_json::to_string_pretty(&items)?)?;
        } else if items.is_empty() {
            writeln!(out, "No cards to sync.")?;
        } else {
            for line in format_card_lines(&items) {
                writeln!(out, "{line}")?;
            }
        }
        return Ok(());
    }

    let report = match options.template {
        Some(template) => {
            master.open_template_dialog();
            master
                .on_template_save(&mut engine, template, &settings.username, notifier)
                .await?
        }
        None => master.on_sync(&engine, &settings.username, notifier).await?,
    };
    info!(
        registered = report.registered,
        deleted = report.deleted,
        unchanged = report.unchanged,
        "Sync pass finished"
    );

    if options.as_json {
        let item = SyncReportItem::from(&report);
        writeln!(out, "{}", serde_json::to_string_pretty(&item)?)?;
    } else {
        writeln!(
            out,
            "{} registered, {} deleted, {} unchanged",
            report.registered, report.deleted, report.unchanged
        )?;
    }
    Ok(())
}

/// Mark the suppliers that should keep a card.
pub fn check_suppliers(
    master: &mut CliController,
    selected: &[String],
    all: bool,
) -> Result<(), CliError> {
    let list = master.list_mut();
    if all {
        list.check_all();
        return Ok(());
    }
    for id in selected {
        let supplier_id = SupplierId::new(id.trim());
        if !list.check(&supplier_id) {
            return Err(CliError::UnknownSupplier(supplier_id.to_string()));
        }
    }
    Ok(())
}
