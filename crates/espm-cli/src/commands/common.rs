use std::path::{Path, PathBuf};

use espm_core::cards::{RegistrationClient, RemoteCard};
use espm_core::config::{CardsConfig, ResolvedCardsConfig};
use espm_core::master::{DefaultTexts, MasterController, SortKey, SupplierList};
use espm_core::sync::CardSyncEngine;
use espm_core::util::normalize_text_option;
use espm_core::{Card, Supplier};
use serde::Serialize;

use crate::catalog::load_catalog;
use crate::cli::SortColumn;
use crate::console::HeadlessHost;
use crate::error::CliError;

const CONFIG_FILE_NAME: &str = "cards-config.json";

pub type CliController = MasterController<HeadlessHost>;
pub type CliEngine = CardSyncEngine<RegistrationClient>;

#[derive(Debug, Serialize)]
pub struct SupplierListItem {
    pub id: String,
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CardListItem {
    pub status: Option<String>,
    pub supplier_id: Option<String>,
    pub parameters: serde_json::Value,
}

pub fn default_config_path() -> Result<PathBuf, CliError> {
    dirs::config_dir()
        .map(|dir| dir.join("espm").join(CONFIG_FILE_NAME))
        .ok_or_else(|| CliError::Config("Failed to resolve config directory".to_string()))
}

pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf, CliError> {
    explicit.map_or_else(default_config_path, |path| Ok(path.to_path_buf()))
}

/// File config with environment overrides applied.
pub fn load_config(path: &Path) -> Result<CardsConfig, CliError> {
    let mut config = CardsConfig::load_from_path(path)?;
    config.apply_env()?;
    Ok(config)
}

pub fn resolve_settings(
    config_path: &Path,
    user: Option<&str>,
) -> Result<ResolvedCardsConfig, CliError> {
    let mut config = load_config(config_path)?;
    if let Some(user) = normalize_text_option(user.map(ToString::to_string)) {
        config.username = Some(user);
    }
    Ok(config.resolve()?)
}

pub fn build_engine(settings: &ResolvedCardsConfig) -> Result<CliEngine, CliError> {
    let client = RegistrationClient::with_timeout(&settings.base_url, settings.timeout)?;
    Ok(CardSyncEngine::new(client, settings.sync.clone()))
}

/// Master coordinator over the catalog at `path`, with its first update done.
pub fn open_master(path: &Path) -> Result<CliController, CliError> {
    let suppliers = load_catalog(path)?;
    Ok(master_for(suppliers))
}

pub fn master_for(suppliers: Vec<Supplier>) -> CliController {
    let total = suppliers.len();
    let mut controller = MasterController::new(
        SupplierList::new(suppliers),
        HeadlessHost::default(),
        Box::new(DefaultTexts::default()),
    );
    controller.on_update_finished(total);
    controller
}

pub const fn sort_key(column: SortColumn) -> SortKey {
    match column {
        SortColumn::SupplierName => SortKey::SupplierName,
        SortColumn::SupplierId => SortKey::SupplierId,
        SortColumn::City => SortKey::City,
        SortColumn::Country => SortKey::Country,
    }
}

pub fn supplier_to_item(supplier: &Supplier) -> SupplierListItem {
    SupplierListItem {
        id: supplier.supplier_id.to_string(),
        name: supplier.supplier_name.clone(),
        city: supplier.city.clone(),
        country: supplier.country.clone(),
    }
}

pub fn format_supplier_lines(suppliers: &[&Supplier]) -> Vec<String> {
    suppliers
        .iter()
        .map(|supplier| {
            let location = [supplier.city.as_deref(), supplier.country.as_deref()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(", ");
            if location.is_empty() {
                format!("{}  {}", supplier.supplier_id, supplier.supplier_name)
            } else {
                format!(
                    "{}  {}  ({location})",
                    supplier.supplier_id, supplier.supplier_name
                )
            }
        })
        .collect()
}

pub fn remote_card_to_item(card: &RemoteCard) -> CardListItem {
    let planned = Card::new(espm_core::CardStatus::Unchanged, card.parameters.clone());
    CardListItem {
        status: None,
        supplier_id: planned.supplier_id().map(ToString::to_string),
        parameters: serde_json::Value::Object(card.parameters.clone()),
    }
}

pub fn card_to_item(card: &Card) -> CardListItem {
    CardListItem {
        status: Some(card.status().to_string()),
        supplier_id: card.supplier_id().map(ToString::to_string),
        parameters: serde_json::Value::Object(card.parameters().clone()),
    }
}

pub fn format_card_lines(items: &[CardListItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| {
            let target = item
                .supplier_id
                .clone()
                .unwrap_or_else(|| item.parameters.to_string());
            item.status
                .as_ref()
                .map_or_else(|| target.clone(), |status| format!("{status:<9}  {target}"))
        })
        .collect()
}
