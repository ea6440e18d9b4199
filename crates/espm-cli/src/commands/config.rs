use std::path::Path;

use espm_core::config::{parse_app_url, validate_template_id, CardsConfig};
use espm_core::util::{normalize_base_url, normalize_text_option};
use serde::Serialize;

use crate::cli::ConfigCommands;
use crate::commands::common::load_config;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct EffectiveConfig {
    path: String,
    base_url: Option<String>,
    username: Option<String>,
    template_name: String,
    app_url: Option<String>,
    stagger_ms: Option<u64>,
    timeout_secs: Option<u64>,
}

pub fn run_config(command: ConfigCommands, config_path: &Path) -> Result<(), CliError> {
    match command {
        ConfigCommands::Init {
            base_url,
            username,
            template,
            app_url,
            stagger_ms,
        } => {
            let updates = ConfigUpdates {
                base_url,
                username,
                template,
                app_url,
                stagger_ms,
            };
            run_config_init(updates, config_path)
        }
        ConfigCommands::Show { json } => run_config_show(json, config_path),
    }
}

#[derive(Debug, Default)]
pub struct ConfigUpdates {
    pub base_url: Option<String>,
    pub username: Option<String>,
    pub template: Option<String>,
    pub app_url: Option<String>,
    pub stagger_ms: Option<u64>,
}

pub fn run_config_init(updates: ConfigUpdates, config_path: &Path) -> Result<(), CliError> {
    let mut config = CardsConfig::load_from_path(config_path)?;
    merge_updates(&mut config, updates)?;
    config.save_to_path(config_path)?;
    println!("Config written to {}", config_path.display());

    let mut missing_fields = Vec::new();
    if config.base_url.is_none() {
        missing_fields.push("base_url");
    }
    if config.username.is_none() {
        missing_fields.push("username");
    }
    if !missing_fields.is_empty() {
        println!("Config is missing: {}", missing_fields.join(", "));
    }
    Ok(())
}

/// Validate and apply explicitly passed values; omitted values keep the
/// current setting.
pub fn merge_updates(config: &mut CardsConfig, updates: ConfigUpdates) -> Result<(), CliError> {
    if let Some(url) = normalize_text_option(updates.base_url) {
        config.base_url = Some(normalize_base_url(&url, "base_url").map_err(CliError::Config)?);
    }
    if let Some(username) = normalize_text_option(updates.username) {
        config.username = Some(username);
    }
    if let Some(template) = updates.template {
        config.template_name = Some(validate_template_id(&template)?);
    }
    if let Some(url) = normalize_text_option(updates.app_url) {
        parse_app_url(&url)?;
        config.app_url = Some(url);
    }
    if let Some(stagger_ms) = updates.stagger_ms {
        config.stagger_ms = Some(stagger_ms);
    }
    Ok(())
}

fn run_config_show(as_json: bool, config_path: &Path) -> Result<(), CliError> {
    let config = load_config(config_path)?;
    let effective = EffectiveConfig {
        path: config_path.display().to_string(),
        template_name: config.template_name(),
        base_url: config.base_url,
        username: config.username,
        app_url: config.app_url,
        stagger_ms: config.stagger_ms,
        timeout_secs: config.timeout_secs,
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&effective)?);
        return Ok(());
    }

    let unset = || "(not set)".to_string();
    println!("config:   {}", effective.path);
    println!("base_url: {}", effective.base_url.unwrap_or_else(unset));
    println!("username: {}", effective.username.unwrap_or_else(unset));
    println!("template: {}", effective.template_name);
    println!("app_url:  {}", effective.app_url.unwrap_or_else(unset));
    if let Some(stagger_ms) = effective.stagger_ms {
        println!("stagger:  {stagger_ms} ms");
    }
    Ok(())
}
