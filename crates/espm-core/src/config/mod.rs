//! Mobile Cards client configuration.
//!
//! `CardsConfig` is the persisted, partially filled form (JSON file plus
//! environment overrides). `resolve` validates it into the settings the sync
//! engine and registration client need.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};
use crate::sync::{SyncSettings, DEFAULT_STAGGER};
use crate::util::{is_http_url, normalize_base_url, normalize_text_option};

/// Registration template used when none is configured.
pub const DEFAULT_TEMPLATE_NAME: &str = "ESPM";
/// Longest template id the template dialog accepts.
pub const TEMPLATE_ID_MAX_LENGTH: usize = 36;

const CONFIG_VERSION: u32 = 1;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_BASE_URL: &str = "ESPM_BASE_URL";
pub const ENV_USERNAME: &str = "ESPM_USERNAME";
pub const ENV_TEMPLATE: &str = "ESPM_TEMPLATE";
pub const ENV_APP_URL: &str = "ESPM_APP_URL";
pub const ENV_STAGGER_MS: &str = "ESPM_STAGGER_MS";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CardsConfig {
    #[serde(default = "default_config_version")]
    pub version: u32,
    /// Mobile Services origin, e.g. `https://hcpms.example.com`.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub template_name: Option<String>,
    /// Application location that card deep links point back to.
    #[serde(default)]
    pub app_url: Option<String>,
    #[serde(default)]
    pub stagger_ms: Option<u64>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

const fn default_config_version() -> u32 {
    CONFIG_VERSION
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            base_url: None,
            username: None,
            template_name: None,
            app_url: None,
            stagger_ms: None,
            timeout_secs: None,
        }
    }
}

/// Validated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCardsConfig {
    pub base_url: String,
    pub username: String,
    pub timeout: Duration,
    pub sync: SyncSettings,
}

impl CardsConfig {
    /// Load from `path`, returning defaults when the file does not exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let mut config = serde_json::from_str::<Self>(&raw).map_err(|error| {
            Error::Config(format!(
                "Failed to parse config at {}: {error}",
                path.display()
            ))
        })?;
        config.normalize();
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut normalized = self.clone();
        normalized.normalize();
        let serialized = serde_json::to_string_pretty(&normalized)?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    /// Overlay values from the process environment.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary variable lookup.
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = normalize_text_option(lookup(ENV_BASE_URL)) {
            self.base_url = Some(value);
        }
        if let Some(value) = normalize_text_option(lookup(ENV_USERNAME)) {
            self.username = Some(value);
        }
        if let Some(value) = normalize_text_option(lookup(ENV_TEMPLATE)) {
            self.template_name = Some(value);
        }
        if let Some(value) = normalize_text_option(lookup(ENV_APP_URL)) {
            self.app_url = Some(value);
        }
        if let Some(value) = normalize_text_option(lookup(ENV_STAGGER_MS)) {
            let stagger_ms = value.parse::<u64>().map_err(|error| {
                Error::Config(format!("{ENV_STAGGER_MS} must be milliseconds: {error}"))
            })?;
            self.stagger_ms = Some(stagger_ms);
        }
        Ok(())
    }

    pub fn normalize(&mut self) {
        self.version = CONFIG_VERSION;
        self.base_url = normalize_text_option(self.base_url.take())
            .map(|url| url.trim_end_matches('/').to_string());
        self.username = normalize_text_option(self.username.take());
        self.template_name = normalize_text_option(self.template_name.take());
        self.app_url = normalize_text_option(self.app_url.take());
    }

    pub fn template_name(&self) -> String {
        normalize_text_option(self.template_name.clone())
            .unwrap_or_else(|| DEFAULT_TEMPLATE_NAME.to_string())
    }

    /// Validate into settings, falling back to defaults for optional values.
    pub fn resolve(&self) -> Result<ResolvedCardsConfig> {
        let base_url = normalize_text_option(self.base_url.clone()).ok_or_else(|| {
            Error::Config(format!(
                "base_url is not configured; run `espm-cards config init` or set {ENV_BASE_URL}"
            ))
        })?;
        let base_url = normalize_base_url(&base_url, "base_url").map_err(Error::Config)?;

        let username = normalize_text_option(self.username.clone()).ok_or_else(|| {
            Error::Config(format!(
                "username is not configured; pass --user or set {ENV_USERNAME}"
            ))
        })?;

        let app_url = parse_app_url(self.app_url.as_deref().unwrap_or(&base_url))?;

        Ok(ResolvedCardsConfig {
            base_url,
            username,
            timeout: Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            sync: SyncSettings {
                template_name: validate_template_id(&self.template_name())?,
                app_url,
                stagger: self
                    .stagger_ms
                    .map_or(DEFAULT_STAGGER, Duration::from_millis),
            },
        })
    }
}

/// Parse the application location used for deep links.
pub fn parse_app_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if !is_http_url(raw) {
        return Err(Error::Config(
            "app_url must include http:// or https://".to_string(),
        ));
    }
    Url::parse(raw).map_err(|error| Error::Config(format!("app_url is not a valid URL: {error}")))
}

/// Trim and bound a template id entered by the user.
pub fn validate_template_id(raw: &str) -> Result<String> {
    let value = normalize_text_option(Some(raw.to_string()))
        .ok_or_else(|| Error::InvalidInput("Template ID must not be empty".to_string()))?;
    if value.chars().count() > TEMPLATE_ID_MAX_LENGTH {
        return Err(Error::InvalidInput(format!(
            "Template ID must be at most {TEMPLATE_ID_MAX_LENGTH} characters"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn configured() -> CardsConfig {
        CardsConfig {
            base_url: Some("https://hcpms.example.com/".to_string()),
            username: Some("jdoe".to_string()),
            ..CardsConfig::default()
        }
    }

    #[test]
    fn resolve_applies_defaults() {
        let resolved = configured().resolve().unwrap();
        assert_eq!(resolved.base_url, "https://hcpms.example.com");
        assert_eq!(resolved.sync.template_name, DEFAULT_TEMPLATE_NAME);
        assert_eq!(resolved.sync.stagger, DEFAULT_STAGGER);
        assert_eq!(resolved.sync.app_url.as_str(), "https://hcpms.example.com/");
        assert_eq!(resolved.timeout, Duration::from_secs(30));
    }

    #[test]
    fn resolve_requires_base_url_and_username() {
        let missing_base = CardsConfig {
            base_url: None,
            ..configured()
        };
        assert!(missing_base.resolve().unwrap_err().to_string().contains("base_url"));

        let missing_user = CardsConfig {
            username: Some("  ".to_string()),
            ..configured()
        };
        assert!(missing_user.resolve().unwrap_err().to_string().contains("username"));
    }

    #[test]
    fn env_overrides_file_values() {
        let env = HashMap::from([
            (ENV_USERNAME, "other"),
            (ENV_STAGGER_MS, "100"),
            (ENV_APP_URL, "https://espm.example.com/index.html"),
        ]);
        let mut config = configured();
        config
            .apply_env_with(|key| env.get(key).map(ToString::to_string))
            .unwrap();

        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.username, "other");
        assert_eq!(resolved.sync.stagger, Duration::from_millis(100));
        assert_eq!(
            resolved.sync.app_url.as_str(),
            "https://espm.example.com/index.html"
        );
    }

    #[test]
    fn env_rejects_non_numeric_stagger() {
        let mut config = configured();
        let error = config
            .apply_env_with(|key| (key == ENV_STAGGER_MS).then(|| "soon".to_string()))
            .unwrap_err();
        assert!(error.to_string().contains(ENV_STAGGER_MS));
    }

    #[test]
    fn parse_rejects_unknown_fields() {
        let error = serde_json::from_str::<CardsConfig>(r#"{"base_url":"x","extra":1}"#)
            .unwrap_err();
        assert!(error.to_string().contains("unknown field"));
    }

    #[test]
    fn template_id_is_bounded() {
        assert_eq!(validate_template_id("  ESPM2 ").unwrap(), "ESPM2");
        assert!(validate_template_id("   ").is_err());
        assert!(validate_template_id(&"x".repeat(37)).is_err());
        assert!(validate_template_id(&"x".repeat(36)).is_ok());
    }

    #[test]
    fn save_and_load_round_trip_normalizes() {
        let dir = std::env::temp_dir().join(format!("espm-config-test-{}", std::process::id()));
        let path = dir.join("cards-config.json");
        let config = CardsConfig {
            template_name: Some(" ESPM ".to_string()),
            ..configured()
        };

        config.save_to_path(&path).unwrap();
        let loaded = CardsConfig::load_from_path(&path).unwrap();
        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(loaded.base_url.as_deref(), Some("https://hcpms.example.com"));
        assert_eq!(loaded.template_name.as_deref(), Some("ESPM"));
        assert_eq!(loaded.version, 1);
    }

    #[test]
    fn load_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("espm-config-test-missing/none.json");
        let loaded = CardsConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded, CardsConfig::default());
        assert_eq!(loaded.version, CONFIG_VERSION);
    }

    #[test]
    fn default_matches_serde_defaults() {
        let parsed = serde_json::from_str::<CardsConfig>("{}").unwrap();
        assert_eq!(parsed, CardsConfig::default());
        assert_eq!(CardsConfig::default().version, 1);
    }
}
