//! Text and URL helpers shared by config, the registration client, and the CLI.

/// Trim an optional config or form value; blank input counts as unset.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

/// Whether a configured origin carries an explicit HTTP(S) scheme.
pub fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Trimmed response body cut to 180 characters, for error messages and logs.
pub fn compact_text(value: &str) -> String {
    value.trim().chars().take(180).collect()
}

/// Trim a base URL and drop trailing slashes, rejecting non-HTTP values.
pub fn normalize_base_url(raw: &str, field: &str) -> Result<String, String> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    if !is_http_url(&base) {
        return Err(format!("{field} must include http:// or https://"));
    }
    Ok(base)
}
