//! Supplier catalog files.
//!
//! A catalog is a JSON export of the `Suppliers` entity set: either a bare
//! array, an OData v4 `{"value": [...]}` body, or an OData v2
//! `{"d": {"results": [...]}}` body.

use std::path::Path;

use espm_core::Supplier;
use serde::Deserialize;

use crate::error::CliError;

#[derive(Deserialize)]
struct ResultsBody {
    results: Vec<Supplier>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogBody {
    Suppliers(Vec<Supplier>),
    Value { value: Vec<Supplier> },
    Verbose { d: ResultsBody },
}

pub fn load_catalog(path: &Path) -> Result<Vec<Supplier>, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|error| CliError::Catalog {
        path: path.display().to_string(),
        reason: error.to_string(),
    })?;
    parse_catalog(&raw).map_err(|reason| CliError::Catalog {
        path: path.display().to_string(),
        reason,
    })
}

pub fn parse_catalog(raw: &str) -> Result<Vec<Supplier>, String> {
    let body = serde_json::from_str::<CatalogBody>(raw)
        .map_err(|_| "expected a supplier array or an OData response body".to_string())?;
    Ok(match body {
        CatalogBody::Suppliers(suppliers)
        | CatalogBody::Value { value: suppliers }
        | CatalogBody::Verbose {
            d: ResultsBody { results: suppliers },
        } => suppliers,
    })
}
