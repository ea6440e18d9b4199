//! Supplier model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::card::CardParameters;

/// Key under which a supplier id travels in card parameters.
pub const SUPPLIER_ID_PARAMETER: &str = "SupplierId";

/// Identifier of a supplier in the ESPM catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(String);

impl SupplierId {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Binding path of the supplier entity, e.g. `/Suppliers('100000000')`.
    #[must_use]
    pub fn binding_path(&self) -> String {
        format!("/Suppliers('{}')", self.0)
    }
}

impl fmt::Display for SupplierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the supplier master list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Supplier {
    pub supplier_id: SupplierId,
    pub supplier_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl Supplier {
    #[must_use]
    pub fn new(supplier_id: impl Into<String>, supplier_name: impl Into<String>) -> Self {
        Self {
            supplier_id: SupplierId::new(supplier_id),
            supplier_name: supplier_name.into(),
            city: None,
            country: None,
            email_address: None,
            phone_number: None,
        }
    }

    /// Card parameters that register this supplier with Mobile Cards.
    #[must_use]
    pub fn card_parameters(&self) -> CardParameters {
        let mut parameters = CardParameters::new();
        parameters.insert(
            SUPPLIER_ID_PARAMETER.to_string(),
            serde_json::Value::String(self.supplier_id.as_str().to_string()),
        );
        parameters
    }

    /// Binding path of this supplier in the master list.
    #[must_use]
    pub fn binding_path(&self) -> String {
        self.supplier_id.binding_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supplier_round_trips_pascal_case_fields() {
        let raw = r#"{"SupplierId":"100000000","SupplierName":"Becker Berlin","City":"Berlin"}"#;
        let supplier: Supplier = serde_json::from_str(raw).unwrap();
        assert_eq!(supplier.supplier_id.as_str(), "100000000");
        assert_eq!(supplier.city.as_deref(), Some("Berlin"));
        assert_eq!(supplier.country, None);
    }

    #[test]
    fn card_parameters_carry_supplier_id() {
        let supplier = Supplier::new("100000001", "Talpa");
        let parameters = supplier.card_parameters();
        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters[SUPPLIER_ID_PARAMETER], "100000001");
    }

    #[test]
    fn binding_path_quotes_id() {
        assert_eq!(
            SupplierId::new("100000002").binding_path(),
            "/Suppliers('100000002')"
        );
    }
}
