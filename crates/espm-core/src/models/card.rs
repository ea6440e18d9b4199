//! Mobile Cards card model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::supplier::{SupplierId, SUPPLIER_ID_PARAMETER};

/// Opaque key/value payload identifying a card's target resource.
pub type CardParameters = Map<String, Value>;

/// Delta between the locally desired card set and the remote registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardStatus {
    /// Desired locally, missing remotely: register it.
    New,
    /// Registered remotely, no longer desired: delete it.
    Delete,
    /// Present on both sides.
    Unchanged,
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::New => "New",
            Self::Delete => "Delete",
            Self::Unchanged => "Unchanged",
        };
        f.write_str(label)
    }
}

/// A card computed for one sync pass.
///
/// The status is fixed at construction; a card is discarded once the pass
/// that built it completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    status: CardStatus,
    parameters: CardParameters,
    supplier_id: Option<SupplierId>,
}

impl Card {
    /// Build a card, reading the supplier id from the parameters when present.
    #[must_use]
    pub fn new(status: CardStatus, parameters: CardParameters) -> Self {
        let supplier_id = parameters
            .get(SUPPLIER_ID_PARAMETER)
            .and_then(|value| match value {
                Value::String(id) => Some(SupplierId::new(id.clone())),
                Value::Number(id) => Some(SupplierId::new(id.to_string())),
                _ => None,
            });
        Self {
            status,
            parameters,
            supplier_id,
        }
    }

    pub const fn status(&self) -> CardStatus {
        self.status
    }

    pub const fn parameters(&self) -> &CardParameters {
        &self.parameters
    }

    pub const fn supplier_id(&self) -> Option<&SupplierId> {
        self.supplier_id.as_ref()
    }

    /// Canonical serialization of the parameters, used for identity and logs.
    #[must_use]
    pub fn identifier(&self) -> String {
        card_identity(&self.parameters)
    }
}

/// Key-sorted JSON rendering of card parameters.
///
/// Two parameter maps with the same entries produce the same identity
/// regardless of insertion order.
#[must_use]
pub fn card_identity(parameters: &CardParameters) -> String {
    let mut rendered = String::new();
    write_canonical(&Value::Object(parameters.clone()), &mut rendered);
    rendered
}

// Sorts keys itself: with serde_json's `preserve_order` feature enabled
// anywhere in the build, `Map` keeps insertion order.
fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let mut keys = map.keys().collect::<Vec<_>>();
            keys.sort();
            out.push('{');
            for (index, key) in keys.into_iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                write_canonical(&map[key], out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> CardParameters {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn identity_ignores_key_order() {
        let first = params(json!({"SupplierId": "1", "Region": {"b": 2, "a": 1}}));
        let mut second = CardParameters::new();
        second.insert("Region".to_string(), json!({"a": 1, "b": 2}));
        second.insert("SupplierId".to_string(), json!("1"));
        assert_eq!(card_identity(&first), card_identity(&second));
        assert_eq!(
            card_identity(&first),
            r#"{"Region":{"a":1,"b":2},"SupplierId":"1"}"#
        );
    }

    #[test]
    fn identity_sorts_objects_nested_in_arrays_but_keeps_array_order() {
        let mut parameters = CardParameters::new();
        parameters.insert(
            "Contacts".to_string(),
            json!([{"Phone": "+49 30", "Email": "b@example.com"}, "fallback"]),
        );
        assert_eq!(
            card_identity(&parameters),
            r#"{"Contacts":[{"Email":"b@example.com","Phone":"+49 30"},"fallback"]}"#
        );
    }

    #[test]
    fn card_reads_supplier_id_from_parameters() {
        let card = Card::new(CardStatus::New, params(json!({"SupplierId": "100000005"})));
        assert_eq!(card.supplier_id().map(SupplierId::as_str), Some("100000005"));

        let numeric = Card::new(CardStatus::Delete, params(json!({"SupplierId": 42})));
        assert_eq!(numeric.supplier_id().map(SupplierId::as_str), Some("42"));

        let anonymous = Card::new(CardStatus::Unchanged, params(json!({"Other": true})));
        assert_eq!(anonymous.supplier_id(), None);
    }

    #[test]
    fn status_display_matches_wire_labels() {
        assert_eq!(CardStatus::New.to_string(), "New");
        assert_eq!(CardStatus::Delete.to_string(), "Delete");
        assert_eq!(CardStatus::Unchanged.to_string(), "Unchanged");
    }
}
