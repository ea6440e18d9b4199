//! Data models for ESPM

mod card;
mod supplier;

pub use card::{card_identity, Card, CardParameters, CardStatus};
pub use supplier::{Supplier, SupplierId, SUPPLIER_ID_PARAMETER};
