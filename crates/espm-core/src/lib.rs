//! espm-core - Core library for ESPM
//!
//! This crate contains the supplier and card models, the card selection diff,
//! the Mobile Cards registration client, the card sync engine, and the master
//! list coordinator shared by every ESPM front end.

pub mod cards;
pub mod config;
pub mod error;
pub mod master;
pub mod models;
pub mod selection;
pub mod sync;
pub mod util;

pub use error::{Error, Result};
pub use models::{Card, CardStatus, Supplier, SupplierId};
