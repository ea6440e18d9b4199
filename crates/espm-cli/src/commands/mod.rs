pub mod cards;
pub mod common;
pub mod completions;
pub mod config;
pub mod delete_all;
pub mod suppliers;
pub mod sync;
