//! Inventory domain module.
//!
//! This crate contains the business rules for stock held at a storage
//! location, implemented purely as deterministic domain logic (no IO, no
//! logging, no storage). Callers own the record and decide how mutations are
//! serialized.

pub mod command;
pub mod stock;

pub use command::StockCommand;
pub use stock::{CreateStockRecord, StockRecord};
