//! Command vocabulary for stock records.
//!
//! Lets a calling system describe operations as data (JSON scripts, queues)
//! and apply them through a single entry point. Semantics and errors are those
//! of the corresponding `StockRecord` method.

use serde::{Deserialize, Serialize};

use stockroom_core::DomainResult;

use crate::stock::StockRecord;

/// A single mutating operation on a `StockRecord`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StockCommand {
    ChangeLocation { location: String },
    AddStock { amount: i64 },
    RemoveDamaged { amount: i64 },
    Reserve { amount: i64 },
    ReleaseReservation { amount: i64 },
    ShipReserved { amount: i64 },
    UpdateReorderThreshold { threshold: i64 },
    UpdateMaxCapacity { max_capacity: i64 },
}

impl StockCommand {
    /// Stable dotted name, used as a log field.
    pub fn name(&self) -> &'static str {
        match self {
            StockCommand::ChangeLocation { .. } => "stock.change_location",
            StockCommand::AddStock { .. } => "stock.add_stock",
            StockCommand::RemoveDamaged { .. } => "stock.remove_damaged",
            StockCommand::Reserve { .. } => "stock.reserve",
            StockCommand::ReleaseReservation { .. } => "stock.release_reservation",
            StockCommand::ShipReserved { .. } => "stock.ship_reserved",
            StockCommand::UpdateReorderThreshold { .. } => "stock.update_reorder_threshold",
            StockCommand::UpdateMaxCapacity { .. } => "stock.update_max_capacity",
        }
    }
}

impl StockRecord {
    /// Apply a command to this record.
    pub fn execute(&mut self, command: &StockCommand) -> DomainResult<()> {
        match command {
            StockCommand::ChangeLocation { location } => self.change_location(location.clone()),
            StockCommand::AddStock { amount } => self.add_stock(*amount),
            StockCommand::RemoveDamaged { amount } => self.remove_damaged(*amount),
            StockCommand::Reserve { amount } => self.reserve(*amount),
            StockCommand::ReleaseReservation { amount } => self.release_reservation(*amount),
            StockCommand::ShipReserved { amount } => self.ship_reserved(*amount),
            StockCommand::UpdateReorderThreshold { threshold } => {
                self.update_reorder_threshold(*threshold)
            }
            StockCommand::UpdateMaxCapacity { max_capacity } => {
                self.update_max_capacity(*max_capacity)
            }
        }
    }
}
