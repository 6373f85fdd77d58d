use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, LocationCode, ProductId};

/// Entity: stock of one product at one storage location.
///
/// Holds `0 <= reserved <= on_hand <= max_capacity` and
/// `0 <= reorder_threshold <= max_capacity` across every operation. Each
/// mutating method either applies in full or returns an error with the record
/// left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockRecord {
    product_id: ProductId,
    location: LocationCode,
    on_hand: i64,
    reserved: i64,
    reorder_threshold: i64,
    max_capacity: i64,
}

/// Input for building a new record (e.g. loaded from a calling system's config).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateStockRecord {
    pub product_id: String,
    pub location: String,
    pub initial_on_hand: i64,
    pub reorder_threshold: i64,
    pub max_capacity: i64,
}

impl StockRecord {
    /// Validate the initial values and build a record with nothing reserved.
    pub fn create(
        product_id: impl Into<String>,
        location: impl Into<String>,
        initial_on_hand: i64,
        reorder_threshold: i64,
        max_capacity: i64,
    ) -> DomainResult<Self> {
        let product_id = ProductId::parse(product_id)?;
        let location = LocationCode::parse(location)?;

        if initial_on_hand < 0 {
            return Err(DomainError::validation("initial_on_hand", "must be >= 0"));
        }
        if reorder_threshold < 0 {
            return Err(DomainError::validation("reorder_threshold", "must be >= 0"));
        }
        if max_capacity <= 0 {
            return Err(DomainError::validation("max_capacity", "must be > 0"));
        }
        if initial_on_hand > max_capacity {
            return Err(DomainError::validation(
                "initial_on_hand",
                format!("{initial_on_hand} exceeds max capacity {max_capacity}"),
            ));
        }
        if reorder_threshold > max_capacity {
            return Err(DomainError::validation(
                "reorder_threshold",
                format!("{reorder_threshold} exceeds max capacity {max_capacity}"),
            ));
        }

        Ok(Self {
            product_id,
            location,
            on_hand: initial_on_hand,
            reserved: 0,
            reorder_threshold,
            max_capacity,
        })
    }

    pub fn from_command(cmd: &CreateStockRecord) -> DomainResult<Self> {
        Self::create(
            cmd.product_id.clone(),
            cmd.location.clone(),
            cmd.initial_on_hand,
            cmd.reorder_threshold,
            cmd.max_capacity,
        )
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn location(&self) -> &LocationCode {
        &self.location
    }

    pub fn on_hand(&self) -> i64 {
        self.on_hand
    }

    pub fn reserved(&self) -> i64 {
        self.reserved
    }

    /// Units that can still be allocated: on-hand minus reserved.
    pub fn available(&self) -> i64 {
        self.on_hand - self.reserved
    }

    pub fn reorder_threshold(&self) -> i64 {
        self.reorder_threshold
    }

    pub fn max_capacity(&self) -> i64 {
        self.max_capacity
    }

    /// True when available stock has dropped strictly below the reorder threshold.
    pub fn is_reorder_needed(&self) -> bool {
        self.available() < self.reorder_threshold
    }

    pub fn change_location(&mut self, new_location: impl Into<String>) -> DomainResult<()> {
        self.location = LocationCode::parse(new_location)?;
        Ok(())
    }

    /// Receive `amount` units into the location.
    pub fn add_stock(&mut self, amount: i64) -> DomainResult<()> {
        ensure_positive(amount)?;

        let new_on_hand = self
            .on_hand
            .checked_add(amount)
            .filter(|total| *total <= self.max_capacity)
            .ok_or(DomainError::CapacityExceeded {
                on_hand: self.on_hand,
                amount,
                max_capacity: self.max_capacity,
            })?;

        self.on_hand = new_on_hand;
        Ok(())
    }

    /// Write off `amount` damaged or expired units.
    ///
    /// Reserved stock is clamped down to the remaining on-hand quantity when
    /// the write-off eats into it.
    pub fn remove_damaged(&mut self, amount: i64) -> DomainResult<()> {
        ensure_positive(amount)?;
        self.ensure_on_hand(amount)?;

        self.on_hand -= amount;
        if self.reserved > self.on_hand {
            self.reserved = self.on_hand;
        }
        Ok(())
    }

    /// Commit `amount` available units to an order.
    pub fn reserve(&mut self, amount: i64) -> DomainResult<()> {
        ensure_positive(amount)?;

        let available = self.available();
        if amount > available {
            return Err(DomainError::InsufficientAvailable {
                requested: amount,
                available,
            });
        }

        self.reserved += amount;
        Ok(())
    }

    /// Return `amount` reserved units to the available pool.
    pub fn release_reservation(&mut self, amount: i64) -> DomainResult<()> {
        ensure_positive(amount)?;
        self.ensure_reserved(amount)?;

        self.reserved -= amount;
        Ok(())
    }

    /// Confirm shipment of `amount` previously reserved units.
    ///
    /// Both `reserved` and `on_hand` drop by `amount`, or neither does.
    pub fn ship_reserved(&mut self, amount: i64) -> DomainResult<()> {
        ensure_positive(amount)?;
        self.ensure_reserved(amount)?;
        // Unreachable while reserved <= on_hand holds; kept as a live guard.
        self.ensure_on_hand(amount)?;

        self.reserved -= amount;
        self.on_hand -= amount;
        Ok(())
    }

    pub fn update_reorder_threshold(&mut self, new_threshold: i64) -> DomainResult<()> {
        if new_threshold < 0 {
            return Err(DomainError::validation("reorder_threshold", "must be >= 0"));
        }
        if new_threshold > self.max_capacity {
            return Err(DomainError::validation(
                "reorder_threshold",
                format!(
                    "{new_threshold} exceeds max capacity {}",
                    self.max_capacity
                ),
            ));
        }

        self.reorder_threshold = new_threshold;
        Ok(())
    }

    /// Resize the location. A reorder threshold above the new capacity is
    /// clamped down to it.
    pub fn update_max_capacity(&mut self, new_max_capacity: i64) -> DomainResult<()> {
        if new_max_capacity <= 0 {
            return Err(DomainError::validation("max_capacity", "must be > 0"));
        }
        if new_max_capacity < self.on_hand {
            return Err(DomainError::InsufficientCapacity {
                requested: new_max_capacity,
                on_hand: self.on_hand,
            });
        }

        self.max_capacity = new_max_capacity;
        if self.reorder_threshold > self.max_capacity {
            self.reorder_threshold = self.max_capacity;
        }
        Ok(())
    }

    fn ensure_on_hand(&self, amount: i64) -> DomainResult<()> {
        if amount > self.on_hand {
            return Err(DomainError::InsufficientOnHand {
                requested: amount,
                on_hand: self.on_hand,
            });
        }
        Ok(())
    }

    fn ensure_reserved(&self, amount: i64) -> DomainResult<()> {
        if amount > self.reserved {
            return Err(DomainError::InsufficientReserved {
                requested: amount,
                reserved: self.reserved,
            });
        }
        Ok(())
    }
}

fn ensure_positive(amount: i64) -> DomainResult<()> {
    if amount <= 0 {
        return Err(DomainError::validation(
            "amount",
            format!("must be positive, got {amount}"),
        ));
    }
    Ok(())
}

impl Entity for StockRecord {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product_id
    }
}

impl core::fmt::Display for StockRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "StockRecord{{product_id={}, location={}, on_hand={}, reserved={}, available={}, reorder_threshold={}, max_capacity={}}}",
            self.product_id,
            self.location,
            self.on_hand,
            self.reserved,
            self.available(),
            self.reorder_threshold,
            self.max_capacity,
        )
    }
}
