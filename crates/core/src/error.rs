//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a normal, expected outcome of invalid input or current
/// stock state. Operations returning one of these leave the entity untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument violated a precondition that does not depend on current
    /// state (blank identifier, non-positive amount, out-of-range threshold).
    #[error("validation failed: {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// Adding stock would push on-hand above the location's capacity.
    #[error("capacity exceeded: {on_hand} on hand + {amount} > max capacity {max_capacity}")]
    CapacityExceeded {
        on_hand: i64,
        amount: i64,
        max_capacity: i64,
    },

    /// A removal or shipment asked for more than is physically present.
    #[error("insufficient on-hand stock: requested {requested}, on hand {on_hand}")]
    InsufficientOnHand { requested: i64, on_hand: i64 },

    /// A reservation asked for more than is available.
    #[error("insufficient available stock: requested {requested}, available {available}")]
    InsufficientAvailable { requested: i64, available: i64 },

    /// A release or shipment asked for more than is reserved.
    #[error("insufficient reserved stock: requested {requested}, reserved {reserved}")]
    InsufficientReserved { requested: i64, reserved: i64 },

    /// A capacity reduction would fall below the stock already on hand.
    #[error("insufficient capacity: requested max capacity {requested} < {on_hand} on hand")]
    InsufficientCapacity { requested: i64, on_hand: i64 },
}

impl DomainError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Stable, machine-friendly tag for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => "validation",
            DomainError::CapacityExceeded { .. } => "capacity_exceeded",
            DomainError::InsufficientOnHand { .. } => "insufficient_on_hand",
            DomainError::InsufficientAvailable { .. } => "insufficient_available",
            DomainError::InsufficientReserved { .. } => "insufficient_reserved",
            DomainError::InsufficientCapacity { .. } => "insufficient_capacity",
        }
    }

    /// The offending field, for validation failures.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DomainError::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}
