//! Reorder workflow models

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::ParseEnumError;

/// Reorder lifecycle status
///
/// `Pending` and `Ordered` are both open; `Received` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReorderStatus {
    Pending,
    Ordered,
    Received,
}

impl ReorderStatus {
    /// Statuses of reorders still awaiting delivery
    pub const OPEN: [ReorderStatus; 2] = [ReorderStatus::Pending, ReorderStatus::Ordered];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReorderStatus::Pending => "Pending",
            ReorderStatus::Ordered => "Ordered",
            ReorderStatus::Received => "Received",
        }
    }

    pub fn is_open(&self) -> bool {
        Self::OPEN.contains(self)
    }

    /// Whether a reorder may move from `self` to `next`
    pub fn can_transition_to(&self, next: ReorderStatus) -> bool {
        matches!(
            (self, next),
            (ReorderStatus::Pending, ReorderStatus::Ordered)
                | (ReorderStatus::Pending, ReorderStatus::Received)
                | (ReorderStatus::Ordered, ReorderStatus::Received)
        )
    }
}

impl fmt::Display for ReorderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReorderStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(ReorderStatus::Pending),
            "Ordered" => Ok(ReorderStatus::Ordered),
            "Received" => Ok(ReorderStatus::Received),
            other => Err(ParseEnumError {
                kind: "reorder status",
                value: other.to_string(),
            }),
        }
    }
}

/// Payload for placing a reorder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceReorder {
    pub product_id: i64,
    pub reorder_quantity: i32,
}

/// An open reorder as listed for receiving
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingReorder {
    pub reorder_id: i64,
    pub product_name: String,
    pub reorder_quantity: i32,
    pub reorder_date: NaiveDate,
    pub status: ReorderStatus,
}
