//! Stock ledger and inventory history models

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::ParseEnumError;

/// Kind of movement recorded in the stock ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockChangeType {
    Sale,
    Restock,
}

impl StockChangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockChangeType::Sale => "Sale",
            StockChangeType::Restock => "Restock",
        }
    }

    /// Signed ledger quantity for a movement of `quantity` units
    ///
    /// Sales are stored negative, restocks positive.
    pub fn ledger_quantity(&self, quantity: i32) -> i32 {
        match self {
            StockChangeType::Sale => -quantity.abs(),
            StockChangeType::Restock => quantity.abs(),
        }
    }
}

impl fmt::Display for StockChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockChangeType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sale" => Ok(StockChangeType::Sale),
            "Restock" => Ok(StockChangeType::Restock),
            other => Err(ParseEnumError {
                kind: "stock change type",
                value: other.to_string(),
            }),
        }
    }
}

/// Event recorded in a product's inventory history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryEvent {
    Added,
    Sale,
    Restock,
}

impl HistoryEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryEvent::Added => "Added",
            HistoryEvent::Sale => "Sale",
            HistoryEvent::Restock => "Restock",
        }
    }
}

impl From<StockChangeType> for HistoryEvent {
    fn from(change: StockChangeType) -> Self {
        match change {
            StockChangeType::Sale => HistoryEvent::Sale,
            StockChangeType::Restock => HistoryEvent::Restock,
        }
    }
}

impl FromStr for HistoryEvent {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Added" => Ok(HistoryEvent::Added),
            "Sale" => Ok(HistoryEvent::Sale),
            "Restock" => Ok(HistoryEvent::Restock),
            other => Err(ParseEnumError {
                kind: "history event",
                value: other.to_string(),
            }),
        }
    }
}

/// One row of a product's inventory history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub history_id: i64,
    pub product_id: i64,
    pub record_date: NaiveDate,
    pub change_type: HistoryEvent,
    pub change_quantity: i32,
    /// Stock level after the change
    pub stock_quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_sign() {
        assert_eq!(StockChangeType::Sale.ledger_quantity(4), -4);
        assert_eq!(StockChangeType::Sale.ledger_quantity(-4), -4);
        assert_eq!(StockChangeType::Restock.ledger_quantity(7), 7);
    }

    #[test]
    fn test_history_event_from_change() {
        assert_eq!(HistoryEvent::from(StockChangeType::Restock), HistoryEvent::Restock);
        assert_eq!(HistoryEvent::from(StockChangeType::Sale), HistoryEvent::Sale);
    }

    #[test]
    fn test_parse_history_event() {
        assert_eq!("Added".parse::<HistoryEvent>(), Ok(HistoryEvent::Added));
        assert!("Initial".parse::<HistoryEvent>().is_err());
    }
}
