#![allow(dead_code)]
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionSide {
    Long,
    Short,
}

impl PositionSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionSide::Long => "LONG",
            PositionSide::Short => "SHORT",
        }
    }

    /// Lowercase form used as the row style class in the dashboard.
    pub fn css_class(&self) -> &'static str {
        match self {
            PositionSide::Long => "long",
            PositionSide::Short => "short",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "LONG" => Some(PositionSide::Long),
            "SHORT" => Some(PositionSide::Short),
            _ => None,
        }
    }
}

impl fmt::Display for PositionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// The backend reports sides in uppercase but the original dashboard only
// ever compared them case-insensitively, so accept any casing.
impl<'de> Deserialize<'de> for PositionSide {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PositionSide::from_str(&s)
            .ok_or_else(|| serde::de::Error::unknown_variant(&s, &["LONG", "SHORT"]))
    }
}

/// An open arbitrage position as reported by `GET /api/dashboard-data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub symbol: String,
    pub side: PositionSide,
    pub size: Decimal,
    pub entry_price: Decimal,
    pub current_price: Decimal,
    pub pnl: Decimal,
    pub pnl_percent: Decimal,
}

impl Position {
    pub fn is_profitable(&self) -> bool {
        self.pnl >= Decimal::ZERO
    }
}
