#![allow(dead_code)]
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Position;

/// Full payload of `GET /api/dashboard-data`. The store replaces the whole
/// snapshot on every refresh; nothing is merged field by field.
///
/// Every section is tolerated as absent so a partial payload still renders
/// with the dashboard's fallback values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub balance: Option<BalanceInfo>,
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default)]
    pub bot_stats: Option<BotStats>,
    #[serde(default)]
    pub recent_signals: Option<SignalStats>,
    #[serde(default)]
    pub chart_data: Vec<ChartPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceInfo {
    pub total: Decimal,
    pub available: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotStats {
    pub efficiency: Decimal,
    pub total_trades: u32,
    pub successful_trades: u32,
    pub failed_trades: u32,
    pub win_rate: Decimal,
    pub total_profit: Decimal,
    pub avg_profit: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalStats {
    pub strong_signals: u32,
    pub medium_signals: u32,
    pub weak_signals: u32,
    pub total_opportunities: u32,
    pub execution_rate: Decimal,
}

/// Hourly profit point for the dashboard chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPoint {
    pub time: String,
    pub profit: Decimal,
}
