#![allow(dead_code)]
use chrono::{DateTime, Local, Utc};
use rust_decimal::Decimal;
use std::fmt;

use crate::types::{BotStatus, DashboardSnapshot};

pub const APP_TITLE: &str = "🤖 Trinkenbot Enhanced";
pub const APP_VERSION: &str = "v2.0.0";
pub const LOADING: &str = "Завантаження даних...";
pub const NO_POSITIONS: &str = "Немає активних позицій";

const RUNNING_INDICATOR: &str = "🟢 Працює";
const STOPPED_INDICATOR: &str = "🔴 Зупинено";
const STOP_LABEL: &str = "Зупинити";
const START_LABEL: &str = "Запустити";
const FOOTER: &str = "🔄 Дані оновлюються кожні 10 секунд | 🛡️ Захищено XT.com API";

// The fallback values the dashboard has always shown before real data
// arrives.
const DEFAULT_BALANCE: &str = "25,000.00";
const DEFAULT_PROFIT: &str = "2,458.75";
const DEFAULT_ACTIVE_POSITIONS: &str = "2";
const DEFAULT_EFFICIENCY: &str = "68.2";
const DEFAULT_PAIRS_SCANNED: &str = "563";
const DEFAULT_UPTIME: &str = "0m";
const DEFAULT_XT_CONNECTION: &str = "Connected";
const DEFAULT_LAST_SIGNAL: &str = "ADAUSDT +2.3% spread";
const DEFAULT_OPPORTUNITIES: &str = "85";
const DEFAULT_STRONG_SIGNALS: &str = "12";
const DEFAULT_EXECUTION_RATE: &str = "14.1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PnlTone {
    Positive,
    Negative,
}

impl PnlTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            PnlTone::Positive => "positive",
            PnlTone::Negative => "negative",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatsCard {
    pub balance: String,
    pub profit: String,
    pub active_positions: String,
    pub efficiency: String,
}

#[derive(Debug, Clone)]
pub struct BotCard {
    pub running: bool,
    pub indicator: String,
    pub pairs_scanned: String,
    pub uptime: String,
    pub xt_connection: String,
    pub toggle_label: String,
}

#[derive(Debug, Clone)]
pub struct PositionRow {
    pub symbol: String,
    pub side: String,
    pub side_class: &'static str,
    pub size: String,
    pub entry_price: String,
    pub pnl: String,
    pub pnl_tone: PnlTone,
}

#[derive(Debug, Clone)]
pub struct SignalsCard {
    pub total_opportunities: String,
    pub strong_signals: String,
    pub execution_rate: String,
    pub last_signal: String,
}

/// Display-ready projection of the latest snapshot and status. Composing
/// one never fetches anything.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub stats: StatsCard,
    pub bot: BotCard,
    pub positions: Vec<PositionRow>,
    pub signals: SignalsCard,
    pub refreshed_at: Option<DateTime<Utc>>,
}

pub fn compose(
    data: Option<&DashboardSnapshot>,
    status: Option<&BotStatus>,
    refreshed_at: Option<DateTime<Utc>>,
) -> DashboardView {
    DashboardView {
        stats: compose_stats(data),
        bot: compose_bot(status),
        positions: compose_positions(data),
        signals: compose_signals(data, status),
        refreshed_at,
    }
}

fn compose_stats(data: Option<&DashboardSnapshot>) -> StatsCard {
    let balance = data
        .and_then(|d| d.balance.as_ref())
        .map(|b| format!("{:.2}", b.total))
        .unwrap_or_else(|| DEFAULT_BALANCE.to_string());

    let profit = data
        .and_then(|d| d.bot_stats.as_ref())
        .map(|s| format!("{:.2}", s.total_profit))
        .unwrap_or_else(|| DEFAULT_PROFIT.to_string());

    // An empty list counts as "nothing yet" here, same as the positions
    // card below.
    let active_positions = match data {
        Some(d) if !d.positions.is_empty() => d.positions.len().to_string(),
        _ => DEFAULT_ACTIVE_POSITIONS.to_string(),
    };

    let efficiency = data
        .and_then(|d| d.bot_stats.as_ref())
        .map(|s| format!("{}%", s.efficiency))
        .unwrap_or_else(|| format!("{}%", DEFAULT_EFFICIENCY));

    StatsCard {
        balance,
        profit,
        active_positions,
        efficiency,
    }
}

fn compose_bot(status: Option<&BotStatus>) -> BotCard {
    let running = status.map(|s| s.running).unwrap_or(false);
    BotCard {
        running,
        indicator: if running {
            RUNNING_INDICATOR.to_string()
        } else {
            STOPPED_INDICATOR.to_string()
        },
        pairs_scanned: status
            .and_then(|s| s.pairs_scanned)
            .map(|n| n.to_string())
            .unwrap_or_else(|| DEFAULT_PAIRS_SCANNED.to_string()),
        uptime: status
            .and_then(|s| s.uptime.clone())
            .unwrap_or_else(|| DEFAULT_UPTIME.to_string()),
        xt_connection: status
            .and_then(|s| s.xt_connection.clone())
            .unwrap_or_else(|| DEFAULT_XT_CONNECTION.to_string()),
        toggle_label: if running {
            STOP_LABEL.to_string()
        } else {
            START_LABEL.to_string()
        },
    }
}

fn compose_positions(data: Option<&DashboardSnapshot>) -> Vec<PositionRow> {
    let Some(data) = data else {
        return Vec::new();
    };
    data.positions
        .iter()
        .map(|pos| PositionRow {
            symbol: pos.symbol.clone(),
            side: pos.side.to_string(),
            side_class: pos.side.css_class(),
            size: pos.size.to_string(),
            entry_price: pos.entry_price.to_string(),
            pnl: format_pnl(pos.pnl, pos.pnl_percent),
            pnl_tone: if pos.pnl >= Decimal::ZERO {
                PnlTone::Positive
            } else {
                PnlTone::Negative
            },
        })
        .collect()
}

fn compose_signals(data: Option<&DashboardSnapshot>, status: Option<&BotStatus>) -> SignalsCard {
    let signals = data.and_then(|d| d.recent_signals.as_ref());
    SignalsCard {
        total_opportunities: signals
            .map(|s| s.total_opportunities.to_string())
            .unwrap_or_else(|| DEFAULT_OPPORTUNITIES.to_string()),
        strong_signals: signals
            .map(|s| s.strong_signals.to_string())
            .unwrap_or_else(|| DEFAULT_STRONG_SIGNALS.to_string()),
        execution_rate: signals
            .map(|s| format!("{}%", s.execution_rate))
            .unwrap_or_else(|| format!("{}%", DEFAULT_EXECUTION_RATE)),
        last_signal: status
            .and_then(|s| s.last_signal.clone())
            .unwrap_or_else(|| DEFAULT_LAST_SIGNAL.to_string()),
    }
}

/// `+$40.00 (4.3%)` for gains, `$-12.50 (-1.2%)` for losses. The plus sign
/// is explicit, the minus comes from the number itself.
fn format_pnl(pnl: Decimal, pnl_percent: Decimal) -> String {
    let sign = if pnl >= Decimal::ZERO { "+" } else { "" };
    format!("{sign}${pnl:.2} ({pnl_percent:.1}%)")
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", APP_TITLE, APP_VERSION)?;
        writeln!(f)?;

        writeln!(f, "📊 Загальна статистика")?;
        writeln!(f, "  Баланс:           ${}", self.stats.balance)?;
        writeln!(f, "  Прибуток:         ${}", self.stats.profit)?;
        writeln!(f, "  Активні позиції:  {}", self.stats.active_positions)?;
        writeln!(f, "  Ефективність:     {}", self.stats.efficiency)?;
        writeln!(f)?;

        writeln!(f, "🤖 Статус бота")?;
        writeln!(f, "  {}", self.bot.indicator)?;
        writeln!(f, "  Сканується пар: {}", self.bot.pairs_scanned)?;
        writeln!(f, "  Час роботи: {}", self.bot.uptime)?;
        writeln!(f, "  XT.com: {}", self.bot.xt_connection)?;
        writeln!(f, "  [ {} ]", self.bot.toggle_label)?;
        writeln!(f)?;

        writeln!(f, "📈 Активні позиції")?;
        if self.positions.is_empty() {
            writeln!(f, "  {}", NO_POSITIONS)?;
        } else {
            for row in &self.positions {
                writeln!(
                    f,
                    "  {}  {}  Розмір: {}  Вхід: ${}  {}",
                    row.symbol, row.side, row.size, row.entry_price, row.pnl
                )?;
            }
        }
        writeln!(f)?;

        writeln!(f, "🎯 Арбітражні можливості")?;
        writeln!(
            f,
            "  За 24 год: {}   Сильні сигнали: {}   Виконано: {}",
            self.signals.total_opportunities,
            self.signals.strong_signals,
            self.signals.execution_rate
        )?;
        writeln!(f, "  🔔 Останній сигнал: {}", self.signals.last_signal)?;
        writeln!(f)?;

        write!(f, "{}", FOOTER)?;
        if let Some(at) = self.refreshed_at {
            write!(
                f,
                "\nОстаннє оновлення: {}",
                at.with_timezone(&Local).format("%H:%M:%S")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BalanceInfo, BotStats, Position, PositionSide, SignalStats};
    use rust_decimal_macros::dec;

    fn full_snapshot() -> DashboardSnapshot {
        DashboardSnapshot {
            balance: Some(BalanceInfo {
                total: dec!(25847.32),
                available: dec!(18200.15),
            }),
            positions: vec![Position {
                symbol: "ADAUSDT".to_string(),
                side: PositionSide::Long,
                size: dec!(2000),
                entry_price: dec!(0.465),
                current_price: dec!(0.472),
                pnl: dec!(14),
                pnl_percent: dec!(1.5),
            }],
            bot_stats: Some(BotStats {
                efficiency: dec!(71.4),
                total_trades: 147,
                successful_trades: 100,
                failed_trades: 47,
                win_rate: dec!(68),
                total_profit: dec!(2600.5),
                avg_profit: dec!(16.73),
            }),
            recent_signals: Some(SignalStats {
                strong_signals: 9,
                medium_signals: 20,
                weak_signals: 31,
                total_opportunities: 60,
                execution_rate: dec!(15),
            }),
            chart_data: Vec::new(),
        }
    }

    fn running_status() -> BotStatus {
        BotStatus {
            running: true,
            uptime: Some("3h 42m".to_string()),
            pairs_scanned: Some(612),
            active_positions: Some(1),
            total_profit: Some(dec!(2600.5)),
            last_signal: Some("DOGEUSDT +1.8% spread".to_string()),
            xt_connection: Some("Connected".to_string()),
        }
    }

    #[test]
    fn renders_fixed_defaults_when_nothing_is_loaded() {
        let view = compose(None, None, None);
        assert_eq!(view.stats.balance, "25,000.00");
        assert_eq!(view.stats.profit, "2,458.75");
        assert_eq!(view.stats.active_positions, "2");
        assert_eq!(view.stats.efficiency, "68.2%");
        assert_eq!(view.bot.indicator, "🔴 Зупинено");
        assert_eq!(view.bot.toggle_label, "Запустити");
        assert_eq!(view.bot.pairs_scanned, "563");
        assert_eq!(view.bot.uptime, "0m");
        assert_eq!(view.bot.xt_connection, "Connected");
        assert_eq!(view.signals.total_opportunities, "85");
        assert_eq!(view.signals.strong_signals, "12");
        assert_eq!(view.signals.execution_rate, "14.1%");
        assert_eq!(view.signals.last_signal, "ADAUSDT +2.3% spread");
        assert!(view.positions.is_empty());
    }

    #[test]
    fn renders_real_values_when_loaded() {
        let snapshot = full_snapshot();
        let status = running_status();
        let view = compose(Some(&snapshot), Some(&status), None);

        assert_eq!(view.stats.balance, "25847.32");
        assert_eq!(view.stats.profit, "2600.50");
        assert_eq!(view.stats.active_positions, "1");
        assert_eq!(view.stats.efficiency, "71.4%");
        assert_eq!(view.bot.indicator, "🟢 Працює");
        assert_eq!(view.bot.toggle_label, "Зупинити");
        assert_eq!(view.bot.pairs_scanned, "612");
        assert_eq!(view.signals.execution_rate, "15%");
        assert_eq!(view.signals.last_signal, "DOGEUSDT +1.8% spread");
    }

    #[test]
    fn position_rows_carry_signed_pnl_and_side_class() {
        let mut snapshot = full_snapshot();
        snapshot.positions.push(Position {
            symbol: "DOGEUSDT".to_string(),
            side: PositionSide::Short,
            size: dec!(5000),
            entry_price: dec!(0.082),
            current_price: dec!(0.0845),
            pnl: dec!(-12.5),
            pnl_percent: dec!(-1.2),
        });
        let view = compose(Some(&snapshot), None, None);

        let long = &view.positions[0];
        assert_eq!(long.side, "LONG");
        assert_eq!(long.side_class, "long");
        assert_eq!(long.pnl, "+$14.00 (1.5%)");
        assert_eq!(long.pnl_tone, PnlTone::Positive);
        assert_eq!(long.pnl_tone.css_class(), "positive");

        let short = &view.positions[1];
        assert_eq!(short.side_class, "short");
        assert_eq!(short.pnl, "$-12.50 (-1.2%)");
        assert_eq!(short.pnl_tone, PnlTone::Negative);
    }

    #[test]
    fn zero_pnl_counts_as_a_gain() {
        assert_eq!(format_pnl(dec!(0), dec!(0)), "+$0.00 (0.0%)");
    }

    #[test]
    fn empty_position_list_falls_back_like_an_absent_one() {
        let mut snapshot = full_snapshot();
        snapshot.positions.clear();
        let view = compose(Some(&snapshot), None, None);

        assert_eq!(view.stats.active_positions, "2");
        assert!(view.positions.is_empty());
        assert!(view.to_string().contains(NO_POSITIONS));
    }

    #[test]
    fn rendered_text_carries_every_card() {
        let snapshot = full_snapshot();
        let status = running_status();
        let rendered = compose(Some(&snapshot), Some(&status), None).to_string();

        assert!(rendered.contains("🤖 Trinkenbot Enhanced v2.0.0"));
        assert!(rendered.contains("Баланс:           $25847.32"));
        assert!(rendered.contains("Сканується пар: 612"));
        assert!(rendered.contains("ADAUSDT  LONG  Розмір: 2000  Вхід: $0.465  +$14.00 (1.5%)"));
        assert!(rendered.contains("За 24 год: 60"));
        assert!(rendered.contains("🔔 Останній сигнал: DOGEUSDT +1.8% spread"));
        assert!(rendered.contains("Дані оновлюються кожні 10 секунд"));
    }
}
