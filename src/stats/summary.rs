use serde::{Deserialize, Serialize};

use crate::models::Trade;
use crate::stats::ProfitFactor;

/// Summary metrics for one day's trades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingStats {
    pub winning_trades: usize,
    pub losing_trades: usize,
    pub total_trades: usize,
    pub win_rate: f64,     // Percent, 0..=100
    pub total_pnl: f64,    // Sum of P&L percents
    pub average_risk: f64, // Mean risk percent per trade
    pub gross_profit: f64,
    pub gross_loss: f64, // Absolute value
    pub profit_factor: ProfitFactor,
    pub best_trade: f64,
    pub worst_trade: f64,
}

impl TradingStats {
    /// Reduce a day's trades to summary metrics.
    ///
    /// Unparsable percentages count as `0` in sums and averages and are never
    /// classified as profit or loss. Win/loss counts come from each trade's
    /// marked outcome, not from the sign of its P&L.
    pub fn from_trades(trades: &[Trade]) -> Self {
        let total_trades = trades.len();
        let winning_trades = trades.iter().filter(|t| t.is_win()).count();
        let losing_trades = trades.iter().filter(|t| t.is_loss()).count();

        let win_rate = if total_trades > 0 {
            (winning_trades as f64 / total_trades as f64) * 100.0
        } else {
            0.0
        };

        let total_pnl = trades.iter().map(Trade::pnl_value).fold(0.0_f64, |sum, pnl| sum + pnl);
        let total_risk = trades
            .iter()
            .map(Trade::risk_value)
            .fold(0.0_f64, |sum, risk| sum + risk);
        let average_risk = total_risk / total_trades.max(1) as f64;

        let parsed_pnl: Vec<f64> = trades.iter().filter_map(Trade::parsed_pnl).collect();
        let gross_profit = parsed_pnl
            .iter()
            .copied()
            .filter(|pnl| *pnl > 0.0)
            .fold(0.0_f64, |sum, pnl| sum + pnl);
        let gross_loss = parsed_pnl
            .iter()
            .copied()
            .filter(|pnl| *pnl < 0.0)
            .fold(0.0_f64, |sum, pnl| sum + pnl)
            .abs();
        let profit_factor = ProfitFactor::from_gross(gross_profit, gross_loss);

        let (best_trade, worst_trade) = if trades.is_empty() {
            (0.0, 0.0)
        } else {
            trades.iter().map(Trade::pnl_value).fold(
                (f64::NEG_INFINITY, f64::INFINITY),
                |(best, worst), pnl| (best.max(pnl), worst.min(pnl)),
            )
        };

        log::debug!(
            "Aggregated {} trades: {} wins, {} losses, total P&L {:.2}, profit factor {}",
            total_trades,
            winning_trades,
            losing_trades,
            total_pnl,
            profit_factor
        );

        Self {
            winning_trades,
            losing_trades,
            total_trades,
            win_rate,
            total_pnl,
            average_risk,
            gross_profit,
            gross_loss,
            profit_factor,
            best_trade,
            worst_trade,
        }
    }
}
