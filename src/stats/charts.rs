use serde::{Deserialize, Serialize};

use crate::models::Trade;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    /// Gains and flat points render green, losses red
    pub fn is_gain(&self) -> bool {
        self.value >= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WinLossDistribution {
    pub wins: usize,
    pub losses: usize,
}

impl WinLossDistribution {
    pub fn as_array(&self) -> [usize; 2] {
        [self.wins, self.losses]
    }
}

/// Per-trade series for the day's charts, in trade entry order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub win_loss: WinLossDistribution,
    pub pnl: Vec<SeriesPoint>,
    pub risk: Vec<SeriesPoint>,
    pub cumulative_pnl: Vec<SeriesPoint>,
}

impl ChartSeries {
    pub fn from_trades(trades: &[Trade]) -> Self {
        let win_loss = WinLossDistribution {
            wins: trades.iter().filter(|t| t.is_win()).count(),
            losses: trades.iter().filter(|t| t.is_loss()).count(),
        };

        let pnl: Vec<SeriesPoint> = trades
            .iter()
            .enumerate()
            .map(|(index, trade)| SeriesPoint {
                label: trade_label(index),
                value: trade.pnl_value(),
            })
            .collect();

        let risk = trades
            .iter()
            .enumerate()
            .map(|(index, trade)| SeriesPoint {
                label: trade_label(index),
                value: trade.risk_value(),
            })
            .collect();

        let mut running = 0.0;
        let cumulative_pnl = pnl
            .iter()
            .map(|point| {
                running += point.value;
                SeriesPoint {
                    label: point.label.clone(),
                    value: running,
                }
            })
            .collect();

        Self {
            win_loss,
            pnl,
            risk,
            cumulative_pnl,
        }
    }
}

fn trade_label(index: usize) -> String {
    format!("Trade {}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TradeOutcome;
    use crate::stats::TradingStats;

    fn values(points: &[SeriesPoint]) -> Vec<f64> {
        points.iter().map(|p| p.value).collect()
    }

    #[test]
    fn test_empty_day_has_empty_series() {
        let charts = ChartSeries::from_trades(&[]);
        assert_eq!(charts.win_loss.as_array(), [0, 0]);
        assert!(charts.pnl.is_empty());
        assert!(charts.risk.is_empty());
        assert!(charts.cumulative_pnl.is_empty());
    }

    #[test]
    fn test_cumulative_with_unparsable_first_trade() {
        let trades = vec![
            Trade::new("1", "", TradeOutcome::Pending),
            Trade::new("1", "4", TradeOutcome::Win),
        ];
        let charts = ChartSeries::from_trades(&trades);

        assert_eq!(values(&charts.pnl), vec![0.0, 4.0]);
        assert_eq!(values(&charts.cumulative_pnl), vec![0.0, 4.0]);
    }

    #[test]
    fn test_labels_are_one_based() {
        let trades = vec![
            Trade::new("1", "1", TradeOutcome::Win),
            Trade::new("2", "-1", TradeOutcome::Loss),
            Trade::new("3", "2", TradeOutcome::Win),
        ];
        let charts = ChartSeries::from_trades(&trades);

        let labels: Vec<&str> = charts.pnl.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Trade 1", "Trade 2", "Trade 3"]);
        assert_eq!(charts.risk[2].label, "Trade 3");
        assert_eq!(charts.cumulative_pnl[0].label, "Trade 1");
        assert_eq!(values(&charts.risk), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_series_stay_consistent_with_stats() {
        let trades = vec![
            Trade::new("1", "5", TradeOutcome::Win),
            Trade::new("2", "-2", TradeOutcome::Loss),
            Trade::new("x", "junk", TradeOutcome::Pending),
            Trade::new("0.5", "1.5", TradeOutcome::Win),
        ];
        let charts = ChartSeries::from_trades(&trades);
        let stats = TradingStats::from_trades(&trades);

        assert_eq!(
            charts.win_loss.as_array(),
            [stats.winning_trades, stats.losing_trades]
        );
        assert_eq!(charts.cumulative_pnl.len(), stats.total_trades);
        assert_eq!(charts.cumulative_pnl.last().unwrap().value, stats.total_pnl);
        assert_eq!(values(&charts.cumulative_pnl), vec![5.0, 3.0, 3.0, 4.5]);
    }

    #[test]
    fn test_gain_colouring() {
        let trades = vec![
            Trade::new("1", "-1", TradeOutcome::Loss),
            Trade::new("1", "0", TradeOutcome::Pending),
        ];
        let charts = ChartSeries::from_trades(&trades);
        assert!(!charts.pnl[0].is_gain());
        assert!(charts.pnl[1].is_gain());
    }
}
