use serde::{Deserialize, Serialize};

use crate::models::{StatsSettings, Trade};
use crate::stats::{ChartSeries, PerformanceVector, TradingStats};

/// Everything the statistics panel shows for one day. Rebuilt in full on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayReport {
    pub stats: TradingStats,
    pub charts: ChartSeries,
    pub performance: PerformanceVector,
}

impl DayReport {
    pub fn from_trades(trades: &[Trade], settings: &StatsSettings) -> Self {
        let stats = TradingStats::from_trades(trades);
        let charts = ChartSeries::from_trades(trades);
        let performance = PerformanceVector::from_stats(&stats, settings);

        Self {
            stats,
            charts,
            performance,
        }
    }

    /// Charts are only drawn for days with at least one trade
    pub fn has_chart_data(&self) -> bool {
        self.stats.total_trades > 0
    }
}
