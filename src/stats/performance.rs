use serde::{Deserialize, Serialize};

use crate::models::StatsSettings;
use crate::stats::{ProfitFactor, TradingStats};

pub const PERFORMANCE_LABELS: [&str; 4] = ["Win Rate", "Profit Factor", "Avg Risk", "Total P&L"];

/// The day's metrics squeezed onto `[0, 1]` for the radar chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceVector {
    pub win_rate: f64,
    pub profit_factor: f64,
    pub risk: f64, // Inverted: lower average risk scores higher
    pub pnl: f64,
}

impl PerformanceVector {
    pub fn from_stats(stats: &TradingStats, settings: &StatsSettings) -> Self {
        let win_rate = clamp_unit(stats.win_rate / 100.0);

        let profit_factor = match stats.profit_factor {
            ProfitFactor::Finite(value) => clamp_unit(value / settings.profit_factor_cap),
            ProfitFactor::Unbounded => 1.0,
        };

        let risk = clamp_unit(1.0 - (stats.average_risk / settings.risk_ceiling).min(1.0));

        let pnl = clamp_unit((stats.total_pnl + settings.pnl_band) / (2.0 * settings.pnl_band));

        Self {
            win_rate,
            profit_factor,
            risk,
            pnl,
        }
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.win_rate, self.profit_factor, self.risk, self.pnl]
    }

    pub fn labels() -> [&'static str; 4] {
        PERFORMANCE_LABELS
    }
}

// NaN (a zero scale reaching 0/0) scores as 0
fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
