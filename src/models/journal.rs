use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{JournalError, Result};
use crate::models::{StatsSettings, Trade};
use crate::stats::{DayReport, TradingStats};

/// One day of the journal. The date is the entry's key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub plan: String,
    #[serde(default)]
    pub levels_interested: String,
    #[serde(default)]
    pub trading_outcome_review: String,
    #[serde(default)]
    pub trades: Vec<Trade>, // Insertion order
}

impl JournalEntry {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            plan: String::new(),
            levels_interested: String::new(),
            trading_outcome_review: String::new(),
            trades: Vec::new(),
        }
    }

    /// Append a trade. Only the risk percentage must be filled in.
    pub fn add_trade(&mut self, trade: Trade) -> Result<()> {
        if trade.risk_percentage.trim().is_empty() {
            return Err(JournalError::MissingRiskPercentage);
        }
        self.trades.push(trade);
        Ok(())
    }

    /// Clear everything except the date.
    pub fn reset(&mut self) {
        *self = Self::new(self.date);
    }

    pub fn stats(&self) -> TradingStats {
        TradingStats::from_trades(&self.trades)
    }

    pub fn report(&self, settings: &StatsSettings) -> DayReport {
        DayReport::from_trades(&self.trades, settings)
    }
}
