pub mod error;
pub mod journal;
pub mod models;
pub mod percent;
pub mod stats;

pub use error::{JournalError, Result};
pub use journal::{DayMarker, JournalBook};
pub use models::{JournalEntry, StatsSettings, Trade, TradeOutcome};
pub use stats::{
    ChartSeries, DateRange, DayReport, PerformanceVector, PeriodStats, ProfitFactor, TradingStats,
};
