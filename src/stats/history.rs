use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::JournalError;
use crate::models::{JournalEntry, Trade};
use crate::stats::TradingStats;

/// Look-back window for multi-day views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    Today,
    Week,
    Month,
    ThreeMonths,
    SixMonths,
    Year,
    #[default]
    All,
}

impl DateRange {
    /// First day included in the range, counting back from `reference`.
    pub fn start(&self, reference: NaiveDate) -> Option<NaiveDate> {
        let days = match self {
            DateRange::Today => 0,
            DateRange::Week => 7,
            DateRange::Month => 30,
            DateRange::ThreeMonths => 90,
            DateRange::SixMonths => 180,
            DateRange::Year => 365,
            DateRange::All => return None,
        };
        reference.checked_sub_signed(Duration::days(days))
    }

    /// `All` is unbounded; every other range ends on `reference`.
    pub fn contains(&self, date: NaiveDate, reference: NaiveDate) -> bool {
        match self.start(reference) {
            Some(start) => date >= start && date <= reference,
            None => true,
        }
    }
}

impl FromStr for DateRange {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(DateRange::Today),
            "week" => Ok(DateRange::Week),
            "month" => Ok(DateRange::Month),
            "3months" => Ok(DateRange::ThreeMonths),
            "6months" => Ok(DateRange::SixMonths),
            "year" => Ok(DateRange::Year),
            "all" => Ok(DateRange::All),
            other => Err(JournalError::InvalidDateRange(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityCurvePoint {
    pub date: NaiveDate,
    pub daily_pnl: f64,
    pub cumulative_pnl: f64,
    pub trade_count: usize,
}

/// Day-by-day P&L and its running total across entries that have trades.
pub fn equity_curve<'a, I>(
    entries: I,
    range: DateRange,
    reference: NaiveDate,
) -> Vec<EquityCurvePoint>
where
    I: IntoIterator<Item = &'a JournalEntry>,
{
    let mut days: Vec<&JournalEntry> = entries
        .into_iter()
        .filter(|entry| !entry.trades.is_empty() && range.contains(entry.date, reference))
        .collect();
    days.sort_by_key(|entry| entry.date);

    let mut cumulative_pnl = 0.0;
    days.into_iter()
        .map(|entry| {
            let daily_pnl = entry
                .trades
                .iter()
                .map(Trade::pnl_value)
                .fold(0.0_f64, |sum, pnl| sum + pnl);
            cumulative_pnl += daily_pnl;
            EquityCurvePoint {
                date: entry.date,
                daily_pnl,
                cumulative_pnl,
                trade_count: entry.trades.len(),
            }
        })
        .collect()
}

/// Summary across several journal days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodStats {
    pub days: usize,
    pub trading_days: usize,
    pub stats: TradingStats, // Over every trade in the period
    pub mean_daily_profit_factor: Option<f64>,
    pub unbounded_days: usize, // Trading days left out of the mean above
    pub best_day: Option<(NaiveDate, f64)>,
    pub worst_day: Option<(NaiveDate, f64)>,
}

impl PeriodStats {
    pub fn from_entries<'a, I>(entries: I, range: DateRange, reference: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a JournalEntry>,
    {
        let in_range: Vec<&JournalEntry> = entries
            .into_iter()
            .filter(|entry| range.contains(entry.date, reference))
            .collect();

        let all_trades: Vec<Trade> = in_range
            .iter()
            .flat_map(|entry| entry.trades.iter().cloned())
            .collect();
        let stats = TradingStats::from_trades(&all_trades);

        let mut finite_factors = Vec::new();
        let mut unbounded_days = 0;
        let mut best_day: Option<(NaiveDate, f64)> = None;
        let mut worst_day: Option<(NaiveDate, f64)> = None;

        for entry in in_range.iter().filter(|entry| !entry.trades.is_empty()) {
            let day = entry.stats();

            // An unbounded day has no ratio to average
            match day.profit_factor.finite() {
                Some(factor) => finite_factors.push(factor),
                None => unbounded_days += 1,
            }

            if best_day.is_none_or(|(_, pnl)| day.total_pnl > pnl) {
                best_day = Some((entry.date, day.total_pnl));
            }
            if worst_day.is_none_or(|(_, pnl)| day.total_pnl < pnl) {
                worst_day = Some((entry.date, day.total_pnl));
            }
        }

        let trading_days = finite_factors.len() + unbounded_days;
        let mean_daily_profit_factor = if finite_factors.is_empty() {
            None
        } else {
            Some(finite_factors.iter().sum::<f64>() / finite_factors.len() as f64)
        };

        log::debug!(
            "Period summary over {} days ({} trading, {} unbounded)",
            in_range.len(),
            trading_days,
            unbounded_days
        );

        Self {
            days: in_range.len(),
            trading_days,
            stats,
            mean_daily_profit_factor,
            unbounded_days,
            best_day,
            worst_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TradeOutcome;
    use crate::stats::ProfitFactor;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn entry(day: &str, pnls: &[&str]) -> JournalEntry {
        let mut entry = JournalEntry::new(date(day));
        for pnl in pnls {
            let outcome = if pnl.starts_with('-') {
                TradeOutcome::Loss
            } else {
                TradeOutcome::Win
            };
            entry.add_trade(Trade::new("1", *pnl, outcome)).unwrap();
        }
        entry
    }

    #[test]
    fn test_parse_date_range() {
        assert_eq!("today".parse::<DateRange>().unwrap(), DateRange::Today);
        assert_eq!("3months".parse::<DateRange>().unwrap(), DateRange::ThreeMonths);
        assert_eq!("all".parse::<DateRange>().unwrap(), DateRange::All);

        let err = "fortnight".parse::<DateRange>().unwrap_err();
        assert!(matches!(err, JournalError::InvalidDateRange(ref s) if s == "fortnight"));
    }

    #[test]
    fn test_range_start() {
        let reference = date("2024-03-31");
        assert_eq!(DateRange::Today.start(reference), Some(reference));
        assert_eq!(DateRange::Week.start(reference), Some(date("2024-03-24")));
        assert_eq!(DateRange::Month.start(reference), Some(date("2024-03-01")));
        assert_eq!(DateRange::All.start(reference), None);
        assert!(!DateRange::Week.contains(date("2024-03-23"), reference));
        assert!(DateRange::All.contains(date("1999-01-01"), reference));
    }

    #[test]
    fn test_ranges_stop_at_reference() {
        let reference = date("2024-03-01");
        let entries = vec![entry("2024-02-28", &["2"]), entry("2024-06-01", &["9"])];

        assert!(!DateRange::Week.contains(date("2024-06-01"), reference));
        assert!(!DateRange::Today.contains(date("2024-03-02"), reference));
        assert!(DateRange::Today.contains(reference, reference));
        assert!(DateRange::All.contains(date("2024-06-01"), reference));

        let curve = equity_curve(&entries, DateRange::Week, reference);
        assert_eq!(curve.len(), 1);
        assert_eq!(curve[0].date, date("2024-02-28"));

        let today = PeriodStats::from_entries(&entries, DateRange::Today, reference);
        assert_eq!(today.days, 0);
        assert_eq!(today.stats.total_pnl, 0.0);

        let all = PeriodStats::from_entries(&entries, DateRange::All, reference);
        assert_eq!(all.days, 2);
    }

    #[test]
    fn test_equity_curve_accumulates_in_date_order() {
        let entries = vec![
            entry("2024-03-05", &["-1", "-2"]),
            entry("2024-03-01", &["5", "-2"]),
            entry("2024-03-03", &[]),
            entry("2024-03-04", &["4"]),
        ];

        let curve = equity_curve(&entries, DateRange::All, date("2024-03-31"));

        assert_eq!(curve.len(), 3);
        assert_eq!(curve[0].date, date("2024-03-01"));
        assert_eq!(curve[0].daily_pnl, 3.0);
        assert_eq!(curve[0].trade_count, 2);
        assert_eq!(curve[1].cumulative_pnl, 7.0);
        assert_eq!(curve[2].daily_pnl, -3.0);
        assert_eq!(curve[2].cumulative_pnl, 4.0);
    }

    #[test]
    fn test_equity_curve_respects_range() {
        let entries = vec![entry("2024-01-10", &["2"]), entry("2024-03-28", &["1"])];

        let curve = equity_curve(&entries, DateRange::Week, date("2024-03-31"));

        assert_eq!(curve.len(), 1);
        assert_eq!(curve[0].cumulative_pnl, 1.0);
    }

    #[test]
    fn test_period_excludes_unbounded_days_from_mean() {
        let entries = vec![
            entry("2024-03-01", &["5", "-2"]), // 2.5
            entry("2024-03-02", &["3"]),       // unbounded
            entry("2024-03-03", &["1", "-2"]), // 0.5
            entry("2024-03-04", &[]),
        ];

        let period = PeriodStats::from_entries(&entries, DateRange::All, date("2024-03-31"));

        assert_eq!(period.days, 4);
        assert_eq!(period.trading_days, 3);
        assert_eq!(period.unbounded_days, 1);
        assert_eq!(period.mean_daily_profit_factor, Some(1.5));
        assert_eq!(period.stats.total_trades, 5);
        assert_eq!(period.stats.total_pnl, 5.0);
        assert_eq!(period.stats.profit_factor, ProfitFactor::Finite(9.0 / 4.0));
        assert_eq!(period.best_day, Some((date("2024-03-01"), 3.0)));
        assert_eq!(period.worst_day, Some((date("2024-03-03"), -1.0)));
    }

    #[test]
    fn test_period_with_only_unbounded_days() {
        let entries = vec![entry("2024-03-01", &["2"]), entry("2024-03-02", &["1"])];

        let period = PeriodStats::from_entries(&entries, DateRange::All, date("2024-03-31"));

        assert_eq!(period.mean_daily_profit_factor, None);
        assert_eq!(period.unbounded_days, 2);
        assert_eq!(period.stats.profit_factor, ProfitFactor::Unbounded);
    }

    #[test]
    fn test_empty_period() {
        let entries: Vec<JournalEntry> = Vec::new();
        let period = PeriodStats::from_entries(&entries, DateRange::Month, date("2024-03-31"));

        assert_eq!(period.days, 0);
        assert_eq!(period.trading_days, 0);
        assert_eq!(period.best_day, None);
        assert_eq!(period.stats.total_trades, 0);
    }
}
