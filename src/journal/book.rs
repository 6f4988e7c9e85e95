use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{JournalError, Result};
use crate::models::{JournalEntry, StatsSettings, Trade};
use crate::stats::DayReport;

/// Today's date as the journal keys it (UTC calendar day)
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Calendar cell data for a day that has an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMarker {
    pub date: NaiveDate,
    pub trade_count: usize,
}

/// The session's journal entries, one per day, kept in date order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JournalBook {
    entries: BTreeMap<NaiveDate, JournalEntry>,
}

impl JournalBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry for `date`, created empty on first use.
    pub fn open(&mut self, date: NaiveDate) -> &mut JournalEntry {
        self.entries.entry(date).or_insert_with(|| {
            log::info!("Opened new journal entry for {}", date);
            JournalEntry::new(date)
        })
    }

    pub fn open_today(&mut self) -> &mut JournalEntry {
        self.open(today_utc())
    }

    /// Replace the stored entry that has the same date.
    pub fn save(&mut self, entry: JournalEntry) -> Result<()> {
        match self.entries.get_mut(&entry.date) {
            Some(existing) => {
                log::info!(
                    "Saved journal entry for {} ({} trades)",
                    entry.date,
                    entry.trades.len()
                );
                *existing = entry;
                Ok(())
            }
            None => {
                log::warn!("Save rejected: no journal entry for {}", entry.date);
                Err(JournalError::EntryNotFound(entry.date))
            }
        }
    }

    pub fn get(&self, date: NaiveDate) -> Option<&JournalEntry> {
        self.entries.get(&date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&date)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &JournalEntry> {
        self.entries.values()
    }

    /// Trades recorded on `date`; empty when there is no entry.
    pub fn trades_for(&self, date: NaiveDate) -> &[Trade] {
        self.entries
            .get(&date)
            .map(|entry| entry.trades.as_slice())
            .unwrap_or(&[])
    }

    pub fn todays_trades(&self) -> &[Trade] {
        self.trades_for(today_utc())
    }

    pub fn day_report(&self, date: NaiveDate, settings: &StatsSettings) -> DayReport {
        DayReport::from_trades(self.trades_for(date), settings)
    }

    /// Days of the given month that have an entry, with their trade counts.
    pub fn month_markers(&self, year: i32, month: u32) -> Result<Vec<DayMarker>> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| JournalError::InvalidDate(format!("{}-{:02}", year, month)))?;

        Ok(self
            .entries
            .range(first..)
            .take_while(|(date, _)| date.year() == year && date.month() == month)
            .map(|(date, entry)| DayMarker {
                date: *date,
                trade_count: entry.trades.len(),
            })
            .collect())
    }

    /// Serialize every entry as a JSON array, oldest first.
    pub fn export_json(&self) -> Result<String> {
        let entries: Vec<&JournalEntry> = self.entries.values().collect();
        Ok(serde_json::to_string_pretty(&entries)?)
    }

    /// Build a book from a JSON array of entries. Dates must be unique.
    pub fn import_json(json: &str) -> Result<Self> {
        let entries: Vec<JournalEntry> = serde_json::from_str(json)?;

        let mut book = Self::new();
        for entry in entries {
            if book.contains(entry.date) {
                log::warn!("Import rejected: duplicate entry for {}", entry.date);
                return Err(JournalError::DuplicateEntry(entry.date));
            }
            book.entries.insert(entry.date, entry);
        }

        log::info!("Imported {} journal entries", book.len());
        Ok(book)
    }
}
