//! Per-date history derived from the item and note stores.

use crate::error::{ChecklistError, ChecklistResult};
use crate::items::ItemStore;
use crate::notes::NoteStore;
use checklist_types::{DayDetail, HistorySummary};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static DATE_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date key regex"));

/// `YYYY-MM-DD` portion of a UTC timestamp. Zero-padded, so string order is date order.
pub fn date_key(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

pub fn validate_date_key(date: &str) -> ChecklistResult<()> {
    if DATE_KEY_RE.is_match(date) {
        Ok(())
    } else {
        Err(ChecklistError::Validation("Invalid date format.".to_string()))
    }
}

pub struct HistoryAggregator<'a> {
    items: &'a ItemStore,
    notes: &'a NoteStore,
}

impl<'a> HistoryAggregator<'a> {
    pub fn new(items: &'a ItemStore, notes: &'a NoteStore) -> Self {
        Self { items, notes }
    }

    /// One entry per date that has items or a note, newest date first.
    pub fn summary(&self) -> Vec<HistorySummary> {
        let mut grouped: BTreeMap<String, (usize, usize)> = BTreeMap::new();

        for item in self.items.list() {
            let counts = grouped.entry(date_key(&item.created_at)).or_default();
            counts.0 += 1;
            if item.done {
                counts.1 += 1;
            }
        }

        let notes = self.notes.snapshot();
        for date in notes.keys() {
            grouped.entry(date.clone()).or_default();
        }

        grouped
            .into_iter()
            .rev()
            .map(|(date, (total, completed))| {
                let note = notes.get(&date).cloned().unwrap_or_default();
                HistorySummary {
                    date,
                    total,
                    completed,
                    note,
                }
            })
            .collect()
    }

    pub fn detail_for_date(&self, date: &str) -> DayDetail {
        let items: Vec<_> = self
            .items
            .list()
            .into_iter()
            .filter(|item| date_key(&item.created_at) == date)
            .collect();
        let completed = items.iter().filter(|item| item.done).count();

        DayDetail {
            date: date.to_string(),
            total: items.len(),
            completed,
            note: self.notes.get(date),
            items,
        }
    }
}
