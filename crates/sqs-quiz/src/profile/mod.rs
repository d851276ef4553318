//! Results completed during the current process, newest first.

use crate::content::type_profile;
use crate::locale::Language;
use crate::questionnaire::OrientationType;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;

/// Entries kept before the oldest is dropped.
pub const HISTORY_CAPACITY: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileEntry {
    pub id: u64,
    pub completed_at: DateTime<Utc>,
    pub primary_type: OrientationType,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileEntryView {
    pub id: u64,
    pub date: String,
    pub primary_type: OrientationType,
    pub result: &'static str,
}

#[derive(Debug, Default)]
pub struct ProfileHistory {
    entries: VecDeque<ProfileEntry>,
    next_id: u64,
}

impl ProfileHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, primary_type: OrientationType, completed_at: DateTime<Utc>) -> &ProfileEntry {
        self.next_id = self.next_id.wrapping_add(1);
        if self.entries.len() == HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(ProfileEntry {
            id: self.next_id,
            completed_at,
            primary_type,
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &ProfileEntry> {
        self.entries.iter().rev()
    }

    pub fn views(&self, language: Language) -> Vec<ProfileEntryView> {
        self.entries()
            .map(|entry| ProfileEntryView {
                id: entry.id,
                date: entry.completed_at.date_naive().format("%Y-%m-%d").to_string(),
                primary_type: entry.primary_type,
                result: type_profile(entry.primary_type, language).label,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn lists_newest_first_with_localized_labels() {
        let mut history = ProfileHistory::new();
        assert!(history.is_empty());

        let first = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).single().expect("valid date");
        let second = Utc.with_ymd_and_hms(2026, 3, 2, 18, 0, 0).single().expect("valid date");
        history.record(OrientationType::Sapiosexual, first);
        let latest = history.record(OrientationType::Asexual, second).id;

        let views = history.views(Language::En);
        assert_eq!(history.len(), 2);
        assert_eq!(views[0].id, latest);
        assert_eq!(views[0].date, "2026-03-02");
        assert_eq!(views[0].result, "Asexual");
        assert_eq!(history.views(Language::Zh)[1].result, "智性恋 Sapiosexual");
    }

    #[test]
    fn history_drops_the_oldest_entry_at_capacity() {
        let mut history = ProfileHistory::new();
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).single().expect("valid date");
        for _ in 0..HISTORY_CAPACITY + 25 {
            history.record(OrientationType::Bisexual, at);
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        let ids: Vec<u64> = history.entries().map(|entry| entry.id).collect();
        assert_eq!(ids.first().copied(), Some((HISTORY_CAPACITY + 25) as u64));
        assert_eq!(ids.last().copied(), Some(26));
    }
}
