//! # Ordering Engine
//!
//! Items are ordered by a single point in time. Posts carry an ISO date string,
//! projects only a year; both are reduced to a [`SortKey`] before comparing.
//!
//! A date that cannot be parsed is not an error. It becomes the smallest
//! possible key, so it lands last under `Newest` and first under `Oldest`.
//!
//! Featured items are never promoted here. Grouping them is the job of the
//! projection partition.

use crate::item::ContentItem;
use crate::state::SortOrder;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::cmp::Ordering;

/// Comparable point in time for an item. `None` sorts before every date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SortKey(Option<DateTime<Utc>>);

impl SortKey {
    pub const UNKNOWN: SortKey = SortKey(None);

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        SortKey(Some(dt))
    }

    /// Parses RFC 3339 timestamps, `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS`,
    /// `YYYY-MM` and bare years.
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim();
        if s.is_empty() {
            return Self::UNKNOWN;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Self::from_datetime(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Self::from_datetime(Utc.from_utc_datetime(&naive));
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Self::from_date(date);
        }
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d") {
            return Self::from_date(date);
        }
        match s.parse::<i32>() {
            Ok(year) => Self::from_year(year),
            Err(_) => Self::UNKNOWN,
        }
    }

    pub fn from_year(year: i32) -> Self {
        match NaiveDate::from_ymd_opt(year, 1, 1) {
            Some(date) => Self::from_date(date),
            None => Self::UNKNOWN,
        }
    }

    fn from_date(date: NaiveDate) -> Self {
        match date.and_hms_opt(0, 0, 0) {
            Some(naive) => Self::from_datetime(Utc.from_utc_datetime(&naive)),
            None => Self::UNKNOWN,
        }
    }

    pub fn is_known(&self) -> bool {
        self.0.is_some()
    }

    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        self.0
    }
}

/// Compares two keys under the given order.
pub fn compare(a: &SortKey, b: &SortKey, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Newest => b.cmp(a),
        SortOrder::Oldest => a.cmp(b),
    }
}

/// Stable sort of borrowed items. Items with equal keys keep their input order.
pub fn sort_items<'a, I: ContentItem>(items: Vec<&'a I>, order: SortOrder) -> Vec<&'a I> {
    let mut keyed: Vec<(SortKey, &'a I)> = items.into_iter().map(|i| (i.sort_key(), i)).collect();
    keyed.sort_by(|(a, _), (b, _)| compare(a, b, order));
    keyed.into_iter().map(|(_, item)| item).collect()
}
