#![allow(dead_code)]

//! Timeline builder: newest-first events annotated with elapsed time and
//! localized dates. Library primitive; no route exposes it yet.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::dates::calc::{days_since, months_since, DateMathError};
use crate::dates::locale::{format_date_ar, format_date_en};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Any other fields on the event are passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    #[serde(flatten)]
    pub event: TimelineEvent,
    pub days_ago: i64,
    pub months_ago: i64,
    pub years_ago: i64,
    pub formatted_date_ar: String,
    pub formatted_date_en: String,
}

/// Sorts events by date, newest first, and annotates each one.
///
/// `YYYY-MM-DD` strings order lexicographically, so the sort runs on the raw
/// strings. Events sharing a date keep their input order.
pub fn build_timeline(
    events: &[TimelineEvent],
    today: NaiveDate,
) -> Result<Vec<TimelineEntry>, DateMathError> {
    let mut sorted: Vec<&TimelineEvent> = events.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    sorted
        .into_iter()
        .map(|event| {
            let months_ago = months_since(&event.date, today)?;
            Ok(TimelineEntry {
                days_ago: days_since(&event.date, today)?,
                months_ago,
                years_ago: months_ago / 12,
                formatted_date_ar: format_date_ar(&event.date)?,
                formatted_date_en: format_date_en(&event.date)?,
                event: event.clone(),
            })
        })
        .collect()
}

/// Same as [`build_timeline`] for an untyped JSON array of events.
pub fn timeline_from_json(
    events: Value,
    today: NaiveDate,
) -> Result<Vec<TimelineEntry>, DateMathError> {
    let events: Vec<TimelineEvent> = serde_json::from_value(events)?;
    build_timeline(&events, today)
}
