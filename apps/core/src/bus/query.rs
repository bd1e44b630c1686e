//! Pure filtering and sorting over bus records.
//!
//! `filter` is the whole contract: no side effects, input untouched, all
//! active criteria AND-combined, then a stable sort by the requested key.
//! Malformed duration/time/date strings degrade to a zero or empty value;
//! querying never fails.

use std::cmp::Ordering;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use super::model::{Bus, FilterCriteria, SortKey, TimeBucket};

static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)h\s*(\d+)m").expect("valid duration pattern"));

/// Returns the filtered, ordered view of `items` for `criteria`.
pub fn filter(items: &[Bus], criteria: &FilterCriteria) -> Vec<Bus> {
    let mut result: Vec<Bus> = items
        .iter()
        .filter(|bus| matches(bus, criteria))
        .cloned()
        .collect();

    if let Some(key) = criteria.sort_by {
        sort_buses(&mut result, key);
    }
    result
}

fn matches(bus: &Bus, criteria: &FilterCriteria) -> bool {
    if let Some(from) = active(&criteria.from) {
        if !contains_ci(&bus.route.from, from) {
            return false;
        }
    }
    if let Some(to) = active(&criteria.to) {
        if !contains_ci(&bus.route.to, to) {
            return false;
        }
    }
    if let Some(date) = active(&criteria.date) {
        if normalize_date(&bus.travel_date) != normalize_date(date) {
            return false;
        }
    }
    if let Some(bucket) = criteria.departure_time {
        let hour = departure_hour(&bus.departure_time);
        let hit = match bucket {
            TimeBucket::Early => (6..12).contains(&hour),
            TimeBucket::Mid => (12..18).contains(&hour),
            TimeBucket::Late => hour >= 18 || hour < 6,
        };
        if !hit {
            return false;
        }
    }
    if let Some(bus_type) = active(&criteria.bus_type) {
        if !contains_ci(&bus.bus_type, bus_type) {
            return false;
        }
    }
    if let Some(range) = active(&criteria.price_range) {
        let (min, max) = parse_price_range(range);
        if bus.price < min {
            return false;
        }
        if let Some(max) = max {
            if bus.price > max {
                return false;
            }
        }
    }
    true
}

/// Stable sort by the requested key. `Vec::sort_by` / `sort_by_key` are
/// stable, so equal keys keep their original relative order.
fn sort_buses(buses: &mut [Bus], key: SortKey) {
    match key {
        SortKey::Price => buses.sort_by_key(|b| b.price),
        SortKey::Duration => buses.sort_by_key(|b| parse_duration_minutes(&b.duration)),
        SortKey::Rating => buses.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(Ordering::Equal)
        }),
        SortKey::Departure => buses.sort_by_key(|b| parse_time_minutes(&b.departure_time)),
    }
}

/// A criterion is active only when present and non-empty.
fn active(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Case-insensitive "contains", not exact equality.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Normalizes a calendar-date string to unpadded "YYYY-M-D" form.
///
/// Both sides of the date filter go through this before a plain string
/// comparison. The unpadded form is long-standing behavior the stored data
/// relies on: "2024-03-05" and "2024-3-5" collapse to the same key and
/// compare equal even though their padded forms differ. Unparseable input
/// normalizes to the empty string.
pub fn normalize_date(raw: &str) -> String {
    const FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .map(|d| format!("{}-{}-{}", d.year(), d.month(), d.day()))
        .unwrap_or_default()
}

/// Parses "<h>h <m>m" into total minutes. Anything that does not match the
/// pattern counts as 0 so sorting never fails.
pub fn parse_duration_minutes(duration: &str) -> u32 {
    DURATION_RE
        .captures(duration)
        .and_then(|caps| {
            let hours = caps[1].parse::<u32>().ok()?;
            let minutes = caps[2].parse::<u32>().ok()?;
            Some(hours * 60 + minutes)
        })
        .unwrap_or(0)
}

/// Parses "HH:MM" into minutes since midnight; malformed pieces count as 0.
pub fn parse_time_minutes(time: &str) -> u32 {
    let mut parts = time.split(':');
    let hours = parts
        .next()
        .and_then(|p| p.trim().parse::<u32>().ok())
        .unwrap_or(0);
    let minutes = parts
        .next()
        .and_then(|p| p.trim().parse::<u32>().ok())
        .unwrap_or(0);
    hours * 60 + minutes
}

fn departure_hour(time: &str) -> u32 {
    time.split(':')
        .next()
        .and_then(|p| p.trim().parse::<u32>().ok())
        .unwrap_or(0)
}

/// Parses a "min-max" price range. A missing min counts as 0; a missing or
/// zero max means unbounded above.
fn parse_price_range(range: &str) -> (u32, Option<u32>) {
    let mut parts = range.split('-');
    let min = parts
        .next()
        .and_then(|p| p.trim().parse::<u32>().ok())
        .unwrap_or(0);
    let max = parts
        .next()
        .and_then(|p| p.trim().parse::<u32>().ok())
        .filter(|&m| m != 0);
    (min, max)
}
