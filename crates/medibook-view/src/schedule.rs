//! Schedule normalization and display formatting.
//!
//! The backend serves schedule slots in two shapes: split "YYYY-MM-DD" /
//! "HH:MM" string fields, or combined ISO-8601 datetime fields.
//! `ScheduleWindow` collapses both into parsed date and time components so
//! table cells never branch on the wire shape. Anything missing or
//! unparseable normalizes to `None` and renders as "N/A".

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use medibook_contracts::schedule::Schedule;

/// A schedule slot's date/time components, normalized from either wire shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleWindow {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
}

impl ScheduleWindow {
    /// Normalize a schedule record.
    ///
    /// Split fields win when both shapes are populated; the combined
    /// datetime fields are the fallback.
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let start = combined(schedule.start_date_time.as_deref());
        let end = combined(schedule.end_date_time.as_deref());

        Self {
            start_date: split_date(schedule.start_date.as_deref())
                .or(start.map(|dt| dt.date())),
            end_date: split_date(schedule.end_date.as_deref()).or(end.map(|dt| dt.date())),
            start_time: split_time(schedule.start_time.as_deref())
                .or(start.map(|dt| dt.time())),
            end_time: split_time(schedule.end_time.as_deref()).or(end.map(|dt| dt.time())),
        }
    }

    /// The slot length in minutes, when both times are known and the end
    /// does not precede the start.
    pub fn duration_minutes(&self) -> Option<i64> {
        let (start, end) = (self.start_time?, self.end_time?);
        let minutes = (end - start).num_minutes();
        (minutes >= 0).then_some(minutes)
    }
}

fn split_date(field: Option<&str>) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(field?, "%Y-%m-%d").ok()
}

fn split_time(field: Option<&str>) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(field?, "%H:%M").ok()
}

fn combined(field: Option<&str>) -> Option<NaiveDateTime> {
    let field = field?;
    DateTime::parse_from_rfc3339(field)
        .map(|dt| dt.naive_utc())
        .or_else(|_| NaiveDateTime::parse_from_str(field, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}

// ── Display formatting ────────────────────────────────────────────────────────

/// Format a duration in minutes the way the schedule table shows it:
/// "2h 30m", "2h", "45m", and "0m" for a zero-length slot.
pub fn format_duration(minutes: i64) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h "));
    }
    if rest > 0 {
        out.push_str(&format!("{rest}m"));
    }
    if out.is_empty() {
        out.push_str("0m");
    }
    out.trim_end().to_string()
}

/// Render a date as "Jan 5, 2026", or "N/A" when missing.
pub fn display_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => "N/A".to_string(),
    }
}

/// Render a time as "09:30", or "N/A" when missing.
pub fn display_time(time: Option<NaiveTime>) -> String {
    match time {
        Some(time) => time.format("%H:%M").to_string(),
        None => "N/A".to_string(),
    }
}
