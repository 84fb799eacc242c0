//! Date helpers for the dictionary's 8-digit date form.

use chrono::{NaiveDate, Utc};

/// Formats a date in the dictionary contract's `YYYYMMDD` form.
pub fn ymd(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Today's UTC date in `YYYYMMDD` form, used for date-typed field defaults
/// and last-update stamps.
pub fn today_ymd() -> String {
    ymd(Utc::now().date_naive())
}
