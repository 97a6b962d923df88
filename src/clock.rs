//! Local Time Helpers
//!
//! The browser's UTC offsets and date formatting for display and inputs.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Offset, Utc};
use wasm_bindgen::JsValue;

use crate::query::DayOffset;

/// The browser's time zone, daylight saving included
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalZone;

impl DayOffset for LocalZone {
    fn offset_on(&self, day: NaiveDate) -> FixedOffset {
        // local midnight of `day`; JS months are zero-based
        let midnight = js_sys::Date::new_with_year_month_day(day.year() as u32, day.month0() as i32, day.day() as i32);
        from_js_minutes(midnight.get_timezone_offset())
    }
}

/// Offset in effect at an instant
pub fn offset_at(at: DateTime<Utc>) -> FixedOffset {
    let date = js_sys::Date::new(&JsValue::from_f64(at.timestamp_millis() as f64));
    from_js_minutes(date.get_timezone_offset())
}

/// `getTimezoneOffset` counts minutes behind UTC, e.g. 180 for UTC-3
fn from_js_minutes(minutes: f64) -> FixedOffset {
    FixedOffset::west_opt((minutes * 60.0) as i32).unwrap_or_else(|| Utc.fix())
}

pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// `YYYY-MM-DD` in `offset`, as a date input expects
pub fn date_input_value(at: DateTime<Utc>, offset: FixedOffset) -> String {
    at.with_timezone(&offset).format("%Y-%m-%d").to_string()
}

/// Human-readable timestamp in `offset`
pub fn format_timestamp(at: DateTime<Utc>, offset: FixedOffset) -> String {
    at.with_timezone(&offset).format("%b %-d, %Y %H:%M").to_string()
}

/// Human-readable timestamp in the browser's zone
pub fn format_local(at: DateTime<Utc>) -> String {
    format_timestamp(at, offset_at(at))
}
