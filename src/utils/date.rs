use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Day-month-year, as written in the data file and in exports.
pub const DATE_FMT: &str = "%d-%m-%Y";
/// 24h clock with seconds.
pub const TIME_FMT: &str = "%H:%M:%S";

/// Current local wall-clock time, truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    truncate_to_seconds(chrono::Local::now().naive_local())
}

pub fn truncate_to_seconds(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_nanosecond(0).unwrap_or(dt)
}

pub fn format_date(dt: &NaiveDateTime) -> String {
    dt.format(DATE_FMT).to_string()
}

pub fn format_time(dt: &NaiveDateTime) -> String {
    dt.format(TIME_FMT).to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT).ok()
}

pub fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), TIME_FMT).ok()
}

/// Join a date column and a time column back into one stamp.
pub fn parse_stamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    Some(NaiveDateTime::new(parse_date(date)?, parse_time(time)?))
}
