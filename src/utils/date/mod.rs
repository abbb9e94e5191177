// Date utility functions
// Conversions between the host page's packed day-key, ICS dates and
// the canonical unpadded "Y-M-D" string used as the matching key.

use chrono::{Datelike, NaiveDate, Weekday};

const DAY_KEY_EPOCH_YEAR: i32 = 1970;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Decode a packed day-key into a canonical date string.
///
/// Layout: bits 9..=16 hold the year offset from 1970, bits 5..=8 the month
/// and bits 0..=4 the day of month. No validation is done on the fields.
pub fn day_key_to_canonical(key: u32) -> String {
    let year = DAY_KEY_EPOCH_YEAR + ((key >> 9) & 0xFF) as i32;
    let month = (key >> 5) & 0x0F;
    let day = key & 0x1F;
    format!("{}-{}-{}", year, month, day)
}

/// Parse a day-key attribute value.
pub fn parse_day_key(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Pack a date the way the host page does. `None` outside 1970..=2225.
pub fn encode_day_key(date: NaiveDate) -> Option<u32> {
    let offset = u32::try_from(date.year() - DAY_KEY_EPOCH_YEAR).ok()?;
    if offset > 0xFF {
        return None;
    }
    Some((offset << 9) | (date.month() << 5) | date.day())
}

/// Convert an ICS `YYYYMMDD` date into a canonical date string.
///
/// Only the first eight characters are read. Missing, short or non-numeric
/// input yields `None`, which never matches any cell.
pub fn ics_to_canonical(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    if raw.len() < 8 {
        return None;
    }

    let year: u32 = raw.get(0..4)?.parse().ok()?;
    let month: u32 = raw.get(4..6)?.parse().ok()?;
    let day: u32 = raw.get(6..8)?.parse().ok()?;

    Some(format!("{}-{}-{}", year, month, day))
}

pub fn date_to_canonical(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

/// Parse a canonical (or zero-padded) `Y-M-D` string into a date.
pub fn canonical_to_date(canonical: &str) -> Option<NaiveDate> {
    let mut parts = canonical.trim().splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// English long weekday name of a canonical date string.
pub fn canonical_weekday_name(canonical: &str) -> Option<&'static str> {
    canonical_to_date(canonical).map(|date| weekday_name(date.weekday()))
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Case-insensitive lookup of a long weekday name.
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    let name = name.trim();
    WEEKDAYS
        .iter()
        .copied()
        .find(|weekday| weekday_name(*weekday).eq_ignore_ascii_case(name))
}
