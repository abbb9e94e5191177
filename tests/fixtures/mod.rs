// Test fixtures - reusable test data
// Provides consistent calendars and cells across all test files

#![allow(dead_code)]

use chrono::NaiveDate;
use day_tint::services::annotator::MemoryCell;
use day_tint::utils::date::encode_day_key;

/// Sample .ics documents
pub mod ics {
    /// Work calendar with two all-day events in January 2024
    pub const WORK: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example Corp//Calendar//EN\r\n\
X-WR-CALNAME:Work\r\n\
BEGIN:VEVENT\r\n\
UID:release@example.com\r\n\
DTSTART;VALUE=DATE:20240115\r\n\
DTEND;VALUE=DATE:20240116\r\n\
SUMMARY:Release day\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:offsite@example.com\r\n\
DTSTART;VALUE=DATE:20240124\r\n\
DTEND;VALUE=DATE:20240125\r\n\
SUMMARY:Offsite\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

    /// Holiday calendar sharing the 15th with the work calendar
    pub const HOLIDAYS: &str = "BEGIN:VCALENDAR\n\
X-WR-CALNAME:Holidays\n\
BEGIN:VEVENT\n\
DTSTART;VALUE=DATE:20240101\n\
DTEND;VALUE=DATE:20240102\n\
SUMMARY:New Year's Day\n\
END:VEVENT\n\
BEGIN:VEVENT\n\
DTSTART;VALUE=DATE:20240115\n\
DTEND;VALUE=DATE:20240116\n\
SUMMARY:Observance\n\
END:VEVENT\n\
END:VCALENDAR\n";

    /// Calendar whose name appears only after its events
    pub const LATE_NAME: &str = "BEGIN:VCALENDAR\n\
BEGIN:VEVENT\n\
DTSTART;VALUE=DATE:20240110\n\
END:VEVENT\n\
X-WR-CALNAME:Late\n\
END:VCALENDAR\n";
}

/// Day cell carrying the packed day-key the host page would render
pub fn day_cell(year: i32, month: u32, day: u32) -> MemoryCell {
    let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
    let key = encode_day_key(date).unwrap();
    MemoryCell::new().with_attribute("data-datekey", key.to_string())
}
