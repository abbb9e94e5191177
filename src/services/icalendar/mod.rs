//! iCalendar (.ics) import for day coloring.
//!
//! Only the properties the coloring rules need are read: the calendar name
//! and each event's all-day start, end and summary. Recurrence, time zones
//! and escaping are not interpreted.

mod import;
mod service;

pub use service::ICalendarService;

use crate::models::calendar::Calendar;

/// Parse raw .ics text into a calendar. Malformed input never fails.
pub fn parse_ics(ics_content: &str) -> Calendar {
    import::from_str(ics_content)
}
