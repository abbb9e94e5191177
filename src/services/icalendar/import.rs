use crate::models::calendar::Calendar;
use crate::models::event::CalendarEvent;

const CALENDAR_NAME: &str = "X-WR-CALNAME";
const BEGIN_EVENT: &str = "BEGIN:VEVENT";
const END_EVENT: &str = "END:VEVENT";
const ALL_DAY_START: &str = "DTSTART;VALUE=DATE";
const ALL_DAY_END: &str = "DTEND;VALUE=DATE";
const SUMMARY: &str = "SUMMARY";

/// Single pass over the file. Events are stamped with the calendar title seen
/// so far, so a name property after the events leaves them untitled.
pub(super) fn from_str(ics_content: &str) -> Calendar {
    let mut title = String::new();
    let mut events = Vec::new();
    let mut current_event: Option<CalendarEvent> = None;

    for line in ics_content.lines() {
        if line == BEGIN_EVENT {
            if current_event.is_some() {
                log::debug!("Discarding unterminated VEVENT");
            }
            current_event = Some(CalendarEvent::default());
            continue;
        }

        if line == END_EVENT {
            if let Some(mut event) = current_event.take() {
                event.calendar_title = title.clone();
                events.push(event);
            }
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        match key {
            CALENDAR_NAME => title = value.to_string(),
            ALL_DAY_START => {
                if let Some(event) = current_event.as_mut() {
                    event.start = Some(value.to_string());
                }
            }
            ALL_DAY_END => {
                if let Some(event) = current_event.as_mut() {
                    event.end = Some(value.to_string());
                }
            }
            SUMMARY => {
                if let Some(event) = current_event.as_mut() {
                    event.name = Some(value.to_string());
                }
            }
            _ => {}
        }
    }

    if current_event.is_some() {
        log::debug!("Dropping VEVENT left open at end of input");
    }

    log::debug!("Parsed calendar '{}' with {} events", title, events.len());
    Calendar::new(title, events)
}
