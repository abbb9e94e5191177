use serde::{Deserialize, Serialize};

use super::event::CalendarEvent;

/// One imported calendar file: its `X-WR-CALNAME` title and events in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
}

impl Calendar {
    pub fn new(title: impl Into<String>, events: Vec<CalendarEvent>) -> Self {
        Self {
            title: title.into(),
            events,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }
}

/// Concatenate the events of every calendar, in load order.
pub fn flatten_events<'a, I>(calendars: I) -> Vec<CalendarEvent>
where
    I: IntoIterator<Item = &'a Calendar>,
{
    calendars
        .into_iter()
        .flat_map(|calendar| calendar.events.iter().cloned())
        .collect()
}
