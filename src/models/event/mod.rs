// Event module
// All-day calendar event as imported from an .ics file

use serde::{Deserialize, Serialize};

use crate::utils::date::ics_to_canonical;

/// A single `VEVENT` block read from an imported calendar.
///
/// Dates stay in their raw ICS form (`YYYYMMDD`); conversion to the
/// canonical `Y-M-D` join key happens at resolution time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub calendar_title: String,
}

impl CalendarEvent {
    /// Create an event starting on `start` (ICS `YYYYMMDD`) owned by `calendar_title`.
    pub fn new(start: impl Into<String>, calendar_title: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: None,
            name: None,
            calendar_title: calendar_title.into(),
        }
    }

    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Start date as a canonical `Y-M-D` string, if the raw start is usable.
    pub fn canonical_start(&self) -> Option<String> {
        ics_to_canonical(self.start.as_deref())
    }
}
