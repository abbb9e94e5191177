// Settings module
// Persisted color rules and imported calendars

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::calendar::{flatten_events, Calendar};
use super::event::CalendarEvent;

/// Weekday name (`"Monday"`..`"Sunday"`) to color.
pub type DayColors = BTreeMap<String, String>;
/// Calendar title to color.
pub type CalendarColors = BTreeMap<String, String>;

/// Named keys of the settings document, as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsKey {
    DayColors,
    CalendarColors,
    CalendarEvents,
    LoadedCalendars,
}

impl SettingsKey {
    pub const ALL: [SettingsKey; 4] = [
        SettingsKey::DayColors,
        SettingsKey::CalendarColors,
        SettingsKey::CalendarEvents,
        SettingsKey::LoadedCalendars,
    ];

    /// Keys the annotator needs on every pass.
    pub const COLORING: [SettingsKey; 3] = [
        SettingsKey::DayColors,
        SettingsKey::CalendarColors,
        SettingsKey::CalendarEvents,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsKey::DayColors => "dayColors",
            SettingsKey::CalendarColors => "calendarColors",
            SettingsKey::CalendarEvents => "calendarEvents",
            SettingsKey::LoadedCalendars => "loadedCalendars",
        }
    }
}

impl fmt::Display for SettingsKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A partial settings document. Absent keys are left untouched on write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_colors: Option<DayColors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_colors: Option<CalendarColors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_events: Option<Vec<CalendarEvent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loaded_calendars: Option<Vec<Calendar>>,
}

impl SettingsPatch {
    pub fn has(&self, key: SettingsKey) -> bool {
        match key {
            SettingsKey::DayColors => self.day_colors.is_some(),
            SettingsKey::CalendarColors => self.calendar_colors.is_some(),
            SettingsKey::CalendarEvents => self.calendar_events.is_some(),
            SettingsKey::LoadedCalendars => self.loaded_calendars.is_some(),
        }
    }

    pub fn is_empty(&self) -> bool {
        SettingsKey::ALL.iter().all(|key| !self.has(*key))
    }
}

/// The full settings document with every key defaulted.
///
/// `calendar_events` is a cache of `loaded_calendars` flattened in load order;
/// call [`SettingsDocument::rebuild_events`] after touching the calendars directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDocument {
    #[serde(default)]
    pub day_colors: DayColors,
    #[serde(default)]
    pub calendar_colors: CalendarColors,
    #[serde(default)]
    pub calendar_events: Vec<CalendarEvent>,
    #[serde(default)]
    pub loaded_calendars: Vec<Calendar>,
}

impl SettingsDocument {
    /// Build a document from whatever keys a store returned, defaulting each one.
    pub fn from_patch(patch: SettingsPatch) -> Self {
        Self {
            day_colors: patch.day_colors.unwrap_or_default(),
            calendar_colors: patch.calendar_colors.unwrap_or_default(),
            calendar_events: patch.calendar_events.unwrap_or_default(),
            loaded_calendars: patch.loaded_calendars.unwrap_or_default(),
        }
    }

    /// Full patch carrying every key, with the event cache recomputed.
    pub fn into_patch(mut self) -> SettingsPatch {
        self.rebuild_events();
        SettingsPatch {
            day_colors: Some(self.day_colors),
            calendar_colors: Some(self.calendar_colors),
            calendar_events: Some(self.calendar_events),
            loaded_calendars: Some(self.loaded_calendars),
        }
    }

    pub fn rebuild_events(&mut self) {
        self.calendar_events = flatten_events(&self.loaded_calendars);
    }

    /// True when the cached event list matches the loaded calendars.
    pub fn events_in_sync(&self) -> bool {
        self.calendar_events
            .iter()
            .eq(self.loaded_calendars.iter().flat_map(|c| c.events.iter()))
    }
}
