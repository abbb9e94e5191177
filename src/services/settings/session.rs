use std::path::Path;

use anyhow::Result;

use super::store::{load_document, SettingsStore};
use crate::error::{DayTintError, DayTintResult};
use crate::models::calendar::{flatten_events, Calendar};
use crate::models::settings::{
    CalendarColors, DayColors, SettingsDocument, SettingsKey, SettingsPatch,
};
use crate::services::icalendar::{parse_ics, ICalendarService};
use crate::utils::date::{parse_weekday, weekday_name};

/// Working copy of the settings while the user edits them.
///
/// Owns the loaded calendar list; the flattened event cache is never held
/// here and is rebuilt from the calendars whenever a document is produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsSession {
    calendars: Vec<Calendar>,
    day_colors: DayColors,
    calendar_colors: CalendarColors,
}

impl SettingsSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_document(document: SettingsDocument) -> Self {
        Self {
            calendars: document.loaded_calendars,
            day_colors: document.day_colors,
            calendar_colors: document.calendar_colors,
        }
    }

    /// Start a session from whatever the store currently holds.
    pub async fn load<S: SettingsStore>(store: &S) -> DayTintResult<Self> {
        let document = load_document(store, &SettingsKey::ALL).await?;
        log::debug!(
            "Loaded settings session with {} calendars",
            document.loaded_calendars.len()
        );
        Ok(Self::from_document(document))
    }

    pub fn calendars(&self) -> &[Calendar] {
        &self.calendars
    }

    pub fn day_colors(&self) -> &DayColors {
        &self.day_colors
    }

    pub fn calendar_colors(&self) -> &CalendarColors {
        &self.calendar_colors
    }

    pub fn add_calendar(&mut self, calendar: Calendar) -> usize {
        log::info!(
            "Adding calendar '{}' with {} events",
            calendar.title,
            calendar.events.len()
        );
        self.calendars.push(calendar);
        self.calendars.len() - 1
    }

    /// Parse .ics text and append the result. Returns the new calendar's index.
    pub fn import_ics(&mut self, ics_content: &str) -> usize {
        self.add_calendar(parse_ics(ics_content))
    }

    /// Read an .ics file to completion, then parse and append it.
    pub async fn import_file(&mut self, path: &Path) -> Result<usize> {
        let calendar = ICalendarService::new().import_from_file_async(path).await?;
        Ok(self.add_calendar(calendar))
    }

    /// Remove a calendar by index.
    ///
    /// The color entry for its title goes too, unless another loaded calendar
    /// still carries that title.
    pub fn remove_calendar(&mut self, index: usize) -> DayTintResult<Calendar> {
        if index >= self.calendars.len() {
            return Err(DayTintError::CalendarIndex {
                index,
                len: self.calendars.len(),
            });
        }

        let removed = self.calendars.remove(index);
        let title_still_loaded = self.calendars.iter().any(|c| c.title == removed.title);
        if !title_still_loaded && self.calendar_colors.remove(&removed.title).is_some() {
            log::debug!("Dropped color for calendar '{}'", removed.title);
        }

        log::info!("Removed calendar '{}'", removed.title);
        Ok(removed)
    }

    /// Set or clear (`None`) the color for a weekday given by its long name.
    pub fn set_day_color(&mut self, weekday: &str, color: Option<String>) -> DayTintResult<()> {
        let weekday = parse_weekday(weekday)
            .ok_or_else(|| DayTintError::UnknownWeekday(weekday.to_string()))?;
        let name = weekday_name(weekday).to_string();

        match color {
            Some(color) => {
                self.day_colors.insert(name, color);
            }
            None => {
                self.day_colors.remove(&name);
            }
        }
        Ok(())
    }

    /// Set or clear (`None`) the override color for a calendar title.
    pub fn set_calendar_color(&mut self, title: &str, color: Option<String>) {
        match color {
            Some(color) => {
                self.calendar_colors.insert(title.to_string(), color);
            }
            None => {
                self.calendar_colors.remove(title);
            }
        }
    }

    /// The document this session would persist.
    pub fn document(&self) -> SettingsDocument {
        SettingsDocument {
            day_colors: self.day_colors.clone(),
            calendar_colors: self.calendar_colors.clone(),
            calendar_events: flatten_events(&self.calendars),
            loaded_calendars: self.calendars.clone(),
        }
    }

    /// Write every key, recomputing the flattened events in full.
    pub async fn save<S: SettingsStore>(&self, store: &S) -> DayTintResult<()> {
        let patch: SettingsPatch = self.document().into_patch();
        store.set(patch).await?;
        log::info!(
            "Saved settings: {} day colors, {} calendar colors, {} calendars",
            self.day_colors.len(),
            self.calendar_colors.len(),
            self.calendars.len()
        );
        Ok(())
    }
}
