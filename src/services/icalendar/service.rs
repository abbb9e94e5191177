use super::import;
use crate::models::calendar::Calendar;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Service for importing iCalendar (.ics) files
#[derive(Debug, Default, Clone, Copy)]
pub struct ICalendarService;

impl ICalendarService {
    /// Create a new ICalendarService
    pub fn new() -> Self {
        Self
    }

    /// Import a calendar from an iCalendar formatted string
    pub fn import_calendar(&self, ics_content: &str) -> Calendar {
        import::from_str(ics_content)
    }

    /// Import a calendar from a .ics file on disk
    pub fn import_from_file(&self, path: &Path) -> Result<Calendar> {
        let content =
            fs::read_to_string(path).context(format!("Failed to read .ics file: {:?}", path))?;
        Ok(self.import_calendar(&content))
    }

    /// Read the file to completion without blocking the runtime, then parse it
    pub async fn import_from_file_async(&self, path: &Path) -> Result<Calendar> {
        let content = tokio::fs::read_to_string(path)
            .await
            .context(format!("Failed to read .ics file: {:?}", path))?;
        let calendar = self.import_calendar(&content);
        log::info!(
            "Imported '{}' ({} events) from {:?}",
            calendar.title,
            calendar.events.len(),
            path
        );
        Ok(calendar)
    }
}
