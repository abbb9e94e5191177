use crate::models::event::CalendarEvent;
use crate::models::settings::{CalendarColors, DayColors, SettingsDocument};
use crate::utils::date::{canonical_weekday_name, ics_to_canonical};

/// Color for `date` (canonical `Y-M-D`), or `None` when no rule applies.
pub fn resolve<'a>(
    date: &str,
    day_colors: &'a DayColors,
    calendar_colors: &'a CalendarColors,
    events: &[CalendarEvent],
) -> Option<&'a str> {
    let weekday_color = canonical_weekday_name(date)
        .and_then(|weekday| day_colors.get(weekday))
        .map(String::as_str);

    let override_color = events.iter().find_map(|event| {
        let color = calendar_colors.get(&event.calendar_title)?;
        let start = ics_to_canonical(event.start.as_deref())?;
        (start == date).then_some(color.as_str())
    });

    override_color.or(weekday_color)
}

/// Color rules prepared once per annotation pass.
///
/// Events of calendars without a color are dropped up front and the rest keep
/// their load order, so lookups give the same answer as [`resolve`].
#[derive(Debug, Clone)]
pub struct ColorRules<'a> {
    day_colors: &'a DayColors,
    overrides: Vec<(String, &'a str)>,
}

impl<'a> ColorRules<'a> {
    pub fn new(
        day_colors: &'a DayColors,
        calendar_colors: &'a CalendarColors,
        events: &[CalendarEvent],
    ) -> Self {
        let overrides = events
            .iter()
            .filter_map(|event| {
                let color = calendar_colors.get(&event.calendar_title)?;
                let start = ics_to_canonical(event.start.as_deref())?;
                Some((start, color.as_str()))
            })
            .collect();

        Self {
            day_colors,
            overrides,
        }
    }

    pub fn from_document(document: &'a SettingsDocument) -> Self {
        Self::new(
            &document.day_colors,
            &document.calendar_colors,
            &document.calendar_events,
        )
    }

    pub fn resolve(&self, date: &str) -> Option<&'a str> {
        self.overrides
            .iter()
            .find(|(start, _)| start == date)
            .map(|(_, color)| *color)
            .or_else(|| {
                canonical_weekday_name(date)
                    .and_then(|weekday| self.day_colors.get(weekday))
                    .map(String::as_str)
            })
    }
}
