use serde::{Deserialize, Serialize};

use super::cell::{DayCell, StyleProperty};
use super::theme::ThemeSignal;
use crate::models::settings::SettingsDocument;
use crate::services::coloring::ColorRules;
use crate::utils::date::{day_key_to_canonical, parse_day_key};

/// Attribute names and opacities used when annotating day cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatorConfig {
    /// Attribute carrying the packed integer day-key.
    pub day_key_attribute: String,
    /// Attribute carrying an already canonical date, used when no day-key is present.
    pub date_attribute: String,
    /// Present exactly when this crate styled the cell.
    pub marker_attribute: String,
    pub dark_opacity: f32,
    pub light_opacity: f32,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            day_key_attribute: "data-datekey".to_string(),
            date_attribute: "data-date".to_string(),
            marker_attribute: "data-day-tint".to_string(),
            dark_opacity: 0.5,
            light_opacity: 0.75,
        }
    }
}

/// Counts from one annotation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyStats {
    pub colored: usize,
    pub reverted: usize,
    pub unchanged: usize,
    pub skipped: usize,
}

impl ApplyStats {
    /// Number of cells whose styling this pass changed.
    pub fn mutated(&self) -> usize {
        self.colored + self.reverted
    }
}

pub struct Annotator<T> {
    config: AnnotatorConfig,
    theme: T,
}

impl<T: ThemeSignal> Annotator<T> {
    pub fn new(config: AnnotatorConfig, theme: T) -> Self {
        Self { config, theme }
    }

    /// Canonical date of a cell: decoded day-key first, then the raw date attribute.
    pub fn cell_date<C: DayCell + ?Sized>(&self, cell: &C) -> Option<String> {
        if let Some(raw) = cell.attribute(&self.config.day_key_attribute) {
            return parse_day_key(&raw).map(day_key_to_canonical);
        }
        cell.attribute(&self.config.date_attribute)
    }

    /// Style every cell whose date has a color and revert cells that lost theirs.
    ///
    /// Cells already carrying the marker are left alone, so repeated passes
    /// with the same rules write nothing.
    pub fn apply<'c, C, I>(&self, cells: I, rules: &ColorRules<'_>) -> ApplyStats
    where
        C: DayCell + 'c,
        I: IntoIterator<Item = &'c mut C>,
    {
        let mut stats = ApplyStats::default();
        let marker = self.config.marker_attribute.as_str();
        // Read once per pass.
        let opacity = self.opacity().to_string();

        for cell in cells {
            let Some(date) = self.cell_date(&*cell) else {
                stats.skipped += 1;
                continue;
            };

            let marked = cell.has_attribute(marker);
            match (rules.resolve(&date), marked) {
                (Some(color), false) => {
                    cell.set_attribute(marker, "true");
                    cell.set_style(StyleProperty::BackgroundColor, color);
                    cell.set_style(StyleProperty::Opacity, &opacity);
                    stats.colored += 1;
                }
                (None, true) => {
                    cell.remove_style(StyleProperty::BackgroundColor);
                    cell.remove_style(StyleProperty::Opacity);
                    cell.remove_attribute(marker);
                    stats.reverted += 1;
                }
                _ => stats.unchanged += 1,
            }
        }

        log::debug!(
            "Annotated day cells: {} colored, {} reverted, {} unchanged, {} skipped",
            stats.colored,
            stats.reverted,
            stats.unchanged,
            stats.skipped
        );
        stats
    }

    pub fn apply_document<'c, C, I>(&self, cells: I, document: &SettingsDocument) -> ApplyStats
    where
        C: DayCell + 'c,
        I: IntoIterator<Item = &'c mut C>,
    {
        self.apply(cells, &ColorRules::from_document(document))
    }

    fn opacity(&self) -> f32 {
        if self.theme.prefers_dark() {
            self.config.dark_opacity
        } else {
            self.config.light_opacity
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::CalendarEvent;
    use crate::services::annotator::cell::MemoryCell;
    use crate::services::annotator::theme::{FixedTheme, MockThemeSignal};
    use crate::utils::date::encode_day_key;
    use chrono::NaiveDate;

    fn key_cell(year: i32, month: u32, day: u32) -> MemoryCell {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let key = encode_day_key(date).unwrap();
        MemoryCell::new().with_attribute("data-datekey", key.to_string())
    }

    fn monday_blue() -> SettingsDocument {
        SettingsDocument {
            day_colors: [("Monday".to_string(), "blue".to_string())].into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_weekday_rule_colors_cell() {
        let annotator = Annotator::new(AnnotatorConfig::default(), FixedTheme(false));
        let mut cells = vec![key_cell(2024, 1, 15), key_cell(2024, 1, 16)];

        let stats = annotator.apply_document(&mut cells, &monday_blue());

        assert_eq!(stats.colored, 1);
        assert_eq!(cells[0].background(), Some("blue"));
        assert_eq!(cells[0].opacity(), Some("0.75"));
        assert!(cells[0].has_attribute("data-day-tint"));
        assert_eq!(cells[1].background(), None);
        assert!(!cells[1].has_attribute("data-day-tint"));
    }

    #[test]
    fn test_calendar_override_wins() {
        let annotator = Annotator::new(AnnotatorConfig::default(), FixedTheme(false));
        let document = SettingsDocument {
            calendar_colors: [("Work".to_string(), "green".to_string())].into(),
            calendar_events: vec![CalendarEvent::new("20240115", "Work")],
            ..monday_blue()
        };
        let mut cells = vec![key_cell(2024, 1, 15)];

        annotator.apply_document(&mut cells, &document);
        assert_eq!(cells[0].background(), Some("green"));
    }

    #[test]
    fn test_second_pass_writes_nothing() {
        let annotator = Annotator::new(AnnotatorConfig::default(), FixedTheme(false));
        let document = monday_blue();
        let mut cells = vec![key_cell(2024, 1, 15), key_cell(2024, 1, 22)];

        annotator.apply_document(&mut cells, &document);
        let writes: Vec<_> = cells.iter().map(MemoryCell::style_writes).collect();

        let stats = annotator.apply_document(&mut cells, &document);
        assert_eq!(stats.mutated(), 0);
        assert_eq!(stats.unchanged, 2);
        let after: Vec<_> = cells.iter().map(MemoryCell::style_writes).collect();
        assert_eq!(writes, after);
    }

    #[test]
    fn test_reverts_when_rule_removed() {
        let annotator = Annotator::new(AnnotatorConfig::default(), FixedTheme(false));
        let mut cells = vec![key_cell(2024, 1, 15)];
        annotator.apply_document(&mut cells, &monday_blue());

        let stats = annotator.apply_document(&mut cells, &SettingsDocument::default());

        assert_eq!(stats.reverted, 1);
        assert_eq!(cells[0].background(), None);
        assert_eq!(cells[0].opacity(), None);
        assert!(!cells[0].has_attribute("data-day-tint"));
    }

    #[test]
    fn test_marked_cell_keeps_existing_color() {
        let annotator = Annotator::new(AnnotatorConfig::default(), FixedTheme(false));
        let mut cells = vec![key_cell(2024, 1, 15)];
        annotator.apply_document(&mut cells, &monday_blue());

        let document = SettingsDocument {
            day_colors: [("Monday".to_string(), "red".to_string())].into(),
            ..Default::default()
        };
        annotator.apply_document(&mut cells, &document);
        assert_eq!(cells[0].background(), Some("blue"));
    }

    #[test]
    fn test_rerendered_cell_is_colored_again() {
        let annotator = Annotator::new(AnnotatorConfig::default(), FixedTheme(false));
        let mut cells = vec![key_cell(2024, 1, 15)];
        annotator.apply_document(&mut cells, &monday_blue());

        cells[0].rerender(&["data-datekey"]);
        let stats = annotator.apply_document(&mut cells, &monday_blue());
        assert_eq!(stats.colored, 1);
        assert_eq!(cells[0].background(), Some("blue"));
    }

    #[test]
    fn test_date_attribute_fallback_and_skips() {
        let annotator = Annotator::new(AnnotatorConfig::default(), FixedTheme(false));
        let mut cells = vec![
            MemoryCell::new().with_attribute("data-date", "2024-1-15"),
            MemoryCell::new(),
            MemoryCell::new().with_attribute("data-datekey", "not-a-number"),
        ];

        let stats = annotator.apply_document(&mut cells, &monday_blue());
        assert_eq!(stats.colored, 1);
        assert_eq!(stats.skipped, 2);
        assert_eq!(cells[0].background(), Some("blue"));
    }

    #[test]
    fn test_dark_theme_uses_lower_opacity() {
        let mut theme = MockThemeSignal::new();
        theme.expect_prefers_dark().times(1).return_const(true);
        let annotator = Annotator::new(AnnotatorConfig::default(), theme);
        let mut cells = vec![key_cell(2024, 1, 15), key_cell(2024, 1, 22)];

        annotator.apply_document(&mut cells, &monday_blue());
        assert_eq!(cells[0].opacity(), Some("0.5"));
        assert_eq!(cells[1].opacity(), Some("0.5"));
    }

    #[test]
    fn test_custom_attribute_names() {
        let config = AnnotatorConfig {
            day_key_attribute: "data-dk".to_string(),
            marker_attribute: "data-colored".to_string(),
            ..Default::default()
        };
        let annotator = Annotator::new(config, FixedTheme(true));
        let key = encode_day_key(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()).unwrap();
        let mut cells = vec![MemoryCell::new().with_attribute("data-dk", key.to_string())];

        annotator.apply_document(&mut cells, &monday_blue());
        assert!(cells[0].has_attribute("data-colored"));
    }
}
