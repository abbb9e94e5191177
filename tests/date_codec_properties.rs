// Property-based tests for the date codec and color resolution
// Exercises the packed day-key and ICS conversions with random inputs

use chrono::{Datelike, NaiveDate};
use day_tint::models::event::CalendarEvent;
use day_tint::models::settings::{CalendarColors, DayColors};
use day_tint::services::coloring::resolve;
use day_tint::utils::date::{
    canonical_weekday_name, date_to_canonical, day_key_to_canonical, encode_day_key,
    ics_to_canonical, weekday_name,
};
use proptest::prelude::*;

proptest! {
    /// Property: decoding follows the documented bit layout for any key
    #[test]
    fn prop_day_key_layout(key in any::<u32>()) {
        let expected = format!(
            "{}-{}-{}",
            1970 + ((key >> 9) & 0xFF),
            (key >> 5) & 0xF,
            key & 0x1F
        );
        prop_assert_eq!(day_key_to_canonical(key), expected);
    }

    /// Property: any eight-digit string converts to its unpadded fields
    #[test]
    fn prop_ics_date_unpadded(year in 0u32..10000, month in 0u32..100, day in 0u32..100) {
        let raw = format!("{:04}{:02}{:02}", year, month, day);
        let expected = format!("{}-{}-{}", year, month, day);
        prop_assert_eq!(ics_to_canonical(Some(raw.as_str())), Some(expected));
    }

    /// Property: anything shorter than eight characters yields nothing
    #[test]
    fn prop_short_ics_date_is_empty(raw in "[0-9]{0,7}") {
        prop_assert_eq!(ics_to_canonical(Some(raw.as_str())), None);
    }

    /// Property: a packed real date and the same date from ICS give the same join key
    #[test]
    fn prop_cell_and_event_keys_agree(days in 0i64..(256 * 365)) {
        let date = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + chrono::Duration::days(days);
        prop_assume!(date.year() <= 2225);

        let key = encode_day_key(date).unwrap();
        let from_cell = day_key_to_canonical(key);
        let from_event = ics_to_canonical(Some(date.format("%Y%m%d").to_string().as_str())).unwrap();

        prop_assert_eq!(&from_cell, &from_event);
        prop_assert_eq!(&from_cell, &date_to_canonical(date));
        prop_assert_eq!(canonical_weekday_name(&from_cell), Some(weekday_name(date.weekday())));
    }

    /// Property: an enabled calendar event always beats the weekday rule
    #[test]
    fn prop_override_precedence(days in 0i64..20000) {
        let date = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + chrono::Duration::days(days);
        let canonical = date_to_canonical(date);

        let mut day_colors = DayColors::new();
        day_colors.insert(weekday_name(date.weekday()).to_string(), "blue".to_string());
        let mut calendar_colors = CalendarColors::new();
        calendar_colors.insert("Work".to_string(), "green".to_string());
        let events = vec![CalendarEvent::new(date.format("%Y%m%d").to_string(), "Work")];

        prop_assert_eq!(resolve(&canonical, &day_colors, &calendar_colors, &events), Some("green"));
        prop_assert_eq!(resolve(&canonical, &day_colors, &calendar_colors, &[]), Some("blue"));
        let no_day_colors = DayColors::new();
        prop_assert_eq!(resolve(&canonical, &no_day_colors, &calendar_colors, &[]), None);
    }
}
