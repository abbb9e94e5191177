use chrono::{Datelike, NaiveDate};
use tokio::sync::mpsc;

use super::annotator::{Annotator, ApplyStats};
use super::cell::{DayCell, MemoryCell};
use super::theme::ThemeSignal;
use crate::error::DayTintResult;
use crate::models::settings::SettingsKey;
use crate::services::coloring::ColorRules;
use crate::services::settings::{load_document, SettingsStore};
use crate::utils::date::encode_day_key;

/// Kind of change observed under the calendar's main region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeNotification {
    ChildList,
    Subtree,
    Attributes,
}

impl ChangeNotification {
    /// Only structural changes can insert fresh, unmarked cells.
    pub fn is_structural(&self) -> bool {
        matches!(self, ChangeNotification::ChildList | ChangeNotification::Subtree)
    }
}

/// The calendar page: whatever day cells are currently rendered.
pub trait CalendarHost {
    type Cell: DayCell;

    fn day_cells(&mut self) -> &mut [Self::Cell];
}

/// Read the coloring keys and annotate the host's cells once.
pub async fn annotate_once<S, H, T>(
    store: &S,
    host: &mut H,
    annotator: &Annotator<T>,
) -> DayTintResult<ApplyStats>
where
    S: SettingsStore,
    H: CalendarHost,
    T: ThemeSignal,
{
    let document = load_document(store, &SettingsKey::COLORING).await?;
    let rules = ColorRules::from_document(&document);
    Ok(annotator.apply(host.day_cells().iter_mut(), &rules))
}

/// Annotate once at startup, then again on every structural change until the
/// notification channel closes. Returns the number of passes that ran.
///
/// A pass whose settings read fails is skipped; the next notification retries.
pub async fn run_annotation_loop<S, H, T>(
    store: &S,
    host: &mut H,
    annotator: &Annotator<T>,
    mut changes: mpsc::Receiver<ChangeNotification>,
) -> usize
where
    S: SettingsStore,
    H: CalendarHost,
    T: ThemeSignal,
{
    let mut passes = 0;

    match annotate_once(store, host, annotator).await {
        Ok(_) => passes += 1,
        Err(err) => log::warn!("Initial annotation skipped: {}", err),
    }

    while let Some(change) = changes.recv().await {
        if !change.is_structural() {
            continue;
        }

        match annotate_once(store, host, annotator).await {
            Ok(_) => passes += 1,
            Err(err) => log::warn!("Annotation after {:?} skipped: {}", change, err),
        }
    }

    log::debug!("Change feed closed after {} annotation passes", passes);
    passes
}

/// In-memory calendar page holding detached cells.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    cells: Vec<MemoryCell>,
}

impl MemoryHost {
    pub fn new(cells: Vec<MemoryCell>) -> Self {
        Self { cells }
    }

    /// One cell per day of the month, each carrying its packed day-key.
    pub fn month(year: i32, month: u32, day_key_attribute: &str) -> Self {
        let cells = month_days(year, month)
            .into_iter()
            .filter_map(encode_day_key)
            .map(|key| MemoryCell::new().with_attribute(day_key_attribute, key.to_string()))
            .collect();
        Self { cells }
    }

    pub fn cells(&self) -> &[MemoryCell] {
        &self.cells
    }
}

impl CalendarHost for MemoryHost {
    type Cell = MemoryCell;

    fn day_cells(&mut self) -> &mut [MemoryCell] {
        &mut self.cells
    }
}

/// Every date of the given month, empty for an invalid month.
pub fn month_days(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    first
        .iter_days()
        .take_while(|date| date.month() == month)
        .collect()
}
