//! Day cell annotation.
//!
//! Each pass derives every cell's date, resolves its color and styles or
//! reverts the cell. A marker attribute records which cells were styled here,
//! which makes passes idempotent and lets cleared rules revert cleanly.

#[allow(clippy::module_inception)]
mod annotator;
mod cell;
mod observer;
mod theme;

pub use annotator::{Annotator, AnnotatorConfig, ApplyStats};
pub use cell::{DayCell, MemoryCell, StyleProperty};
pub use observer::{
    annotate_once, month_days, run_annotation_loop, CalendarHost, ChangeNotification, MemoryHost,
};
pub use theme::{FixedTheme, SystemTheme, ThemeSignal};
