// Service module exports

pub mod annotator;
pub mod coloring;
pub mod icalendar;
pub mod settings;
