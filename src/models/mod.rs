// Module exports for models

pub mod calendar;
pub mod event;
pub mod settings;
