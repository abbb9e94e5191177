//! Color resolution for a single day.
//!
//! An enabled calendar's event on the day beats the weekday rule; among
//! events the first in load order wins.

mod resolver;

pub use resolver::{resolve, ColorRules};
