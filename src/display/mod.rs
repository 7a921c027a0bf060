//! Terminal display module
//!
//! Renders the alarm table, styled when stdout is a colour terminal.

mod formatter;
mod terminal;

pub use formatter::{alarm_table, print_markdown, NO_ALARMS};
