//! Alarm table rendering using termimad

use termimad::crossterm::style::{Attribute, Color};
use termimad::MadSkin;

use crate::clock::AlarmListing;
use crate::display::terminal::ColorMode;

/// Shown instead of an empty table
pub const NO_ALARMS: &str = "No alarms set.";

/// Render the alarm list as a markdown table
pub fn alarm_table(listing: &AlarmListing<'_>) -> String {
    let mut out = String::from("| id | weekday | time |\n|---:|:---|:---:|\n");
    for row in listing.rows() {
        out.push_str(&format!("| {} | {} | {} |\n", row.id, row.weekday, row.time));
    }
    out
}

/// Print markdown, styled when the terminal supports it
pub fn print_markdown(markdown: &str) {
    match ColorMode::detect() {
        ColorMode::Rich => skin().print_text(markdown),
        ColorMode::Plain => print!("{}", markdown),
    }
}

fn skin() -> MadSkin {
    let mut skin = MadSkin::default();
    skin.table.set_fg(Color::White);
    skin.bold.set_fg(Color::Yellow);
    skin.bold.add_attr(Attribute::Bold);
    skin.inline_code.set_fg(Color::Cyan);
    skin
}
