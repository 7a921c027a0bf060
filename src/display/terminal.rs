//! Colour support detection

use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Rich,
    Plain,
}

impl ColorMode {
    /// Decide from the environment and whether stdout is a terminal
    pub fn detect() -> Self {
        Self::decide(
            env::var_os("NO_COLOR").is_some(),
            env::var("CLICOLOR_FORCE").ok().as_deref(),
            env::var("CLICOLOR").ok().as_deref(),
            std::io::stdout().is_terminal(),
        )
    }

    /// NO_COLOR wins over everything (https://no-color.org/), then
    /// CLICOLOR_FORCE, then CLICOLOR=0, then TTY detection.
    fn decide(
        no_color: bool,
        clicolor_force: Option<&str>,
        clicolor: Option<&str>,
        is_tty: bool,
    ) -> Self {
        if no_color {
            return Self::Plain;
        }
        if clicolor_force.is_some_and(|v| v != "0") {
            return Self::Rich;
        }
        if clicolor == Some("0") || !is_tty {
            return Self::Plain;
        }
        Self::Rich
    }
}
