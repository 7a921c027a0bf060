//! Line-based interactive prompts
//!
//! Asks a question, reads one line and re-asks until the answer parses.

use std::io::{self, BufRead, Stdout, Write};

use crate::error::{ChimeError, Result};
use crate::models::Weekday;

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<io::StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Keep asking `question` until `parse` accepts the trimmed answer.
    ///
    /// Only validation failures are retried. Running out of input is an
    /// error, otherwise a closed stdin would spin forever.
    pub fn ask<T>(&mut self, question: &str, parse: impl Fn(&str) -> Result<T>) -> Result<T> {
        loop {
            write!(self.output, "{}", question)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Err(ChimeError::Io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before a valid answer was given",
                )));
            }

            match parse(line.trim()) {
                Ok(value) => return Ok(value),
                Err(ChimeError::Validation(reason)) => {
                    tracing::debug!(%reason, "rejected prompt answer");
                    writeln!(self.output, "Invalid input. Please try again.")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub fn weekday(&mut self) -> Result<Weekday> {
        self.ask("Enter weekday (e.g., Monday): ", |s| s.parse())
    }

    pub fn hour(&mut self) -> Result<u8> {
        self.ask("Enter hour (0-23): ", |s| parse_bounded(s, 0, 23, "hour"))
    }

    pub fn minute(&mut self) -> Result<u8> {
        self.ask("Enter minute (0-59): ", |s| parse_bounded(s, 0, 59, "minute"))
    }

    pub fn alarm_id(&mut self) -> Result<u64> {
        self.ask("Enter alarm id: ", |s| parse_positive(s, "alarm id"))
    }

    pub fn snooze_minutes(&mut self) -> Result<u32> {
        self.ask("Snooze for how many minutes? ", |s| {
            parse_positive(s, "snooze duration")
        })
    }
}

fn parse_bounded(input: &str, min: u8, max: u8, what: &str) -> Result<u8> {
    input
        .parse::<u8>()
        .ok()
        .filter(|value| (min..=max).contains(value))
        .ok_or_else(|| {
            ChimeError::Validation(format!(
                "{} must be a whole number between {} and {}",
                what, min, max
            ))
        })
}

fn parse_positive<T>(input: &str, what: &str) -> Result<T>
where
    T: std::str::FromStr + PartialOrd + From<u8>,
{
    input
        .parse::<T>()
        .ok()
        .filter(|value| *value >= T::from(1))
        .ok_or_else(|| ChimeError::Validation(format!("{} must be a positive whole number", what)))
}
