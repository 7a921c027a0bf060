use std::io::Write;
use std::thread;
use std::time::Duration;

use chrono::Local;

use crate::error::Result;

const TIME_FORMAT: &str = "%d %b %Y %H:%M:%S";

/// Redraw the current time once per second until interrupted
pub fn show() -> Result<()> {
    let mut stdout = std::io::stdout();
    loop {
        write!(
            stdout,
            "\rCurrent Time: {}",
            Local::now().format(TIME_FORMAT)
        )?;
        stdout.flush()?;
        thread::sleep(Duration::from_secs(1));
    }
}
