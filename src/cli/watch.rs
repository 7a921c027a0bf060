use std::time::Duration;

use chrono::Local;

use crate::cli::Context;
use crate::error::Result;
use crate::scheduler::{Scheduler, SnoozePolicy};

/// Watch for due alarms, or scan a single time with `once`
pub fn run(ctx: &Context, once: bool) -> Result<()> {
    let mut clock = ctx.open_clock()?;
    let mut scheduler = Scheduler::new(SnoozePolicy::from(&ctx.config.snooze));

    if !once {
        println!(
            "Watching {} alarm(s). Press Ctrl+C to stop.",
            clock.alarms().len()
        );
        let interval = Duration::from_secs(ctx.config.scheduler.tick_seconds);
        scheduler.run(&mut clock, interval);
    }

    let report = scheduler.tick(&mut clock, Local::now().naive_local())?;
    if report.rung.is_empty() {
        println!("No alarms due.");
    } else {
        println!(
            "Rang {} alarm(s), snoozed {}.",
            report.rung.len(),
            report.snoozed.len()
        );
    }

    Ok(())
}
