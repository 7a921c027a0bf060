use crate::cli::Context;
use crate::display;
use crate::error::{ChimeError, Result};
use crate::models::Weekday;
use crate::prompt::Prompt;

/// Create one alarm, prompting for whatever was not given on the command line
pub fn set(
    ctx: &Context,
    weekday: Option<Weekday>,
    hour: Option<u8>,
    minute: Option<u8>,
) -> Result<()> {
    let mut clock = ctx.open_clock()?;

    let mut prompt = Prompt::stdio();
    let weekday = match weekday {
        Some(weekday) => weekday,
        None => prompt.weekday()?,
    };
    let hour = match hour {
        Some(hour) => hour,
        None => prompt.hour()?,
    };
    let minute = match minute {
        Some(minute) => minute,
        None => prompt.minute()?,
    };

    let alarm = clock.create_alarm(weekday, hour, minute)?;
    println!(
        "Alarm {} set for {} {}",
        alarm.id,
        alarm.weekday,
        alarm.time_label()
    );

    Ok(())
}

/// Print every alarm, or a notice when there are none
pub fn list(ctx: &Context) -> Result<()> {
    let clock = ctx.open_clock()?;

    match clock.list_alarms() {
        Some(listing) => {
            tracing::debug!(count = listing.len(), "listing alarms");
            display::print_markdown(&display::alarm_table(&listing));
        }
        None => println!("{}", display::NO_ALARMS),
    }

    Ok(())
}

/// Delete one alarm by id
pub fn delete(ctx: &Context, id: Option<u64>) -> Result<()> {
    let mut clock = ctx.open_clock()?;

    let id = match id {
        Some(id) => id,
        None => Prompt::stdio().alarm_id()?,
    };

    let removed = clock.delete_alarm(id)?;
    println!(
        "Deleted alarm {} ({} {})",
        removed.id,
        removed.weekday,
        removed.time_label()
    );

    Ok(())
}

/// Snooze one alarm by hand
pub fn snooze(ctx: &Context, id: Option<u64>, minutes: Option<u32>) -> Result<()> {
    let mut clock = ctx.open_clock()?;

    let mut prompt = Prompt::stdio();
    let id = match id {
        Some(id) => id,
        None => prompt.alarm_id()?,
    };
    let current = clock.get(id).ok_or(ChimeError::AlarmNotFound(id))?;
    println!(
        "Alarm {} is set for {} {}",
        current.id,
        current.weekday,
        current.time_label()
    );
    let minutes = match minutes {
        Some(minutes) => minutes,
        None => prompt.snooze_minutes()?,
    };

    let alarm = clock.snooze_alarm(id, minutes)?;
    println!(
        "Alarm {} snoozed to {} {} (snoozed {} times)",
        alarm.id,
        alarm.weekday,
        alarm.time_label(),
        alarm.snooze_count
    );

    Ok(())
}
