//! Periodic alarm scanner
//!
//! ```text
//!        tick(now)                 scan done
//!  Idle ───────────► Scanning ─────────────► Idle
//! ```
//!
//! Each scan rings every alarm due at the current weekday, hour and
//! minute, in list order, then auto-snoozes it while its snooze count is
//! below the configured maximum. Auto-snooze uses a fixed duration and
//! never waits for input. Only one scan runs per calendar minute; extra
//! ticks inside an already scanned minute are skipped. The run loop never
//! sleeps past the next minute boundary, so every minute gets a scan.

use std::thread;
use std::time::Duration;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike};

use crate::clock::AlarmClock;
use crate::error::{ChimeError, Result};
use crate::models::Weekday;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Scanning,
}

/// How rung alarms get snoozed automatically
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnoozePolicy {
    /// Minutes to push a rung alarm forward by
    pub minutes: u32,
    /// Alarms stop auto-snoozing once their count reaches this
    pub max_count: u32,
}

impl SnoozePolicy {
    pub fn should_snooze(&self, snooze_count: u32) -> bool {
        snooze_count < self.max_count
    }
}

/// What a single tick did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// The tick fell inside a minute that was already scanned
    pub skipped: bool,
    pub rung: Vec<u64>,
    pub snoozed: Vec<u64>,
}

#[derive(Debug)]
pub struct Scheduler {
    policy: SnoozePolicy,
    state: SchedulerState,
    last_scanned: Option<(NaiveDate, u32, u32)>,
}

impl Scheduler {
    pub fn new(policy: SnoozePolicy) -> Self {
        Self {
            policy,
            state: SchedulerState::Idle,
            last_scanned: None,
        }
    }

    /// Run one scan against `now`
    pub fn tick(&mut self, clock: &mut AlarmClock, now: NaiveDateTime) -> Result<ScanReport> {
        let minute_key = (now.date(), now.hour(), now.minute());
        if self.last_scanned == Some(minute_key) {
            tracing::debug!(%now, "minute already scanned, skipping tick");
            return Ok(ScanReport {
                skipped: true,
                ..ScanReport::default()
            });
        }
        self.last_scanned = Some(minute_key);

        self.state = SchedulerState::Scanning;
        let result = self.scan(clock, now);
        self.state = SchedulerState::Idle;
        result
    }

    fn scan(&self, clock: &mut AlarmClock, now: NaiveDateTime) -> Result<ScanReport> {
        let weekday = Weekday::from(now.weekday());
        let (hour, minute) = (now.hour() as u8, now.minute() as u8);
        tracing::debug!(state = ?self.state, %weekday, hour, minute, "scanning alarms");

        let due: Vec<_> = clock
            .alarms()
            .iter()
            .filter(|alarm| alarm.is_due(weekday, hour, minute))
            .cloned()
            .collect();

        let mut report = ScanReport::default();
        for alarm in due {
            clock.ring_alarm_bell(&alarm);
            report.rung.push(alarm.id);

            if !self.policy.should_snooze(alarm.snooze_count) {
                tracing::info!(
                    id = alarm.id,
                    snooze_count = alarm.snooze_count,
                    "snooze limit reached"
                );
                continue;
            }

            match clock.snooze_alarm(alarm.id, self.policy.minutes) {
                Ok(_) => report.snoozed.push(alarm.id),
                Err(e @ ChimeError::DuplicateAlarm { .. }) => {
                    tracing::warn!(id = alarm.id, error = %e, "cannot auto-snooze alarm");
                }
                Err(e) => return Err(e),
            }
        }

        Ok(report)
    }

    /// Scan every `interval`, woken early at each minute boundary, until
    /// the process is stopped
    pub fn run(&mut self, clock: &mut AlarmClock, interval: Duration) -> ! {
        tracing::info!(interval_secs = interval.as_secs(), "scheduler started");
        loop {
            let now = Local::now().naive_local();
            match self.tick(clock, now) {
                Ok(report) if report.skipped => {}
                Ok(report) if !report.rung.is_empty() => {
                    tracing::info!(rung = ?report.rung, snoozed = ?report.snoozed, "scan finished");
                }
                Ok(_) => {}
                Err(e) => tracing::error!(error = %e, "scan failed"),
            }
            thread::sleep(sleep_until_next_scan(Local::now().naive_local(), interval));
        }
    }
}

/// Time to wait after `now`: `interval`, cut short at the next minute boundary
pub fn sleep_until_next_scan(now: NaiveDateTime, interval: Duration) -> Duration {
    // nanosecond() exceeds 1e9 during a leap second
    let into_minute = Duration::from_secs(u64::from(now.second()))
        + Duration::from_nanos(u64::from(now.nanosecond() % 1_000_000_000));
    Duration::from_secs(60)
        .saturating_sub(into_minute)
        .min(interval)
}
