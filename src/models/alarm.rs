use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::weekday::Weekday;
use crate::error::{ChimeError, Result};

const MINUTES_PER_DAY: u64 = 24 * 60;

/// A weekly alarm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Alarm {
    /// Stable identifier, unaffected by deleting other alarms
    pub id: u64,
    /// Minute of the hour (0-59)
    pub minute: u8,
    /// Hour of the day (0-23)
    pub hour: u8,
    /// Day of the week the alarm rings on
    pub weekday: Weekday,
    /// Number of times this alarm has been snoozed
    pub snooze_count: u32,
}

impl Alarm {
    /// Create a fresh alarm, rejecting out-of-range times
    pub fn new(id: u64, weekday: Weekday, hour: u8, minute: u8) -> Result<Self> {
        let alarm = Self {
            id,
            minute,
            hour,
            weekday,
            snooze_count: 0,
        };
        alarm.validate()?;
        Ok(alarm)
    }

    pub fn validate(&self) -> Result<()> {
        if self.hour > 23 {
            return Err(ChimeError::Validation(format!(
                "hour must be between 0 and 23, got {}",
                self.hour
            )));
        }
        if self.minute > 59 {
            return Err(ChimeError::Validation(format!(
                "minute must be between 0 and 59, got {}",
                self.minute
            )));
        }
        Ok(())
    }

    /// Whether this alarm is due at the given weekday and time
    pub fn is_due(&self, weekday: Weekday, hour: u8, minute: u8) -> bool {
        self.weekday == weekday && self.hour == hour && self.minute == minute
    }

    /// Whether two alarms occupy the same weekly slot
    pub fn same_slot(&self, other: &Alarm) -> bool {
        other.is_due(self.weekday, self.hour, self.minute)
    }

    /// Time of day formatted as `HH:MM`
    pub fn time_label(&self) -> String {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| format!("{:02}:{:02}", self.hour, self.minute))
    }

    /// Push the alarm forward by `minutes` and bump the snooze counter.
    ///
    /// Minutes roll into hours and hours wrap at midnight. The weekday
    /// stays put, so a Monday 23:55 alarm snoozed by 10 minutes becomes
    /// Monday 00:05.
    pub fn snooze(&mut self, minutes: u32) {
        let total = u64::from(self.hour) * 60 + u64::from(self.minute) + u64::from(minutes);
        let total = total % MINUTES_PER_DAY;
        self.hour = (total / 60) as u8;
        self.minute = (total % 60) as u8;
        self.snooze_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alarm(weekday: Weekday, hour: u8, minute: u8) -> Alarm {
        Alarm::new(1, weekday, hour, minute).unwrap()
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Alarm::new(1, Weekday::Monday, 24, 0).is_err());
        assert!(Alarm::new(1, Weekday::Monday, 0, 60).is_err());
        assert!(Alarm::new(1, Weekday::Monday, 23, 59).is_ok());
        assert!(Alarm::new(1, Weekday::Monday, 0, 0).is_ok());
    }

    #[test]
    fn test_snooze_within_hour() {
        let mut a = alarm(Weekday::Monday, 7, 30);
        a.snooze(5);
        assert_eq!((a.hour, a.minute, a.snooze_count), (7, 35, 1));
    }

    #[test]
    fn test_snooze_rolls_minutes_into_hours() {
        let mut a = alarm(Weekday::Monday, 7, 58);
        a.snooze(5);
        assert_eq!((a.hour, a.minute), (8, 3));
    }

    #[test]
    fn test_snooze_past_midnight_keeps_weekday() {
        let mut a = alarm(Weekday::Monday, 23, 55);
        a.snooze(10);
        assert_eq!((a.hour, a.minute), (0, 5));
        assert_eq!(a.weekday, Weekday::Monday);
        assert_eq!(a.snooze_count, 1);
    }

    #[test]
    fn test_snooze_longer_than_a_day_wraps() {
        let mut a = alarm(Weekday::Friday, 6, 0);
        a.snooze(24 * 60 + 15);
        assert_eq!((a.hour, a.minute), (6, 15));
    }

    #[test]
    fn test_time_label_pads() {
        assert_eq!(alarm(Weekday::Sunday, 7, 5).time_label(), "07:05");
        assert_eq!(alarm(Weekday::Sunday, 23, 59).time_label(), "23:59");
    }

    #[test]
    fn test_json_field_names() {
        let a = alarm(Weekday::Monday, 7, 30);
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["snoozeCount"], 0);
        assert_eq!(json["weekday"], "Monday");
        assert_eq!(json["hour"], 7);
        assert_eq!(json["minute"], 30);
    }

    #[test]
    fn test_json_rejects_unknown_field() {
        let json = r#"{"id":1,"minute":30,"hour":7,"weekday":"Monday","snoozeCount":0,"label":"x"}"#;
        assert!(serde_json::from_str::<Alarm>(json).is_err());
    }

    #[test]
    fn test_json_rejects_missing_field() {
        let json = r#"{"id":1,"minute":30,"hour":7,"weekday":"Monday"}"#;
        assert!(serde_json::from_str::<Alarm>(json).is_err());
    }

    #[test]
    fn test_same_slot_ignores_id_and_snooze_count() {
        let a = alarm(Weekday::Tuesday, 9, 0);
        let mut b = Alarm::new(2, Weekday::Tuesday, 9, 0).unwrap();
        b.snooze_count = 2;
        assert!(a.same_slot(&b));
        assert!(!a.same_slot(&alarm(Weekday::Wednesday, 9, 0)));
    }
}
