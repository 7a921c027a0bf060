//! Alarm clock
//!
//! Owns the in-memory alarm list and keeps it in sync with the store.
//! Every mutation is written to disk before the in-memory list changes,
//! so a failed write leaves both untouched.

use std::path::PathBuf;

use crate::error::{ChimeError, Result};
use crate::models::{Alarm, Weekday};
use crate::player::Player;
use crate::store::AlarmStore;

pub struct AlarmClock {
    store: AlarmStore,
    alarms: Vec<Alarm>,
    player: Box<dyn Player>,
    sound_file: PathBuf,
}

/// One displayable row of the alarm list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmRow {
    pub id: u64,
    pub weekday: Weekday,
    pub time: String,
}

/// Non-empty view over the alarms, iterable any number of times
#[derive(Debug, Clone, Copy)]
pub struct AlarmListing<'a> {
    alarms: &'a [Alarm],
}

impl<'a> AlarmListing<'a> {
    pub fn rows(&self) -> impl Iterator<Item = AlarmRow> + 'a {
        self.alarms.iter().map(|alarm| AlarmRow {
            id: alarm.id,
            weekday: alarm.weekday,
            time: alarm.time_label(),
        })
    }

    pub fn len(&self) -> usize {
        self.alarms.len()
    }
}

impl AlarmClock {
    /// Load the stored alarms and get ready to ring them through `player`
    pub fn open(store: AlarmStore, player: Box<dyn Player>, sound_file: PathBuf) -> Result<Self> {
        let alarms = store.load()?;
        Ok(Self {
            store,
            alarms,
            player,
            sound_file,
        })
    }

    pub fn alarms(&self) -> &[Alarm] {
        &self.alarms
    }

    pub fn get(&self, id: u64) -> Option<&Alarm> {
        self.alarms.iter().find(|alarm| alarm.id == id)
    }

    /// Add a new alarm and persist the list
    pub fn create_alarm(&mut self, weekday: Weekday, hour: u8, minute: u8) -> Result<&Alarm> {
        let alarm = Alarm::new(self.next_id(), weekday, hour, minute)?;

        if self.alarms.iter().any(|existing| existing.same_slot(&alarm)) {
            return Err(ChimeError::DuplicateAlarm {
                weekday,
                hour,
                minute,
            });
        }

        let mut alarms = self.alarms.clone();
        alarms.push(alarm);
        self.sync(alarms)?;

        tracing::info!(weekday = %weekday, hour, minute, "alarm created");
        let created = &self.alarms[self.alarms.len() - 1];
        Ok(created)
    }

    /// Rows for display, or `None` when there are no alarms
    pub fn list_alarms(&self) -> Option<AlarmListing<'_>> {
        if self.alarms.is_empty() {
            None
        } else {
            Some(AlarmListing {
                alarms: &self.alarms,
            })
        }
    }

    /// Remove the alarm with `id` and persist the list
    pub fn delete_alarm(&mut self, id: u64) -> Result<Alarm> {
        let index = self.position(id)?;

        let mut alarms = self.alarms.clone();
        let removed = alarms.remove(index);
        self.sync(alarms)?;

        tracing::info!(id, "alarm deleted");
        Ok(removed)
    }

    /// Push the alarm with `id` forward by `minutes` and persist the list.
    ///
    /// Fails with [`ChimeError::DuplicateAlarm`] if the new time is
    /// already taken by another alarm on the same weekday.
    pub fn snooze_alarm(&mut self, id: u64, minutes: u32) -> Result<&Alarm> {
        if minutes == 0 {
            return Err(ChimeError::Validation(
                "snooze duration must be at least one minute".to_string(),
            ));
        }
        let index = self.position(id)?;

        let mut snoozed = self.alarms[index].clone();
        snoozed.snooze(minutes);

        if self
            .alarms
            .iter()
            .any(|other| other.id != id && other.same_slot(&snoozed))
        {
            return Err(ChimeError::DuplicateAlarm {
                weekday: snoozed.weekday,
                hour: snoozed.hour,
                minute: snoozed.minute,
            });
        }

        let mut alarms = self.alarms.clone();
        alarms[index] = snoozed;
        self.sync(alarms)?;

        let alarm = &self.alarms[index];
        tracing::info!(
            id,
            minutes,
            snooze_count = alarm.snooze_count,
            time = %alarm.time_label(),
            "alarm snoozed"
        );
        Ok(alarm)
    }

    /// Announce the alarm and play the alarm sound.
    ///
    /// Playback problems are logged and swallowed so a broken audio
    /// device never stops the scheduler.
    pub fn ring_alarm_bell(&self, alarm: &Alarm) {
        tracing::info!(id = alarm.id, weekday = %alarm.weekday, time = %alarm.time_label(), "alarm ringing");
        println!(
            "Alarm {} is ringing ({} {})",
            alarm.id,
            alarm.weekday,
            alarm.time_label()
        );

        if let Err(e) = self.player.play(&self.sound_file) {
            tracing::warn!(id = alarm.id, error = %e, "could not play alarm sound");
        }
    }

    fn next_id(&self) -> u64 {
        self.alarms.iter().map(|alarm| alarm.id).max().unwrap_or(0) + 1
    }

    fn position(&self, id: u64) -> Result<usize> {
        self.alarms
            .iter()
            .position(|alarm| alarm.id == id)
            .ok_or(ChimeError::AlarmNotFound(id))
    }

    fn sync(&mut self, alarms: Vec<Alarm>) -> Result<()> {
        self.store.save(&alarms)?;
        self.alarms = alarms;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::testing::RecordingPlayer;
    use std::fs;
    use tempfile::TempDir;

    fn open_clock(temp: &TempDir, player: RecordingPlayer) -> AlarmClock {
        AlarmClock::open(
            AlarmStore::new(temp.path().join("alarms.json")),
            Box::new(player),
            temp.path().join("alarm.wav"),
        )
        .unwrap()
    }

    #[test]
    fn test_create_persists() {
        let temp = TempDir::new().unwrap();
        let mut clock = open_clock(&temp, RecordingPlayer::default());

        let created = clock.create_alarm(Weekday::Monday, 7, 30).unwrap().clone();
        assert_eq!(created.id, 1);
        assert_eq!(created.snooze_count, 0);

        let reopened = open_clock(&temp, RecordingPlayer::default());
        assert_eq!(reopened.alarms(), &[created]);
    }

    #[test]
    fn test_create_duplicate_leaves_store_unchanged() {
        let temp = TempDir::new().unwrap();
        let mut clock = open_clock(&temp, RecordingPlayer::default());
        clock.create_alarm(Weekday::Monday, 7, 30).unwrap();
        let before = fs::read_to_string(temp.path().join("alarms.json")).unwrap();

        let err = clock.create_alarm(Weekday::Monday, 7, 30).unwrap_err();

        assert!(matches!(err, ChimeError::DuplicateAlarm { .. }));
        assert_eq!(clock.alarms().len(), 1);
        let after = fs::read_to_string(temp.path().join("alarms.json")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_create_same_time_other_weekday_is_allowed() {
        let temp = TempDir::new().unwrap();
        let mut clock = open_clock(&temp, RecordingPlayer::default());
        clock.create_alarm(Weekday::Monday, 7, 30).unwrap();
        clock.create_alarm(Weekday::Tuesday, 7, 30).unwrap();
        assert_eq!(clock.alarms().len(), 2);
    }

    #[test]
    fn test_create_rejects_out_of_range() {
        let temp = TempDir::new().unwrap();
        let mut clock = open_clock(&temp, RecordingPlayer::default());
        assert!(matches!(
            clock.create_alarm(Weekday::Monday, 24, 0),
            Err(ChimeError::Validation(_))
        ));
        assert!(!temp.path().join("alarms.json").exists());
    }

    #[test]
    fn test_list_empty_is_none() {
        let temp = TempDir::new().unwrap();
        let clock = open_clock(&temp, RecordingPlayer::default());
        assert!(clock.list_alarms().is_none());
    }

    #[test]
    fn test_listing_is_restartable() {
        let temp = TempDir::new().unwrap();
        let mut clock = open_clock(&temp, RecordingPlayer::default());
        clock.create_alarm(Weekday::Monday, 7, 5).unwrap();
        clock.create_alarm(Weekday::Friday, 18, 0).unwrap();

        let listing = clock.list_alarms().unwrap();
        let first: Vec<_> = listing.rows().collect();
        let second: Vec<_> = listing.rows().collect();

        assert_eq!(first, second);
        assert_eq!(listing.len(), 2);
        assert_eq!(
            first[0],
            AlarmRow {
                id: 1,
                weekday: Weekday::Monday,
                time: "07:05".to_string()
            }
        );
    }

    #[test]
    fn test_delete_keeps_order_and_ids() {
        let temp = TempDir::new().unwrap();
        let mut clock = open_clock(&temp, RecordingPlayer::default());
        clock.create_alarm(Weekday::Monday, 7, 0).unwrap();
        clock.create_alarm(Weekday::Tuesday, 8, 0).unwrap();
        clock.create_alarm(Weekday::Wednesday, 9, 0).unwrap();

        let removed = clock.delete_alarm(2).unwrap();
        assert_eq!(removed.weekday, Weekday::Tuesday);

        let ids: Vec<u64> = clock.alarms().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let reopened = open_clock(&temp, RecordingPlayer::default());
        assert_eq!(reopened.alarms(), clock.alarms());
    }

    #[test]
    fn test_ids_not_reused_after_deleting_last() {
        let temp = TempDir::new().unwrap();
        let mut clock = open_clock(&temp, RecordingPlayer::default());
        clock.create_alarm(Weekday::Monday, 7, 0).unwrap();
        clock.create_alarm(Weekday::Monday, 8, 0).unwrap();
        clock.delete_alarm(1).unwrap();

        let created = clock.create_alarm(Weekday::Monday, 9, 0).unwrap();
        assert_eq!(created.id, 3);
    }

    #[test]
    fn test_delete_unknown_id_is_an_error() {
        let temp = TempDir::new().unwrap();
        let mut clock = open_clock(&temp, RecordingPlayer::default());
        clock.create_alarm(Weekday::Monday, 7, 0).unwrap();
        let before = fs::read_to_string(temp.path().join("alarms.json")).unwrap();

        let err = clock.delete_alarm(9).unwrap_err();

        assert!(matches!(err, ChimeError::AlarmNotFound(9)));
        let after = fs::read_to_string(temp.path().join("alarms.json")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_snooze_across_midnight() {
        let temp = TempDir::new().unwrap();
        let mut clock = open_clock(&temp, RecordingPlayer::default());
        clock.create_alarm(Weekday::Monday, 23, 55).unwrap();

        let snoozed = clock.snooze_alarm(1, 10).unwrap();

        assert_eq!((snoozed.hour, snoozed.minute), (0, 5));
        assert_eq!(snoozed.weekday, Weekday::Monday);
        assert_eq!(snoozed.snooze_count, 1);

        let reopened = open_clock(&temp, RecordingPlayer::default());
        assert_eq!(reopened.get(1).unwrap().snooze_count, 1);
    }

    #[test]
    fn test_snooze_into_taken_slot_is_rejected() {
        let temp = TempDir::new().unwrap();
        let mut clock = open_clock(&temp, RecordingPlayer::default());
        clock.create_alarm(Weekday::Monday, 7, 0).unwrap();
        clock.create_alarm(Weekday::Monday, 7, 5).unwrap();

        let err = clock.snooze_alarm(1, 5).unwrap_err();

        assert!(matches!(err, ChimeError::DuplicateAlarm { .. }));
        assert_eq!(clock.get(1).unwrap().snooze_count, 0);
    }

    #[test]
    fn test_snooze_zero_minutes_rejected() {
        let temp = TempDir::new().unwrap();
        let mut clock = open_clock(&temp, RecordingPlayer::default());
        clock.create_alarm(Weekday::Monday, 7, 0).unwrap();
        assert!(matches!(
            clock.snooze_alarm(1, 0),
            Err(ChimeError::Validation(_))
        ));
    }

    #[test]
    fn test_ring_plays_configured_sound() {
        let temp = TempDir::new().unwrap();
        let player = RecordingPlayer::default();
        let mut clock = open_clock(&temp, player.clone());
        let alarm = clock.create_alarm(Weekday::Monday, 7, 0).unwrap().clone();

        clock.ring_alarm_bell(&alarm);

        assert_eq!(*player.played.borrow(), vec![temp.path().join("alarm.wav")]);
    }

    #[test]
    fn test_ring_survives_playback_failure() {
        let temp = TempDir::new().unwrap();
        let player = RecordingPlayer::failing();
        let mut clock = open_clock(&temp, player.clone());
        let alarm = clock.create_alarm(Weekday::Monday, 7, 0).unwrap().clone();

        clock.ring_alarm_bell(&alarm);

        assert_eq!(player.count(), 1);
    }
}
