//! Data models module
//!
//! Defines the persisted alarm record and the weekday it rings on.

pub mod alarm;
pub mod weekday;

pub use alarm::Alarm;
pub use weekday::Weekday;
