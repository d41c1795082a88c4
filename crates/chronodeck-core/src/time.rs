//! Tick clock and calendar timestamps
//!
//! The dashboard runs on discrete session ticks; the drift simulation fires
//! on a fixed multiple of them. Destinations on the past-future axis are
//! calendar dates that may lie far outside any wall-clock epoch, so
//! `Timestamp` carries a signed year (year <= 0 renders as BCE).

use crate::sim::SIM_INTERVAL;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A discrete session tick (logical time unit)
pub type Tick = u64;

/// Session clock driving the drift simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    /// Current tick number
    pub tick: Tick,
    /// Ticks between drift simulation runs
    pub sim_interval: u64,
}

impl Clock {
    /// Create a new clock with the standard drift cadence
    pub fn new() -> Self {
        Self {
            tick: 0,
            sim_interval: SIM_INTERVAL,
        }
    }

    /// Create a clock with a specific drift cadence (minimum 1 tick)
    pub fn with_interval(sim_interval: u64) -> Self {
        Self {
            tick: 0,
            sim_interval: sim_interval.max(1),
        }
    }

    /// Advance to the next tick
    pub fn advance(&mut self) {
        self.tick += 1;
    }

    /// Whether the drift simulation is due on the current tick
    pub fn is_sim_tick(&self) -> bool {
        self.tick > 0 && self.tick % self.sim_interval == 0
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// A calendar date on the past-future axis
///
/// Year numbering is astronomical: year 0 is 1 BCE, year -2499 is 2500 BCE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl Timestamp {
    /// Days in each month (non-leap year)
    const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

    /// Create a new timestamp
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Check if this year is a leap year (proleptic Gregorian)
    pub fn is_leap_year(year: i32) -> bool {
        (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
    }

    /// Get days in a specific month (month must be 1-12)
    pub fn days_in_month(year: i32, month: u8) -> u8 {
        if month == 2 && Self::is_leap_year(year) {
            29
        } else {
            Self::DAYS_IN_MONTH[(month - 1) as usize]
        }
    }

    /// Whether this is a real calendar date
    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month)
            && self.day >= 1
            && self.day <= Self::days_in_month(self.year, self.month)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year <= 0 {
            // Astronomical year 0 is 1 BCE
            write!(
                f,
                "{:04}-{:02}-{:02} BCE",
                1 - self.year,
                self.month,
                self.day
            )
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_advance() {
        let mut clock = Clock::new();
        assert_eq!(clock.tick, 0);
        assert!(!clock.is_sim_tick());

        clock.advance();
        clock.advance();
        assert!(!clock.is_sim_tick());

        clock.advance();
        assert_eq!(clock.tick, 3);
        assert!(clock.is_sim_tick());
    }

    #[test]
    fn test_clock_interval_floor() {
        let clock = Clock::with_interval(0);
        assert_eq!(clock.sim_interval, 1);
    }

    #[test]
    fn test_timestamp_validity() {
        assert!(Timestamp::new(1889, 5, 6).is_valid());
        assert!(Timestamp::new(2000, 2, 29).is_valid());
        assert!(!Timestamp::new(1900, 2, 29).is_valid());
        assert!(!Timestamp::new(2025, 13, 1).is_valid());
        assert!(!Timestamp::new(2025, 0, 1).is_valid());
        assert!(!Timestamp::new(2025, 4, 31).is_valid());
    }

    #[test]
    fn test_timestamp_display() {
        assert_eq!(Timestamp::new(1889, 5, 6).to_string(), "1889-05-06");
        assert_eq!(Timestamp::new(-2499, 1, 1).to_string(), "2500-01-01 BCE");
        assert_eq!(Timestamp::new(0, 3, 15).to_string(), "0001-03-15 BCE");
    }
}
