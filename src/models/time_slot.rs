//! Service-day time and time slot models.
//!
//! # Time Model
//! Times are whole minutes since the midnight that opens the service day.
//! Values past 24:00 denote service after midnight (`25:10` is 01:10 on the
//! next calendar day), so a late slot keeps `start < end`.
//!
//! # Overlap
//! Slot overlap is boundary-inclusive: two slots that touch
//! (`a.end == b.start`) are considered overlapping.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minutes in a calendar day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A point in the service day, in minutes since service-day midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceTime(u32);

impl ServiceTime {
    /// Creates a time from raw minutes.
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Creates a time from hours and minutes (hours may exceed 23).
    pub const fn hm(hours: u32, minutes: u32) -> Self {
        Self(hours * 60 + minutes)
    }

    /// Raw minutes since service-day midnight.
    #[inline]
    pub const fn minutes(self) -> u32 {
        self.0
    }

    /// Wall-clock minute of the day (0..1440), wrapping past midnight.
    #[inline]
    pub const fn minute_of_day(self) -> u32 {
        self.0 % MINUTES_PER_DAY
    }

    /// This time shifted forward.
    #[inline]
    pub const fn plus_minutes(self, minutes: u32) -> Self {
        Self(self.0 + minutes)
    }

    /// Minutes from `self` until `later` (0 if `later` is not after `self`).
    #[inline]
    pub const fn minutes_until(self, later: Self) -> u32 {
        later.0.saturating_sub(self.0)
    }
}

impl fmt::Display for ServiceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// A timetabled service interval on a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Departure time.
    pub start: ServiceTime,
    /// Arrival time. Must be after `start`.
    pub end: ServiceTime,
    /// Whether the slot starts inside a peak-hour window.
    pub is_peak: bool,
}

impl TimeSlot {
    /// Creates a new slot.
    ///
    /// Does not check `start < end`; see [`crate::validation::validate_input`].
    pub fn new(start: ServiceTime, end: ServiceTime, is_peak: bool) -> Self {
        Self {
            start,
            end,
            is_peak,
        }
    }

    /// Slot length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.start.minutes_until(self.end)
    }

    /// Whether `start < end`.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    /// Inclusive overlap test.
    ///
    /// Returns `false` only when one slot ends strictly before the other
    /// starts, so touching endpoints overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.end < other.start || self.start > other.end)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
