// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The solcal contributors

//! Epoch clock: structured readings ↔ linear elapsed seconds.
//!
//! [`ElapsedSeconds`] is the linear integer axis used to bridge calendars:
//! a reading is packed into the number of seconds since the owning body's
//! reference epoch (longitude 0), and unpacked back with floor division so
//! pre-epoch instants decompose into in-range clock fields.

use crate::calendar::{clamp_i64, CalendarDefinition};
use crate::error::{Error, Result};
use crate::reading::Reading;
use qtty::Seconds;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ElapsedSeconds
// ---------------------------------------------------------------------------

/// Seconds elapsed since a body's reference epoch, at longitude 0.
///
/// Signed: negative values are instants before the epoch. With every
/// built-in epoch pinned to the shared reference instant, values from
/// different bodies are directly comparable on the same real-time axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElapsedSeconds(i64);

impl ElapsedSeconds {
    /// The epoch itself.
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(seconds: i64) -> Self {
        Self(seconds)
    }

    /// The underlying signed second count.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// As a continuous quantity.
    #[inline]
    pub fn quantity(&self) -> Seconds {
        Seconds::new(self.0 as f64)
    }
}

impl fmt::Display for ElapsedSeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} s", self.0)
    }
}

impl Add<i64> for ElapsedSeconds {
    type Output = Self;
    #[inline]
    fn add(self, rhs: i64) -> Self {
        Self(self.0 + rhs)
    }
}

impl AddAssign<i64> for ElapsedSeconds {
    #[inline]
    fn add_assign(&mut self, rhs: i64) {
        self.0 += rhs;
    }
}

impl Sub<i64> for ElapsedSeconds {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: i64) -> Self {
        Self(self.0 - rhs)
    }
}

impl SubAssign<i64> for ElapsedSeconds {
    #[inline]
    fn sub_assign(&mut self, rhs: i64) {
        self.0 -= rhs;
    }
}

impl Sub for ElapsedSeconds {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Self) -> i64 {
        self.0 - rhs.0
    }
}

impl From<i64> for ElapsedSeconds {
    #[inline]
    fn from(seconds: i64) -> Self {
        Self(seconds)
    }
}

impl From<ElapsedSeconds> for i64 {
    #[inline]
    fn from(elapsed: ElapsedSeconds) -> i64 {
        elapsed.0
    }
}

// ---------------------------------------------------------------------------
// EpochClock operations
// ---------------------------------------------------------------------------

impl CalendarDefinition {
    /// Mixed-radix second count of a reading, measured from day 1 of year 0
    /// of this calendar at 00:00:00. Does not validate. Computed in `i128`
    /// so pathological field values cannot wrap.
    fn raw_seconds(&self, reading: &Reading) -> i128 {
        let day = self.days_per_year.days_before_year_wide(reading.year as i128)
            + (reading.day_of_year as i128 - 1);
        ((day * self.hours_per_day as i128 + reading.hour as i128) * self.minutes_per_hour as i128
            + reading.minute as i128)
            * self.seconds_per_minute as i128
            + reading.second as i128
    }

    /// Pack a reading into seconds since this calendar's reference epoch.
    ///
    /// The result is negative when the reading predates the epoch; both
    /// directions are values, not errors, since two bodies' epochs need not
    /// be simultaneous in general. Validation bounds the year (see
    /// [`CalendarDefinition::max_year`]) so the result always fits `i64`;
    /// the conversion is still checked rather than cast.
    pub fn to_elapsed(&self, reading: &Reading) -> Result<ElapsedSeconds> {
        reading.validate(self)?;
        let elapsed = self.raw_seconds(reading) - self.raw_seconds(&self.epoch);
        let elapsed = i64::try_from(elapsed).map_err(|_| Error::InvalidReading {
            field: "year",
            value: reading.year,
            min: -self.max_year(),
            max: self.max_year(),
        })?;
        Ok(ElapsedSeconds::new(elapsed))
    }

    /// Unpack elapsed seconds into a structured reading; exact inverse of
    /// [`CalendarDefinition::to_elapsed`].
    ///
    /// Floor division (`div_euclid`/`rem_euclid`) keeps every clock field in
    /// its valid range for negative inputs; only the year can go negative,
    /// for instants before year 0 of the calendar.
    pub fn from_elapsed(&self, elapsed: ElapsedSeconds) -> Reading {
        let total = elapsed.value() as i128 + self.raw_seconds(&self.epoch);

        let second = total.rem_euclid(self.seconds_per_minute as i128);
        let minutes = total.div_euclid(self.seconds_per_minute as i128);
        let minute = minutes.rem_euclid(self.minutes_per_hour as i128);
        let hours = minutes.div_euclid(self.minutes_per_hour as i128);
        let hour = hours.rem_euclid(self.hours_per_day as i128);
        let days = hours.div_euclid(self.hours_per_day as i128);

        let year = self.days_per_year.year_of_day_wide(days);
        let day_of_year = days - self.days_per_year.days_before_year_wide(year) + 1;

        Reading::new(
            clamp_i64(year),
            day_of_year as i64,
            hour as i64,
            minute as i64,
            second as i64,
        )
    }
}
