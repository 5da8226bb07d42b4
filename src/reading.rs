// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The solcal contributors

//! Structured calendar readings.

use crate::calendar::CalendarDefinition;
use crate::error::{Error, Result};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A structured point in time on one body's calendar.
///
/// A `Reading` is meaningless on its own: all field bounds are relative to
/// the owning body's [`CalendarDefinition`], so callers must carry the
/// `(Body, Reading)` pair together.
///
/// `day_of_year` is 1-indexed. Years may be negative: an instant before
/// year zero of a calendar decomposes to a negative year (see
/// [`CalendarDefinition::from_elapsed`]), and such readings validate and
/// convert like any other. The year magnitude is capped per calendar
/// ([`CalendarDefinition::max_year`]) so elapsed-seconds arithmetic stays
/// within `i64`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reading {
    pub year: i64,
    pub day_of_year: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
}

impl Reading {
    /// Create a reading. Bounds are checked against a calendar by
    /// [`Reading::validate`], not here.
    pub const fn new(year: i64, day_of_year: i64, hour: i64, minute: i64, second: i64) -> Self {
        Self {
            year,
            day_of_year,
            hour,
            minute,
            second,
        }
    }

    /// Check every field against the calendar's valid ranges.
    ///
    /// The `day_of_year` bound is year-dependent when the calendar's
    /// [`YearLength`](crate::calendar::YearLength) is fractional.
    pub fn validate(&self, calendar: &CalendarDefinition) -> Result<()> {
        let max_year = calendar.max_year();
        if self.year < -max_year || self.year > max_year {
            return Err(Error::InvalidReading {
                field: "year",
                value: self.year,
                min: -max_year,
                max: max_year,
            });
        }
        let days_in_year = calendar.days_per_year.days_in_year(self.year);
        if self.day_of_year < 1 || self.day_of_year > days_in_year {
            return Err(Error::InvalidReading {
                field: "day_of_year",
                value: self.day_of_year,
                min: 1,
                max: days_in_year,
            });
        }
        if self.hour < 0 || self.hour >= calendar.hours_per_day {
            return Err(Error::InvalidReading {
                field: "hour",
                value: self.hour,
                min: 0,
                max: calendar.hours_per_day - 1,
            });
        }
        if self.minute < 0 || self.minute >= calendar.minutes_per_hour {
            return Err(Error::InvalidReading {
                field: "minute",
                value: self.minute,
                min: 0,
                max: calendar.minutes_per_hour - 1,
            });
        }
        if self.second < 0 || self.second >= calendar.seconds_per_minute {
            return Err(Error::InvalidReading {
                field: "second",
                value: self.second,
                min: 0,
                max: calendar.seconds_per_minute - 1,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Reading {
    /// `Y/DD HH:MM:SS` — the year/day-of-year wire format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{:02} {:02}:{:02}:{:02}",
            self.year, self.day_of_year, self.hour, self.minute, self.second
        )
    }
}
