// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The solcal contributors

//! Per-body calendar definitions.
//!
//! A [`CalendarDefinition`] is pure data: the clock radix (seconds per
//! minute, minutes per hour, hours per day), the year length in days, and
//! the body's reference epoch. All conversion algorithms are generic over
//! this data, so supporting a new body never touches the algorithms.

use crate::error::{Error, Result};
use crate::reading::Reading;
use qtty::{Days, Seconds};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// YearLength
// ---------------------------------------------------------------------------

/// Year length as an exact rational number of days, `num / den`.
///
/// Year boundaries fall at `floor(year × num / den)` whole days, so a
/// fractional year length distributes its remainder across years the way
/// leap days do, and the structured↔linear conversions stay exact integer
/// arithmetic with no long-term drift. Individual years therefore contain
/// either `floor(num/den)` or `ceil(num/den)` days.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct YearLength {
    num: i64,
    den: i64,
}

impl YearLength {
    /// A whole number of days per year.
    pub const fn whole(days: i64) -> Self {
        Self { num: days, den: 1 }
    }

    /// A fractional number of days per year, `num / den`.
    ///
    /// Both terms must be positive; checked by
    /// [`CalendarDefinition::validate`].
    pub const fn ratio(num: i64, den: i64) -> Self {
        Self { num, den }
    }

    /// Number of whole days strictly before `year` begins, counted from
    /// day 0 of year 0. Negative years are counted backwards with the same
    /// floor boundary rule. Clamps to the `i64` range at the extremes.
    pub fn days_before_year(&self, year: i64) -> i64 {
        clamp_i64(self.days_before_year_wide(year as i128))
    }

    /// Number of whole days in `year`.
    pub fn days_in_year(&self, year: i64) -> i64 {
        let year = year as i128;
        (self.days_before_year_wide(year + 1) - self.days_before_year_wide(year)) as i64
    }

    /// Largest number of days any single year can contain, `ceil(num/den)`.
    pub fn max_days_in_year(&self) -> i64 {
        (self.num + self.den - 1) / self.den
    }

    /// The year containing absolute day index `day` (day 0 = first day of
    /// year 0). Inverse of [`YearLength::days_before_year`]. Clamps to the
    /// `i64` range at the extremes.
    pub fn year_of_day(&self, day: i64) -> i64 {
        clamp_i64(self.year_of_day_wide(day as i128))
    }

    pub(crate) fn days_before_year_wide(&self, year: i128) -> i128 {
        (year * self.num as i128).div_euclid(self.den as i128)
    }

    pub(crate) fn year_of_day_wide(&self, day: i128) -> i128 {
        // Largest y with floor(y·num/den) ≤ day.
        ((day + 1) * self.den as i128 - 1).div_euclid(self.num as i128)
    }

    /// Approximate year length as a continuous quantity.
    pub fn approx_days(&self) -> Days {
        Days::new(self.num as f64 / self.den as f64)
    }

    fn validate(&self) -> Result<()> {
        if self.num <= 0 || self.den <= 0 || self.num < self.den {
            // Surfaced as a days_per_year bound violation: at least one
            // whole day per year.
            return Err(Error::InvalidReading {
                field: "days_per_year",
                value: if self.den == 0 { 0 } else { self.num / self.den },
                min: 1,
                max: i64::MAX,
            });
        }
        Ok(())
    }
}

/// Saturating `i128 → i64` cast.
pub(crate) fn clamp_i64(value: i128) -> i64 {
    value.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

// ---------------------------------------------------------------------------
// CalendarDefinition
// ---------------------------------------------------------------------------

/// The calendar and clock of one celestial body.
///
/// Immutable once constructed; built once per process inside a
/// [`Catalog`](crate::catalog::Catalog) and shared read-only after that.
///
/// `epoch` is the body's reading at longitude 0 at its epoch instant, and
/// `epoch_offset` places that instant on the shared real-time axis: it is
/// the signed number of seconds from the catalog's shared reference instant
/// to this body's epoch instant. Storing the alignment per body against one
/// shared instant keeps cross-body alignment O(n) in the number of bodies.
/// Every built-in body uses `epoch_offset = 0`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarDefinition {
    pub seconds_per_minute: i64,
    pub minutes_per_hour: i64,
    pub hours_per_day: i64,
    pub days_per_year: YearLength,
    pub epoch: Reading,
    pub epoch_offset: i64,
}

impl CalendarDefinition {
    /// Length of this body's day in seconds.
    #[inline]
    pub const fn seconds_per_day(&self) -> i64 {
        self.seconds_per_minute * self.minutes_per_hour * self.hours_per_day
    }

    /// Length of this body's day as a continuous quantity.
    #[inline]
    pub fn day_length(&self) -> Seconds {
        Seconds::new(self.seconds_per_day() as f64)
    }

    /// Largest year magnitude a valid [`Reading`] may carry.
    ///
    /// Chosen so the mixed-radix second count of any in-bounds reading
    /// stays below `i64::MAX / 4`, leaving headroom for the subtraction of
    /// the epoch baseline in
    /// [`to_elapsed`](CalendarDefinition::to_elapsed). For the built-in
    /// bodies this is tens of billions of years.
    pub fn max_year(&self) -> i64 {
        let seconds_per_year = self.seconds_per_day() as i128
            * (self.days_per_year.max_days_in_year() as i128 + 1);
        ((i64::MAX as i128 / 4) / seconds_per_year) as i64
    }

    /// Check internal consistency: positive radix constants, a valid year
    /// length, and an epoch reading within its own bounds.
    ///
    /// Run once when a [`Catalog`](crate::catalog::Catalog) is built, never
    /// per request.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("seconds_per_minute", self.seconds_per_minute),
            ("minutes_per_hour", self.minutes_per_hour),
            ("hours_per_day", self.hours_per_day),
        ] {
            if value <= 0 {
                return Err(Error::InvalidReading {
                    field,
                    value,
                    min: 1,
                    max: i64::MAX,
                });
            }
        }
        self.days_per_year.validate()?;
        self.epoch.validate(self)
    }
}
