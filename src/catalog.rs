// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The solcal contributors

//! The per-body calendar table.
//!
//! [`Catalog`] maps every [`Body`] to its [`CalendarDefinition`]. The
//! built-in table is materialized lazily, validated once, and shared
//! read-only for the life of the process; any number of conversions may
//! read it concurrently. Rebasing a body onto a different reference epoch
//! produces a fresh validated table (see [`Catalog::with_epoch`]) — epochs
//! are never mutated in place, so no conversion can observe a torn
//! definition.

use crate::body::Body;
use crate::calendar::{CalendarDefinition, YearLength};
use crate::error::{Error, Result};
use crate::reading::Reading;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

/// Unix timestamp of the shared reference instant, 2025-01-01T00:00:00 UTC.
///
/// Every built-in body's reference epoch is pinned to this one real
/// instant, so all elapsed-seconds axes share their zero and cross-body
/// alignment needs no pairwise constants.
pub const REFERENCE_TIMESTAMP: i64 = 1_735_689_600;

/// Built-in definitions, in [`Body::ALL`] order.
///
/// Idealized per-body constants: sols of 86 400, 88 800, 27 540, and
/// 37 800 seconds, years of 365, 668, 1000, and 1000 days. The Mars sol
/// factors into 24 hours of 50 minutes × 74 seconds; its epoch reading
/// (`0/01 01:04:03`) is the Mars clock at the shared instant.
const BUILTIN: [CalendarDefinition; 4] = [
    // Earth
    CalendarDefinition {
        seconds_per_minute: 60,
        minutes_per_hour: 60,
        hours_per_day: 24,
        days_per_year: YearLength::whole(365),
        epoch: Reading::new(2025, 1, 0, 0, 0),
        epoch_offset: 0,
    },
    // Mars
    CalendarDefinition {
        seconds_per_minute: 74,
        minutes_per_hour: 50,
        hours_per_day: 24,
        days_per_year: YearLength::whole(668),
        epoch: Reading::new(0, 1, 1, 4, 3),
        epoch_offset: 0,
    },
    // Phobos
    CalendarDefinition {
        seconds_per_minute: 60,
        minutes_per_hour: 51,
        hours_per_day: 9,
        days_per_year: YearLength::whole(1000),
        epoch: Reading::new(0, 1, 0, 0, 0),
        epoch_offset: 0,
    },
    // Saturn
    CalendarDefinition {
        seconds_per_minute: 60,
        minutes_per_hour: 63,
        hours_per_day: 10,
        days_per_year: YearLength::whole(1000),
        epoch: Reading::new(0, 1, 0, 0, 0),
        epoch_offset: 0,
    },
];

static BUILTIN_CATALOG: Lazy<Catalog> =
    Lazy::new(|| Catalog::new(BUILTIN).expect("built-in calendar table is internally consistent"));

/// An immutable, validated table of one [`CalendarDefinition`] per [`Body`].
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    calendars: [CalendarDefinition; Body::ALL.len()],
}

impl Catalog {
    /// The built-in table, validated on first use.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN_CATALOG
    }

    /// Build a table from explicit definitions (in [`Body::ALL`] order),
    /// validating each one.
    pub fn new(calendars: [CalendarDefinition; Body::ALL.len()]) -> Result<Self> {
        for calendar in &calendars {
            calendar.validate()?;
        }
        Ok(Self { calendars })
    }

    /// Look up a body's calendar. Pure and infallible: the body set is
    /// closed and the table always holds every body.
    #[inline]
    pub fn calendar(&self, body: Body) -> &CalendarDefinition {
        &self.calendars[body.index()]
    }

    /// A copy of this table with one body rebased onto a different
    /// reference epoch.
    ///
    /// `epoch` is the body's reading at longitude 0 at the new epoch
    /// instant, and `epoch_offset` places that instant relative to the
    /// shared reference instant. The result is validated as a whole; the
    /// original table is untouched.
    pub fn with_epoch(&self, body: Body, epoch: Reading, epoch_offset: i64) -> Result<Self> {
        let mut calendars = self.calendars;
        calendars[body.index()].epoch = epoch;
        calendars[body.index()].epoch_offset = epoch_offset;
        Self::new(calendars)
    }

    /// The shared reference instant as a UTC timestamp.
    pub fn reference_instant() -> DateTime<Utc> {
        DateTime::from_timestamp(REFERENCE_TIMESTAMP, 0)
            .expect("reference instant is within chrono's range")
    }

    /// Earth's reading at longitude 0 for a real UTC instant.
    ///
    /// Sub-second precision is dropped: the calendar model counts whole
    /// seconds.
    pub fn earth_reading_from_utc(&self, instant: DateTime<Utc>) -> Reading {
        let elapsed = instant.timestamp() - REFERENCE_TIMESTAMP;
        self.calendar(Body::Earth).from_elapsed(elapsed.into())
    }

    /// The real UTC instant of an Earth reading at longitude 0.
    ///
    /// Fails with [`Error::InvalidReading`] on out-of-range fields, or
    /// [`Error::UtcOutOfRange`] if the instant cannot be represented by
    /// `chrono`.
    pub fn earth_reading_to_utc(&self, reading: &Reading) -> Result<DateTime<Utc>> {
        let elapsed = self.calendar(Body::Earth).to_elapsed(reading)?;
        REFERENCE_TIMESTAMP
            .checked_add(elapsed.value())
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .ok_or(Error::UtcOutOfRange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn builtin_table_is_valid() {
        for body in Body::ALL {
            Catalog::builtin().calendar(body).validate().unwrap();
        }
    }

    #[test]
    fn builtin_sol_lengths_match_the_modeled_service() {
        let expected = [
            (Body::Earth, 86_400),
            (Body::Mars, 88_800),
            (Body::Phobos, 27_540),
            (Body::Saturn, 37_800),
        ];
        for (body, sol) in expected {
            assert_eq!(
                Catalog::builtin().calendar(body).seconds_per_day(),
                sol,
                "{body}"
            );
        }
    }

    #[test]
    fn reference_instant_is_2025_01_01() {
        let expected = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(Catalog::reference_instant(), expected);
    }

    #[test]
    fn earth_reading_from_utc_at_reference_is_the_epoch() {
        let catalog = Catalog::builtin();
        let r = catalog.earth_reading_from_utc(Catalog::reference_instant());
        assert_eq!(r, catalog.calendar(Body::Earth).epoch);
    }

    #[test]
    fn earth_utc_roundtrip() {
        let catalog = Catalog::builtin();
        let instant = Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap();
        let reading = catalog.earth_reading_from_utc(instant);
        assert_eq!(catalog.earth_reading_to_utc(&reading).unwrap(), instant);
    }

    #[test]
    fn earth_reading_to_utc_rejects_invalid_reading() {
        let catalog = Catalog::builtin();
        let err = catalog
            .earth_reading_to_utc(&Reading::new(2025, 1, 25, 0, 0))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidReading { field: "hour", .. }));
    }

    #[test]
    fn with_epoch_rebuilds_without_mutating_the_original() {
        let catalog = Catalog::builtin();
        let rebased = catalog
            .with_epoch(Body::Saturn, Reading::new(1, 1, 0, 0, 0), 37_800)
            .unwrap();
        assert_eq!(rebased.calendar(Body::Saturn).epoch_offset, 37_800);
        assert_eq!(catalog.calendar(Body::Saturn).epoch_offset, 0);
    }

    #[test]
    fn with_epoch_rejects_invalid_epoch_reading() {
        let err = Catalog::builtin()
            .with_epoch(Body::Saturn, Reading::new(0, 1, 10, 0, 0), 0)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidReading { field: "hour", .. }));
    }
}
