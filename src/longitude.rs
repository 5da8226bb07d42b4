// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The solcal contributors

//! Longitude-based local-time offsets — the celestial analogue of timezones.
//!
//! # Sign convention
//!
//! Longitudes are degrees **East** of the body's prime meridian, in
//! `[-180, 180]`. A positive (eastern) longitude reads a *later* local
//! clock than the prime meridian, matching Earth timezone intuition; a
//! western longitude reads earlier. Localizing therefore *adds* the offset
//! and normalizing back to the prime meridian *subtracts* it.
//!
//! # Precision
//!
//! One degree of longitude is `seconds_per_day / 360` seconds. Offsets are
//! truncated toward zero to whole seconds, so a normalize/localize round
//! trip is lossless only up to 1 second of jitter. That bound is inherent
//! to the whole-second clock model, not an implementation accident.

use crate::calendar::CalendarDefinition;
use crate::clock::ElapsedSeconds;
use crate::error::{Error, Result};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A validated longitude in degrees East, within `[-180, 180]`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Longitude(f64);

impl Longitude {
    /// The prime meridian.
    pub const ZERO: Self = Self(0.0);

    /// Validate and wrap a longitude in degrees East.
    pub fn new(degrees: f64) -> Result<Self> {
        if !degrees.is_finite() || !(-180.0..=180.0).contains(&degrees) {
            return Err(Error::InvalidLongitude(degrees));
        }
        Ok(Self(degrees))
    }

    /// The longitude in degrees East.
    #[inline]
    pub const fn degrees(&self) -> f64 {
        self.0
    }

    /// Local-time offset from the prime meridian, in whole seconds of the
    /// given body's clock, truncated toward zero.
    ///
    /// Positive East, negative West (see the module docs for the sign
    /// convention).
    pub fn offset_seconds(&self, calendar: &CalendarDefinition) -> i64 {
        let per_degree = calendar.day_length().value() / 360.0;
        (self.0 * per_degree).trunc() as i64
    }

    /// Re-express a local elapsed-seconds reading as observed at the prime
    /// meridian (subtracts the offset).
    #[inline]
    pub fn normalize_to_prime(
        &self,
        local: ElapsedSeconds,
        calendar: &CalendarDefinition,
    ) -> ElapsedSeconds {
        local - self.offset_seconds(calendar)
    }

    /// Re-express a prime-meridian elapsed-seconds value as the local
    /// reading at this longitude (adds the offset).
    #[inline]
    pub fn localize_from_prime(
        &self,
        prime: ElapsedSeconds,
        calendar: &CalendarDefinition,
    ) -> ElapsedSeconds {
        prime + self.offset_seconds(calendar)
    }
}

impl fmt::Display for Longitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°E", self.0)
    }
}

impl TryFrom<f64> for Longitude {
    type Error = Error;

    fn try_from(degrees: f64) -> Result<Self> {
        Self::new(degrees)
    }
}

// Manual serde impls so deserialized longitudes are re-validated.

#[cfg(feature = "serde")]
impl Serialize for Longitude {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Longitude {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let degrees = f64::deserialize(deserializer)?;
        Longitude::new(degrees).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::Body;

    #[test]
    fn rejects_out_of_range_and_non_finite() {
        assert_eq!(
            Longitude::new(200.0).unwrap_err(),
            Error::InvalidLongitude(200.0)
        );
        assert!(Longitude::new(-180.1).is_err());
        assert!(Longitude::new(f64::NAN).is_err());
        assert!(Longitude::new(f64::INFINITY).is_err());
        assert!(Longitude::new(180.0).is_ok());
        assert!(Longitude::new(-180.0).is_ok());
    }

    #[test]
    fn earth_offset_is_240_seconds_per_degree() {
        let earth = Catalog::builtin().calendar(Body::Earth);
        assert_eq!(Longitude::new(15.0).unwrap().offset_seconds(earth), 3_600);
        assert_eq!(Longitude::new(-15.0).unwrap().offset_seconds(earth), -3_600);
        assert_eq!(Longitude::ZERO.offset_seconds(earth), 0);
    }

    #[test]
    fn antimeridian_offsets_are_opposite_and_equal() {
        for body in Body::ALL {
            let cal = Catalog::builtin().calendar(body);
            let east = Longitude::new(180.0).unwrap().offset_seconds(cal);
            let west = Longitude::new(-180.0).unwrap().offset_seconds(cal);
            assert_eq!(east, -west, "{body}");
            assert_eq!(east, cal.seconds_per_day() / 2, "{body}");
        }
    }

    #[test]
    fn offsets_truncate_toward_zero() {
        let phobos = Catalog::builtin().calendar(Body::Phobos);
        // 27540 / 360 = 76.5 s per degree.
        assert_eq!(Longitude::new(1.5).unwrap().offset_seconds(phobos), 114);
        assert_eq!(Longitude::new(0.9).unwrap().offset_seconds(phobos), 68); // 68.85
        assert_eq!(Longitude::new(-0.9).unwrap().offset_seconds(phobos), -68);
    }

    #[test]
    fn normalize_and_localize_are_inverse_for_exact_offsets() {
        let earth = Catalog::builtin().calendar(Body::Earth);
        let lon = Longitude::new(-73.0).unwrap();
        let local = ElapsedSeconds::new(5_000);
        let prime = lon.normalize_to_prime(local, earth);
        assert_eq!(prime, ElapsedSeconds::new(5_000 + 73 * 240));
        assert_eq!(lon.localize_from_prime(prime, earth), local);
    }

    #[test]
    fn east_reads_later_than_prime() {
        let earth = Catalog::builtin().calendar(Body::Earth);
        let prime = ElapsedSeconds::new(0);
        let tokyo = Longitude::new(139.0).unwrap();
        assert!(tokyo.localize_from_prime(prime, earth) > prime);
    }
}
