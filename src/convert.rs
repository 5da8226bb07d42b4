// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The solcal contributors

//! Cross-body conversion.
//!
//! The pipeline runs strictly left to right, carrying a single signed
//! second count between stages:
//!
//! ```text
//! source reading ──(pack)──► elapsed ──(−lon offset)──► prime elapsed
//!   ──(+epoch offset)──► shared instant ──(−epoch offset)──► target prime
//!   ──(+lon offset)──► target local elapsed ──(unpack)──► target reading
//! ```
//!
//! Everything here is a pure function of its inputs; the only shared state
//! is the read-only catalog.

use crate::body::Body;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::longitude::Longitude;
use crate::reading::Reading;

impl Catalog {
    /// Convert a reading on `from`'s calendar at `from_longitude` into the
    /// equivalent reading on `to`'s calendar at `to_longitude`.
    ///
    /// The source reading is validated against its calendar
    /// ([`Error::InvalidReading`](crate::Error::InvalidReading) on
    /// out-of-range fields); out-of-range longitudes are rejected by
    /// [`Longitude::new`] before this call.
    ///
    /// Converting a body to itself with equal longitudes is the identity;
    /// converting A→B and back with the longitudes swapped recovers the
    /// original reading within the 1-second truncation bound documented on
    /// [`Longitude`].
    pub fn convert(
        &self,
        from: Body,
        to: Body,
        reading: &Reading,
        from_longitude: Longitude,
        to_longitude: Longitude,
    ) -> Result<Reading> {
        let from_cal = self.calendar(from);
        let to_cal = self.calendar(to);

        let local = from_cal.to_elapsed(reading)?;
        let prime = from_longitude.normalize_to_prime(local, from_cal);

        // Both elapsed axes are rebased onto the shared real-time axis by
        // each body's own epoch offset (0 for every built-in body).
        let shared = prime + from_cal.epoch_offset;
        let target_prime = shared - to_cal.epoch_offset;

        let target_local = to_longitude.localize_from_prime(target_prime, to_cal);
        Ok(to_cal.from_elapsed(target_local))
    }
}

/// Convert with the built-in catalog, validating raw longitude degrees.
///
/// Convenience wrapper over [`Catalog::convert`] for callers holding plain
/// floats.
pub fn convert(
    from: Body,
    to: Body,
    reading: &Reading,
    from_longitude_deg: f64,
    to_longitude_deg: f64,
) -> Result<Reading> {
    Catalog::builtin().convert(
        from,
        to,
        reading,
        Longitude::new(from_longitude_deg)?,
        Longitude::new(to_longitude_deg)?,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn earth_epoch_maps_to_mars_epoch_reading() {
        let out = convert(
            Body::Earth,
            Body::Mars,
            &Reading::new(2025, 1, 0, 0, 0),
            0.0,
            0.0,
        )
        .unwrap();
        assert_eq!(out, Reading::new(0, 1, 1, 4, 3));
    }

    #[test]
    fn one_earth_day_advances_mars_by_86400_seconds() {
        let catalog = Catalog::builtin();
        let out = convert(
            Body::Earth,
            Body::Mars,
            &Reading::new(2025, 2, 0, 0, 0),
            0.0,
            0.0,
        )
        .unwrap();
        let mars_elapsed = catalog.calendar(Body::Mars).to_elapsed(&out).unwrap();
        assert_eq!(mars_elapsed.value(), 86_400);
    }

    #[test]
    fn self_conversion_with_equal_longitudes_is_identity() {
        let reading = Reading::new(3, 200, 7, 40, 12);
        for body in Body::ALL {
            for lon in [-180.0, -31.7, 0.0, 45.0, 180.0] {
                let out = convert(body, body, &reading, lon, lon).unwrap();
                assert_eq!(out, reading, "{body} @ {lon}");
            }
        }
    }

    #[test]
    fn cross_body_roundtrip_is_exact_for_whole_degree_offsets() {
        // Whole-degree offsets on these bodies truncate nothing, so the
        // round trip is exact rather than within the 1 s bound.
        let reading = Reading::new(2025, 40, 13, 22, 41);
        let there = convert(Body::Earth, Body::Saturn, &reading, 17.0, -120.0).unwrap();
        let back = convert(Body::Saturn, Body::Earth, &there, -120.0, 17.0).unwrap();
        assert_eq!(back, reading);
    }

    #[test]
    fn cross_body_roundtrip_stays_within_one_second() {
        let catalog = Catalog::builtin();
        let reading = Reading::new(1, 300, 5, 12, 8);
        let there = convert(Body::Phobos, Body::Mars, &reading, 33.3, -71.9).unwrap();
        let back = convert(Body::Mars, Body::Phobos, &there, -71.9, 33.3).unwrap();

        let phobos = catalog.calendar(Body::Phobos);
        let drift = phobos.to_elapsed(&back).unwrap() - phobos.to_elapsed(&reading).unwrap();
        assert!(drift.abs() <= 1, "round trip drifted {drift} s");
    }

    #[test]
    fn longitude_moves_the_local_clock_in_the_documented_direction() {
        let catalog = Catalog::builtin();
        let reading = Reading::new(2025, 100, 12, 0, 0);
        // Same source instant, observed further east on Mars: later clock.
        let west = convert(Body::Earth, Body::Mars, &reading, 0.0, 0.0).unwrap();
        let east = convert(Body::Earth, Body::Mars, &reading, 0.0, 90.0).unwrap();
        let mars = catalog.calendar(Body::Mars);
        let delta = mars.to_elapsed(&east).unwrap() - mars.to_elapsed(&west).unwrap();
        assert_eq!(delta, 88_800 / 4);
    }

    #[test]
    fn invalid_inputs_are_rejected_not_clamped() {
        let err = convert(
            Body::Earth,
            Body::Mars,
            &Reading::new(2025, 1, 25, 0, 0),
            0.0,
            0.0,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidReading { field: "hour", .. }));

        let err = convert(
            Body::Earth,
            Body::Mars,
            &Reading::new(2025, 1, 0, 0, 0),
            200.0,
            0.0,
        )
        .unwrap_err();
        assert_eq!(err, Error::InvalidLongitude(200.0));
    }

    #[test]
    fn rebased_epoch_shifts_the_output_by_the_epoch_offset() {
        let catalog = Catalog::builtin();
        // Saturn rebased one Saturn day after the shared instant, with the
        // epoch reading advanced to match: conversions must agree with the
        // built-in table.
        let rebased = catalog
            .with_epoch(Body::Saturn, Reading::new(0, 2, 0, 0, 0), 37_800)
            .unwrap();
        let reading = Reading::new(2025, 5, 6, 30, 0);
        let lon = Longitude::ZERO;
        let a = catalog
            .convert(Body::Earth, Body::Saturn, &reading, lon, lon)
            .unwrap();
        let b = rebased
            .convert(Body::Earth, Body::Saturn, &reading, lon, lon)
            .unwrap();
        assert_eq!(a, b);
    }
}
