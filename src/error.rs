// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The solcal contributors

//! Value-level error types.
//!
//! Out-of-range input is always rejected, never clamped; every variant
//! carries enough detail for the caller to build a user-facing message.

use crate::body::Body;
use thiserror::Error;

/// Errors produced by calendar lookup, validation, and conversion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The body name is not in the supported set.
    #[error("unknown body `{0}`")]
    UnknownBody(String),

    /// Longitude outside the `[-180, 180]` degree range.
    #[error("longitude {0} is outside [-180, 180] degrees")]
    InvalidLongitude(f64),

    /// A reading field violates its calendar's valid range.
    #[error("{field} = {value} is outside the valid range {min}..={max}")]
    InvalidReading {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Reserved for body pairs without a defined epoch alignment.
    ///
    /// Never produced by the built-in catalog, where every epoch is pinned
    /// to the shared reference instant.
    #[error("no epoch alignment defined between {from} and {to}")]
    UnsupportedConversion { from: Body, to: Body },

    /// The instant falls outside `chrono`'s representable UTC range.
    #[error("instant is outside the representable UTC range")]
    UtcOutOfRange,
}

pub type Result<T> = std::result::Result<T, Error>;
