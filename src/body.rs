// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The solcal contributors

//! Supported celestial bodies.
//!
//! The set of bodies is closed and known at build time: adding one is a
//! data-table edit (a new variant here plus one row in
//! [`Catalog`](crate::catalog::Catalog)), never an algorithm change.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A celestial body with its own calendar and clock.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Body {
    Earth,
    Mars,
    Phobos,
    Saturn,
}

impl Body {
    /// Every supported body, in catalog order.
    pub const ALL: [Body; 4] = [Body::Earth, Body::Mars, Body::Phobos, Body::Saturn];

    /// Canonical display name.
    pub const fn name(self) -> &'static str {
        match self {
            Body::Earth => "Earth",
            Body::Mars => "Mars",
            Body::Phobos => "Phobos",
            Body::Saturn => "Saturn",
        }
    }

    /// Index into per-body tables.
    pub(crate) const fn index(self) -> usize {
        match self {
            Body::Earth => 0,
            Body::Mars => 1,
            Body::Phobos => 2,
            Body::Saturn => 3,
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = Error;

    /// Case-insensitive lookup by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Body::ALL
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownBody(s.to_string()))
    }
}
