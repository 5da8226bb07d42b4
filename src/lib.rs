// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The solcal contributors

//! Planetary calendar primitives: per-body calendars, longitude offsets,
//! and cross-body time conversion.
//!
//! Each supported [`Body`] has an idealized calendar — a clock radix
//! (seconds per minute, minutes per hour, hours per day), a year length in
//! days, and a reference epoch pinned to one shared real instant
//! (2025-01-01T00:00:00 UTC). A structured [`Reading`] on one body is
//! converted to another body's calendar by packing it into
//! [`ElapsedSeconds`], sliding along the shared axis, and unpacking on the
//! destination calendar, with a [`Longitude`]-based local-time offset
//! applied on both ends.
//!
//! # Core types
//!
//! - [`Body`] — enumerated celestial bodies, a closed build-time set.
//! - [`CalendarDefinition`] — one body's clock radix, [`YearLength`], and
//!   reference epoch; packs/unpacks readings via
//!   [`to_elapsed`](CalendarDefinition::to_elapsed) /
//!   [`from_elapsed`](CalendarDefinition::from_elapsed).
//! - [`Reading`] — structured `(year, day-of-year, hour, minute, second)`.
//! - [`ElapsedSeconds`] — the signed linear second axis between calendars.
//! - [`Longitude`] — validated degrees East, with timezone-like offsets.
//! - [`Catalog`] — the immutable validated body→calendar table.
//! - [`convert`] — the one-call conversion entry point.
//!
//! # Supported bodies
//!
//! | Body | Day | Year | Epoch reading (lon 0) |
//! |------|-----|------|-----------------------|
//! | Earth | 24 h × 60 m × 60 s | 365 d | `2025/01 00:00:00` |
//! | Mars | 24 h × 50 m × 74 s | 668 d | `0/01 01:04:03` |
//! | Phobos | 9 h × 51 m × 60 s | 1000 d | `0/01 00:00:00` |
//! | Saturn | 10 h × 63 m × 60 s | 1000 d | `0/01 00:00:00` |
//!
//! # Example
//!
//! ```
//! use solcal::{convert, Body, Reading};
//!
//! // Noon on Earth day 100 of 2025 at 15°E, as read on Mars at 0°.
//! let reading = Reading::new(2025, 100, 12, 0, 0);
//! let on_mars = convert(Body::Earth, Body::Mars, &reading, 15.0, 0.0)?;
//! println!("{on_mars}");
//! # Ok::<(), solcal::Error>(())
//! ```
//!
//! Everything is pure and synchronous; the only shared state is the
//! read-only built-in [`Catalog`], safe under any amount of concurrency.

mod body;
mod calendar;
mod catalog;
mod clock;
mod convert;
mod error;
mod longitude;
mod reading;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use body::Body;
pub use calendar::{CalendarDefinition, YearLength};
pub use catalog::{Catalog, REFERENCE_TIMESTAMP};
pub use clock::ElapsedSeconds;
pub use convert::convert;
pub use error::{Error, Result};
pub use longitude::Longitude;
pub use reading::Reading;
