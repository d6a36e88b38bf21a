//! # Decimal rendering
//!
//! Prices and stem lengths are printed as their raw floating value. Whole
//! numbers keep a single fractional digit (`7.0`, `50.0`) so a price never
//! looks like an integer count; everything else uses the shortest
//! representation that round-trips (`10.5`, `0.30000000000000004`).
//! No currency rounding is applied.

use std::fmt;

/// Upper magnitude below which whole values are written with `.0`.
///
/// Past this, `f64` can no longer tell neighbouring integers apart and the
/// plain representation is used instead.
const WHOLE_LIMIT: f64 = 1e16;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decimal(pub f64);

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_finite() && value.fract() == 0.0 && value.abs() < WHOLE_LIMIT {
            write!(f, "{value:.1}")
        } else {
            write!(f, "{value}")
        }
    }
}
