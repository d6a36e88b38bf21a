//! # Flower Model
//!
//! A flower is an immutable value: once [`Flower::new`] accepts the
//! attributes they never change. The kind only decides the printed name.

use std::fmt;
use std::ops::RangeInclusive;

use florist_common::utils::decimal::Decimal;
use florist_common::{FloristError, Result};
use tracing::debug;

/// 1 is the freshest, 10 the most wilted.
pub const FRESHNESS_RANGE: RangeInclusive<u8> = 1..=10;

const INVALID_FLOWER: &str = "Invalid flower parameters.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowerKind {
    Rose,
    Tulip,
    Lily,
}

impl FlowerKind {
    pub fn name(&self) -> &'static str {
        match self {
            FlowerKind::Rose => "Rose",
            FlowerKind::Tulip => "Tulip",
            FlowerKind::Lily => "Lily",
        }
    }
}

impl fmt::Display for FlowerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Flower {
    kind: FlowerKind,
    price: f64,
    freshness: u8,
    stem_length: f64,
}

impl Flower {
    /// Builds a flower after checking every attribute.
    ///
    /// Fails with [`FloristError::InvalidArgument`] when the price or stem
    /// length is not a positive finite number, or when the freshness falls
    /// outside [`FRESHNESS_RANGE`].
    pub fn new(kind: FlowerKind, price: f64, freshness: u8, stem_length: f64) -> Result<Self> {
        let valid = is_positive(price)
            && FRESHNESS_RANGE.contains(&freshness)
            && is_positive(stem_length);

        if !valid {
            debug!(%kind, price, freshness, stem_length, "rejected flower");
            return Err(FloristError::invalid_argument(INVALID_FLOWER));
        }

        Ok(Self {
            kind,
            price,
            freshness,
            stem_length,
        })
    }

    pub fn rose(price: f64, freshness: u8, stem_length: f64) -> Result<Self> {
        Self::new(FlowerKind::Rose, price, freshness, stem_length)
    }

    pub fn tulip(price: f64, freshness: u8, stem_length: f64) -> Result<Self> {
        Self::new(FlowerKind::Tulip, price, freshness, stem_length)
    }

    pub fn lily(price: f64, freshness: u8, stem_length: f64) -> Result<Self> {
        Self::new(FlowerKind::Lily, price, freshness, stem_length)
    }

    pub fn kind(&self) -> FlowerKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn freshness(&self) -> u8 {
        self.freshness
    }

    /// Stem length in centimeters.
    pub fn stem_length(&self) -> f64 {
        self.stem_length
    }
}

impl fmt::Display for Flower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Freshness: {}, Stem Length: {} cm, Price: ${})",
            self.name(),
            self.freshness,
            Decimal(self.stem_length),
            Decimal(self.price)
        )
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
