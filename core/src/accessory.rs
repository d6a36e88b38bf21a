use std::fmt;

use florist_common::utils::decimal::Decimal;
use florist_common::{FloristError, Result};
use tracing::debug;

const NEGATIVE_PRICE: &str = "Accessory price can't be negative.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessoryKind {
    Ribbon,
    Wrapper,
    Card,
}

impl AccessoryKind {
    pub fn name(&self) -> &'static str {
        match self {
            AccessoryKind::Ribbon => "Ribbon",
            AccessoryKind::Wrapper => "Wrapper",
            AccessoryKind::Card => "Card",
        }
    }
}

impl fmt::Display for AccessoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Anything sold alongside the flowers. Free accessories are allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct Accessory {
    kind: AccessoryKind,
    price: f64,
}

impl Accessory {
    pub fn new(kind: AccessoryKind, price: f64) -> Result<Self> {
        if !(price.is_finite() && price >= 0.0) {
            debug!(%kind, price, "rejected accessory");
            return Err(FloristError::invalid_argument(NEGATIVE_PRICE));
        }
        Ok(Self { kind, price })
    }

    pub fn ribbon(price: f64) -> Result<Self> {
        Self::new(AccessoryKind::Ribbon, price)
    }

    pub fn wrapper(price: f64) -> Result<Self> {
        Self::new(AccessoryKind::Wrapper, price)
    }

    pub fn card(price: f64) -> Result<Self> {
        Self::new(AccessoryKind::Card, price)
    }

    pub fn kind(&self) -> AccessoryKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl fmt::Display for Accessory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Price: ${})", self.name(), Decimal(self.price))
    }
}
