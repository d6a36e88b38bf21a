//! # Bouquet
//!
//! The aggregate the shop sells: an ordered list of flowers plus the
//! accessories wrapped with them.
//!
//! Flower order is meaningful and is only ever changed by
//! [`Bouquet::sort_by_freshness`]. Accessory order is kept as given.

use std::fmt;

use tracing::{debug, trace};

use crate::accessory::Accessory;
use crate::flower::Flower;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bouquet {
    flowers: Vec<Flower>,
    accessories: Vec<Accessory>,
}

impl Bouquet {
    pub fn new(flowers: Vec<Flower>, accessories: Vec<Accessory>) -> Self {
        Self {
            flowers,
            accessories,
        }
    }

    pub fn flowers(&self) -> &[Flower] {
        &self.flowers
    }

    pub fn accessories(&self) -> &[Accessory] {
        &self.accessories
    }

    /// Sum of every flower price followed by every accessory price.
    ///
    /// An empty bouquet costs `0.0`.
    pub fn total_cost(&self) -> f64 {
        let flowers: f64 = self.flowers.iter().map(Flower::price).sum();
        let accessories: f64 = self.accessories.iter().map(Accessory::price).sum();
        let total = flowers + accessories;
        trace!(flowers, accessories, total, "computed bouquet cost");
        total
    }

    /// Orders flowers freshest first. Equal freshness keeps the current
    /// relative order.
    pub fn sort_by_freshness(&mut self) {
        self.flowers.sort_by_key(Flower::freshness);
        debug!(count = self.flowers.len(), "sorted flowers by freshness");
    }

    /// Flowers whose stem length lies in `[min_length, max_length]`, in the
    /// bouquet's current order.
    ///
    /// An inverted range simply matches nothing.
    pub fn find_flowers_by_stem_length(&self, min_length: f64, max_length: f64) -> Vec<&Flower> {
        let found: Vec<&Flower> = self
            .flowers
            .iter()
            .filter(|flower| (min_length..=max_length).contains(&flower.stem_length()))
            .collect();

        debug!(
            min_length,
            max_length,
            found = found.len(),
            "filtered flowers by stem length"
        );
        found
    }
}

impl fmt::Display for Bouquet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Flowers:")?;
        for flower in &self.flowers {
            writeln!(f, "{flower}")?;
        }
        writeln!(f, "Accessories:")?;
        for accessory in &self.accessories {
            writeln!(f, "{accessory}")?;
        }
        Ok(())
    }
}
