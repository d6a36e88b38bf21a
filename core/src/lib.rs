//! # Florist Core
//!
//! Domain model of the flower shop and the queries run against it.
//!
//! * [`flower::Flower`] and [`accessory::Accessory`]: validated, immutable items.
//! * [`bouquet::Bouquet`]: owns the items; cost, freshness sort, stem-length lookup.
//! * [`catalog`]: the sample stock.
//! * [`showcase`]: the printed walkthrough over a bouquet.

pub mod accessory;
pub mod bouquet;
pub mod catalog;
pub mod flower;
pub mod showcase;

pub use accessory::{Accessory, AccessoryKind};
pub use bouquet::Bouquet;
pub use flower::{Flower, FlowerKind};
