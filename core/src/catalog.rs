//! The shop's fixed sample stock used by the demo and the CLI commands.

use florist_common::Result;

use crate::accessory::Accessory;
use crate::bouquet::Bouquet;
use crate::flower::Flower;

pub fn sample_flowers() -> Result<Vec<Flower>> {
    Ok(vec![
        Flower::rose(10.5, 2, 50.0)?,
        Flower::tulip(7.0, 5, 30.0)?,
        Flower::lily(12.0, 3, 40.0)?,
    ])
}

pub fn sample_accessories() -> Result<Vec<Accessory>> {
    Ok(vec![
        Accessory::ribbon(2.0)?,
        Accessory::wrapper(3.0)?,
        Accessory::card(1.5)?,
    ])
}

pub fn sample_bouquet() -> Result<Bouquet> {
    Ok(Bouquet::new(sample_flowers()?, sample_accessories()?))
}
