//! # Showcase
//!
//! Renders the bouquet walkthrough: listing before and after the freshness
//! sort, the stem-length lookup, and the total price.
//!
//! Everything is written to a caller supplied [`Write`] so the binary can
//! target stdout while tests capture the text in memory.

use std::io::{self, Write};

use florist_common::config::Config;
use florist_common::utils::decimal::Decimal;
use florist_common::{FloristError, Result};
use thiserror::Error;
use tracing::info;

use crate::bouquet::Bouquet;

#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// The bouquet could not be assembled; nothing was written.
    #[error(transparent)]
    Setup(#[from] FloristError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Assembles a bouquet with `build` and walks through it with [`run`].
///
/// A construction failure stops before anything reaches `out`.
pub fn present<W, F>(build: F, cfg: &Config, out: &mut W) -> std::result::Result<(), ShowcaseError>
where
    W: Write,
    F: FnOnce() -> Result<Bouquet>,
{
    let mut bouquet = build()?;
    run(&mut bouquet, cfg, out)?;
    Ok(())
}

/// Runs every step of the walkthrough in order. Sorts `bouquet` in place.
pub fn run<W: Write>(bouquet: &mut Bouquet, cfg: &Config, out: &mut W) -> io::Result<()> {
    info!("presenting bouquet");

    writeln!(out, "Bouquet before sorting by freshness:")?;
    writeln!(out, "{bouquet}")?;

    bouquet.sort_by_freshness();
    writeln!(out, "Bouquet after sorting by freshness:")?;
    writeln!(out, "{bouquet}")?;

    stem_length_report(bouquet, cfg.min_length, cfg.max_length, out)?;
    total_cost_report(bouquet, out)
}

/// Lists the flowers in `[min_length, max_length]`, or says that none match.
pub fn stem_length_report<W: Write>(
    bouquet: &Bouquet,
    min_length: f64,
    max_length: f64,
    out: &mut W,
) -> io::Result<()> {
    let found = bouquet.find_flowers_by_stem_length(min_length, max_length);
    let (min, max) = (Decimal(min_length), Decimal(max_length));

    if found.is_empty() {
        return writeln!(out, "No flowers found within stem length range ({min} - {max} cm).");
    }

    writeln!(out, "Flowers found within stem length range ({min} - {max} cm):")?;
    for flower in found {
        writeln!(out, "{flower}")?;
    }
    Ok(())
}

pub fn total_cost_report<W: Write>(bouquet: &Bouquet, out: &mut W) -> io::Result<()> {
    writeln!(out, "Total cost of the bouquet: ${}", Decimal(bouquet.total_cost()))
}
