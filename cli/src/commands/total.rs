use std::io::{self, Write};

use florist_core::{catalog, showcase};

pub fn total() -> anyhow::Result<()> {
    let bouquet = catalog::sample_bouquet()?;
    let mut out = io::stdout().lock();
    showcase::total_cost_report(&bouquet, &mut out)?;
    out.flush()?;
    Ok(())
}
