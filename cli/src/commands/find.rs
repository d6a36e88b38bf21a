use std::io::{self, Write};

use florist_common::config::Config;
use florist_core::{catalog, showcase};

pub fn find(cfg: &Config) -> anyhow::Result<()> {
    let bouquet = catalog::sample_bouquet()?;
    let mut out = io::stdout().lock();
    showcase::stem_length_report(&bouquet, cfg.min_length, cfg.max_length, &mut out)?;
    out.flush()?;
    Ok(())
}
