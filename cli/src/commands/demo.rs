use std::io::{self, Write};

use florist_common::config::Config;
use florist_core::{catalog, showcase};

pub fn demo(cfg: &Config) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    showcase::present(catalog::sample_bouquet, cfg, &mut out)?;
    out.flush()?;
    Ok(())
}
