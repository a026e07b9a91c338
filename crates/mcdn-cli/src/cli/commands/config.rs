//! `mcdn config` – print where config comes from and what it resolves to.

use anyhow::Result;
use mcdn_core::config::{self, MaterialConfig};
use std::path::Path;

pub fn run_config(explicit: Option<&Path>, cfg: &MaterialConfig) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
