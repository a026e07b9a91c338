//! `mcdn resolve` – print the URL for one file.

use anyhow::{Context, Result};
use mcdn_core::config::MaterialConfig;
use mcdn_core::policy::FindOptions;
use mcdn_core::Material;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveArgs {
    pub filename: String,
    pub cdn: String,
    pub use_minified: Option<bool>,
    pub serve_local: bool,
    pub force_ssl: bool,
    pub no_revving: bool,
}

/// Command-line switches only ever turn a config flag on (or revving off).
pub fn apply_overrides(mut cfg: MaterialConfig, args: &ResolveArgs) -> MaterialConfig {
    cfg.serve_local |= args.serve_local;
    cfg.cdn_force_ssl |= args.force_ssl;
    if args.no_revving {
        cfg.querystring_revving = false;
    }
    cfg
}

pub fn resolve_url(cfg: MaterialConfig, args: &ResolveArgs) -> Result<String> {
    let material = Material::new(apply_overrides(cfg, args));
    let opts = FindOptions {
        use_minified: args.use_minified,
        ..FindOptions::default()
    };
    material
        .find_resource(&args.filename, &args.cdn, opts)
        .with_context(|| format!("cannot resolve {} via {}", args.filename, args.cdn))
}

pub fn run_resolve(cfg: MaterialConfig, args: &ResolveArgs) -> Result<()> {
    let url = resolve_url(cfg, args)?;
    println!("{url}");
    Ok(())
}
