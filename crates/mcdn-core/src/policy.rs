//! Resource finding: filename rewriting, locator lookup and SSL enforcement.

use crate::config::{keys, read_switch};
use crate::error::{ResolveError, Result};
use crate::locator::ResolveContext;
use crate::registry::Registry;

/// Per-call overrides accepted by [`find_resource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindOptions {
    /// `Some(_)` forces minified on/off; `None` honors `MATERIAL_USE_MINIFIED`.
    pub use_minified: Option<bool>,
    /// Template-call flag kept for signature compatibility; resolution ignores it.
    pub local: bool,
}

impl Default for FindOptions {
    fn default() -> Self {
        Self {
            use_minified: None,
            local: true,
        }
    }
}

/// Prefixes `js/` when serving locally and the name mentions neither `css/`
/// nor `js/` anywhere (substring match, not path segments).
pub fn apply_local_prefix(filename: &str) -> String {
    if !filename.contains("css/") && !filename.contains("js/") {
        format!("js/{filename}")
    } else {
        filename.to_string()
    }
}

/// `stem.ext` → `stem.min.ext`, splitting on the last `.`.
pub fn minified_name(filename: &str) -> Result<String> {
    let (stem, ext) = filename
        .rsplit_once('.')
        .ok_or_else(|| ResolveError::MalformedFilename(filename.to_string()))?;
    Ok(format!("{stem}.min.{ext}"))
}

/// `//host/...` → `https://host/...`; any other URL is returned unchanged.
pub fn force_ssl(url: String) -> String {
    if url.starts_with("//") {
        format!("https:{url}")
    } else {
        url
    }
}

/// Finds the URL for `filename` using the locator registered as `cdn`.
///
/// Recomputed from the current configuration on every call.
pub fn find_resource(
    registry: &Registry,
    ctx: &ResolveContext<'_>,
    filename: &str,
    cdn: &str,
    opts: FindOptions,
) -> Result<String> {
    let mut name = if read_switch(ctx.config, keys::SERVE_LOCAL)? {
        apply_local_prefix(filename)
    } else {
        filename.to_string()
    };

    let use_minified = match opts.use_minified {
        Some(v) => v,
        None => read_switch(ctx.config, keys::USE_MINIFIED)?,
    };
    if use_minified {
        name = minified_name(&name)?;
    }

    let locator = registry.get(cdn)?;
    let mut url = locator.resolve(&name, ctx)?;

    if url.starts_with("//") && read_switch(ctx.config, keys::CDN_FORCE_SSL)? {
        url = force_ssl(url);
    }

    tracing::debug!(cdn, filename, rewritten = %name, url = %url, "resolved resource");
    Ok(url)
}
