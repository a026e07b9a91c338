//! Resource locators: strategies that turn a filename into a URL.
//!
//! A locator either serves from a local static route, from a fixed web base
//! URL, or picks between two nested locators based on a configuration switch.

mod router;

pub use router::{StaticRouter, UrlRouter, MATERIAL_STATIC_ENDPOINT, STATIC_ENDPOINT};

use serde::Serialize;

use crate::config::{keys, read_switch, ConfigSource};
use crate::error::Result;

/// Query parameter carrying the revision for cache busting.
pub const REVISION_PARAM: &str = "material";
/// Revision attached to revisioned local assets.
pub const REVISION: &str = env!("CARGO_PKG_VERSION");

/// Host capabilities a locator may consult while resolving.
#[derive(Clone, Copy)]
pub struct ResolveContext<'a> {
    pub config: &'a dyn ConfigSource,
    pub router: &'a dyn UrlRouter,
}

impl<'a> ResolveContext<'a> {
    pub fn new(config: &'a dyn ConfigSource, router: &'a dyn UrlRouter) -> Self {
        Self { config, router }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Locator {
    /// Served by the host from a static endpoint.
    Static { endpoint: String, revisioning: bool },
    /// Served from `base_url + filename`.
    Web { base_url: String },
    /// `primary` when `switch` is truthy, `fallback` otherwise.
    Conditional {
        switch: String,
        primary: Box<Locator>,
        fallback: Box<Locator>,
    },
}

impl Locator {
    pub fn local(endpoint: &str, revisioning: bool) -> Self {
        Locator::Static {
            endpoint: endpoint.to_string(),
            revisioning,
        }
    }

    pub fn web(base_url: impl Into<String>) -> Self {
        Locator::Web {
            base_url: base_url.into(),
        }
    }

    pub fn conditional(switch: &str, primary: Locator, fallback: Locator) -> Self {
        Locator::Conditional {
            switch: switch.to_string(),
            primary: Box::new(primary),
            fallback: Box::new(fallback),
        }
    }

    /// Returns the URL for `filename`.
    pub fn resolve(&self, filename: &str, ctx: &ResolveContext<'_>) -> Result<String> {
        match self {
            Locator::Static {
                endpoint,
                revisioning,
            } => {
                if *revisioning && read_switch(ctx.config, keys::QUERYSTRING_REVVING)? {
                    ctx.router
                        .url_for(endpoint, filename, &[(REVISION_PARAM, REVISION)])
                } else {
                    ctx.router.url_for(endpoint, filename, &[])
                }
            }
            // No separator check: the base URL carries its own trailing slash.
            Locator::Web { base_url } => Ok(format!("{base_url}{filename}")),
            Locator::Conditional {
                switch,
                primary,
                fallback,
            } => {
                let on = read_switch(ctx.config, switch)?;
                tracing::trace!(switch = %switch, on, "conditional locator");
                if on {
                    primary.resolve(filename, ctx)
                } else {
                    fallback.resolve(filename, ctx)
                }
            }
        }
    }
}
