//! Named locators for the bundled toolkit and its third-party libraries.

use std::any::Any;
use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::config::keys;
use crate::error::{ResolveError, Result};
use crate::locator::{Locator, MATERIAL_STATIC_ENDPOINT, STATIC_ENDPOINT};

pub const MATERIAL_VERSION: &str = "0.96.1";
pub const JQUERY_VERSION: &str = "1.11.3";
pub const HTML5SHIV_VERSION: &str = "3.7.2";
pub const RESPONDJS_VERSION: &str = "1.4.2";

/// Key the registry is stored under in [`Extensions`].
pub const EXTENSION_KEY: &str = "material";

const CDNJS: &str = "//cdnjs.cloudflare.com/ajax/libs";

/// Name → locator mapping, built once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Registry {
    locators: BTreeMap<String, Locator>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard set: `local`, `static`, and one CDN locator per library
    /// that falls back to a local route when `MATERIAL_SERVE_LOCAL` is set.
    pub fn material() -> Self {
        let local = Locator::local(MATERIAL_STATIC_ENDPOINT, true);
        let static_ = Locator::local(STATIC_ENDPOINT, false);

        let lwrap = |lib: &str, version: &str, primary: &Locator| {
            Locator::conditional(
                keys::SERVE_LOCAL,
                primary.clone(),
                Locator::web(format!("{CDNJS}/{lib}/{version}/")),
            )
        };

        let mut registry = Self::new();
        registry.insert("material", lwrap("materialize", MATERIAL_VERSION, &local));
        registry.insert("jquery", lwrap("jquery", JQUERY_VERSION, &local));
        registry.insert("html5shiv", lwrap("html5shiv", HTML5SHIV_VERSION, &static_));
        registry.insert("respond.js", lwrap("respond.js", RESPONDJS_VERSION, &static_));
        registry.insert("local", local);
        registry.insert("static", static_);
        registry
    }

    /// Adds `locator` under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: &str, locator: Locator) -> Option<Locator> {
        self.locators.insert(name.to_string(), locator)
    }

    pub fn get(&self, name: &str) -> Result<&Locator> {
        self.locators
            .get(name)
            .ok_or_else(|| ResolveError::UnknownLocator(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Locator)> {
        self.locators.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.locators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locators.is_empty()
    }

    /// Fetches the registry a previous [`register`] stored in `extensions`.
    pub fn from_extensions(extensions: &Extensions) -> Result<&Registry> {
        extensions.get::<Registry>(EXTENSION_KEY).ok_or_else(|| {
            ResolveError::MissingCapability(format!("extension {EXTENSION_KEY:?} not registered"))
        })
    }
}

/// Host-wide extension store, keyed by extension name.
#[derive(Default)]
pub struct Extensions {
    entries: HashMap<String, Box<dyn Any + Send + Sync>>,
}

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `name`. Returns `true` if an earlier value was replaced.
    pub fn insert<T: Any + Send + Sync>(&mut self, name: &str, value: T) -> bool {
        self.entries.insert(name.to_string(), Box::new(value)).is_some()
    }

    /// Returns the value under `name` if present and of type `T`.
    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.entries.get(name)?.downcast_ref::<T>()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}

/// Builds the standard registry and stores it under [`EXTENSION_KEY`].
///
/// Calling this again rebuilds and replaces the stored registry.
pub fn register(extensions: &mut Extensions) {
    let registry = Registry::material();
    let count = registry.len();
    if extensions.insert(EXTENSION_KEY, registry) {
        tracing::debug!("re-registered {EXTENSION_KEY} extension; previous registry replaced");
    }
    tracing::info!(locators = count, "registered {EXTENSION_KEY} extension");
}
