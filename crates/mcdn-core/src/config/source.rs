//! Host configuration lookup by key.

use std::collections::HashMap;

use crate::error::{ResolveError, Result};

/// Configuration keys recognised by the extension.
pub mod keys {
    pub const USE_MINIFIED: &str = "MATERIAL_USE_MINIFIED";
    pub const CDN_FORCE_SSL: &str = "MATERIAL_CDN_FORCE_SSL";
    pub const QUERYSTRING_REVVING: &str = "MATERIAL_QUERYSTRING_REVVING";
    pub const SERVE_LOCAL: &str = "MATERIAL_SERVE_LOCAL";
    pub const LOCAL_SUBDOMAIN: &str = "MATERIAL_LOCAL_SUBDOMAIN";
}

/// A single configuration value as stored by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Bool(bool),
    Str(String),
    None,
}

impl ConfigValue {
    /// Truthiness used when a value is read as a switch: empty strings and
    /// `None` are false.
    pub fn is_truthy(&self) -> bool {
        match self {
            ConfigValue::Bool(b) => *b,
            ConfigValue::Str(s) => !s.is_empty(),
            ConfigValue::None => false,
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Str(s.to_string())
    }
}

/// Read access to the host's configuration store.
pub trait ConfigSource {
    /// Returns the value stored under `key`, or `None` if the key is absent.
    fn read_config(&self, key: &str) -> Option<ConfigValue>;
}

/// Reads `key` as a boolean switch. An absent key is an error, not `false`.
pub fn read_switch(source: &dyn ConfigSource, key: &str) -> Result<bool> {
    source
        .read_config(key)
        .map(|v| v.is_truthy())
        .ok_or_else(|| ResolveError::MissingConfig(key.to_string()))
}

/// Plain key/value configuration store.
#[derive(Debug, Clone, Default)]
pub struct MapConfig {
    values: HashMap<String, ConfigValue>,
}

impl MapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Sets `key` only if it is not already present.
    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.values.entry(key.into()).or_insert_with(|| value.into());
    }

    /// Fills in the extension defaults for every key the host left unset.
    pub fn apply_material_defaults(&mut self) {
        self.set_default(keys::USE_MINIFIED, true);
        self.set_default(keys::CDN_FORCE_SSL, false);
        self.set_default(keys::QUERYSTRING_REVVING, true);
        self.set_default(keys::SERVE_LOCAL, false);
        self.set_default(keys::LOCAL_SUBDOMAIN, ConfigValue::None);
    }
}

impl ConfigSource for MapConfig {
    fn read_config(&self, key: &str) -> Option<ConfigValue> {
        self.values.get(key).cloned()
    }
}
