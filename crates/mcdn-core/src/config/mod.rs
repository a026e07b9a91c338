//! Extension configuration: the `MATERIAL_*` switches plus host routing details.

mod source;

pub use source::{keys, read_switch, ConfigSource, ConfigValue, MapConfig};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Host-side routing settings (optional `[host]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// URL prefix the host serves its static folder under.
    pub static_url_path: String,
    /// Server name used to build absolute URLs when the local assets live on a subdomain.
    pub server_name: Option<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            static_url_path: "/static".to_string(),
            server_name: None,
        }
    }
}

/// Configuration loaded from `~/.config/mcdn/config.toml`.
///
/// Missing fields take the extension defaults, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialConfig {
    /// Select `.min` variants of assets.
    pub use_minified: bool,
    /// Rewrite scheme-relative CDN URLs (`//host/...`) to `https://host/...`.
    pub cdn_force_ssl: bool,
    /// Append `?material=<version>` to revisioned local assets.
    pub querystring_revving: bool,
    /// Serve every library from the local static routes instead of the CDN.
    pub serve_local: bool,
    /// Subdomain the bundled assets are served from, if any.
    pub local_subdomain: Option<String>,
    pub host: HostConfig,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            use_minified: true,
            cdn_force_ssl: false,
            querystring_revving: true,
            serve_local: false,
            local_subdomain: None,
            host: HostConfig::default(),
        }
    }
}

impl ConfigSource for MaterialConfig {
    fn read_config(&self, key: &str) -> Option<ConfigValue> {
        let value = match key {
            keys::USE_MINIFIED => ConfigValue::Bool(self.use_minified),
            keys::CDN_FORCE_SSL => ConfigValue::Bool(self.cdn_force_ssl),
            keys::QUERYSTRING_REVVING => ConfigValue::Bool(self.querystring_revving),
            keys::SERVE_LOCAL => ConfigValue::Bool(self.serve_local),
            keys::LOCAL_SUBDOMAIN => self
                .local_subdomain
                .clone()
                .map_or(ConfigValue::None, ConfigValue::Str),
            _ => return None,
        };
        Some(value)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mcdn")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MaterialConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MaterialConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from(path: &Path) -> Result<MaterialConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: MaterialConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
