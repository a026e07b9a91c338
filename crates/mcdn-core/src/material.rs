//! Ready-to-use bundle of configuration, router and registry.

use crate::config::MaterialConfig;
use crate::error::Result;
use crate::locator::{ResolveContext, StaticRouter};
use crate::policy::{find_resource, FindOptions};
use crate::registry::{self, Extensions, Registry};
use crate::template::TemplateGlobals;

/// The extension as a host application wires it up: typed configuration,
/// the default static routes derived from it, and the standard registry.
#[derive(Debug, Clone)]
pub struct Material {
    config: MaterialConfig,
    router: StaticRouter,
    registry: Registry,
}

impl Material {
    pub fn new(config: MaterialConfig) -> Self {
        let router = StaticRouter::from_config(&config);
        Self {
            config,
            router,
            registry: Registry::material(),
        }
    }

    pub fn config(&self) -> &MaterialConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn context(&self) -> ResolveContext<'_> {
        ResolveContext::new(&self.config, &self.router)
    }

    pub fn find_resource(&self, filename: &str, cdn: &str, opts: FindOptions) -> Result<String> {
        find_resource(&self.registry, &self.context(), filename, cdn, opts)
    }

    pub fn globals(&self) -> TemplateGlobals<'_> {
        TemplateGlobals::new(&self.registry, self.context())
    }

    /// Stores a freshly built registry in the host extension store.
    pub fn init_app(&self, extensions: &mut Extensions) {
        registry::register(extensions);
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(MaterialConfig::default())
    }
}
