//! Functions exposed to the templating layer under stable global names.

use crate::error::Result;
use crate::locator::ResolveContext;
use crate::policy::{find_resource, FindOptions};
use crate::registry::Registry;

pub const IS_HIDDEN_FIELD: &str = "material_is_hidden_field";
pub const FIND_RESOURCE: &str = "material_find_resource";

/// Names under which [`TemplateGlobals`] methods are published.
pub const GLOBAL_NAMES: [&str; 2] = [IS_HIDDEN_FIELD, FIND_RESOURCE];

/// A form field as seen by the form-handling library.
pub trait FormField {
    fn is_hidden(&self) -> bool;
}

/// Whether `field` is a hidden input.
///
/// Fails with `MissingCapability` when built without the `forms` feature.
#[cfg(feature = "forms")]
pub fn is_hidden_field(field: &dyn FormField) -> Result<bool> {
    Ok(field.is_hidden())
}

#[cfg(not(feature = "forms"))]
pub fn is_hidden_field(_field: &dyn FormField) -> Result<bool> {
    Err(crate::error::ResolveError::MissingCapability(
        "form support is not enabled (build with the `forms` feature)".to_string(),
    ))
}

/// Template-facing view over a registry and the host capabilities.
pub struct TemplateGlobals<'a> {
    registry: &'a Registry,
    ctx: ResolveContext<'a>,
}

impl<'a> TemplateGlobals<'a> {
    pub fn new(registry: &'a Registry, ctx: ResolveContext<'a>) -> Self {
        Self { registry, ctx }
    }

    /// `material_find_resource(filename, cdn, use_minified=None, local=True)`.
    pub fn material_find_resource(
        &self,
        filename: &str,
        cdn: &str,
        use_minified: Option<bool>,
        local: bool,
    ) -> Result<String> {
        find_resource(
            self.registry,
            &self.ctx,
            filename,
            cdn,
            FindOptions {
                use_minified,
                local,
            },
        )
    }

    pub fn material_is_hidden_field(&self, field: &dyn FormField) -> Result<bool> {
        is_hidden_field(field)
    }
}
