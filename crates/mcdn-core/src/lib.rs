//! Asset URL resolution for the Materialize toolkit and its companion libraries.

pub mod config;
pub mod error;
pub mod locator;
pub mod logging;
pub mod material;
pub mod policy;
pub mod registry;
pub mod template;

pub use error::{ResolveError, Result};
pub use material::Material;
