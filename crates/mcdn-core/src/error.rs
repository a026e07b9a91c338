//! Error type for resource resolution.

use thiserror::Error;

/// Failure while resolving an asset URL.
///
/// Every variant is a programming or configuration mistake, so none of them
/// is retried: callers propagate them with `?`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The requested locator name is not in the registry.
    #[error("unknown locator {0:?}")]
    UnknownLocator(String),
    /// Minified rewriting was requested but the filename has no `.`.
    #[error("filename {0:?} has no extension; cannot insert .min")]
    MalformedFilename(String),
    /// A host capability (form support, registered extension) is unavailable.
    #[error("missing capability: {0}")]
    MissingCapability(String),
    /// The router has no route for a static endpoint.
    #[error("no route for static endpoint {0:?}")]
    UnknownEndpoint(String),
    /// The configuration source has no value for a key.
    #[error("configuration key {0} is not set")]
    MissingConfig(String),
}

pub type Result<T> = std::result::Result<T, ResolveError>;
