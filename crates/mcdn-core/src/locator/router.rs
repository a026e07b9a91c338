//! URL building for locally served static files.

use std::collections::BTreeMap;

use url::form_urlencoded;

use crate::config::MaterialConfig;
use crate::error::{ResolveError, Result};

/// Endpoint serving the host application's own static folder.
pub const STATIC_ENDPOINT: &str = "static";
/// Endpoint serving the assets bundled with this extension.
pub const MATERIAL_STATIC_ENDPOINT: &str = "material.static";

/// Host routing capability: turns `(endpoint, filename)` into a URL.
pub trait UrlRouter {
    fn url_for(&self, endpoint: &str, filename: &str, query: &[(&str, &str)]) -> Result<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Route {
    prefix: String,
    subdomain: Option<String>,
}

/// Router backed by a fixed table of endpoint prefixes.
///
/// Filenames are joined to the prefix with a single `/` and are not
/// percent-encoded. A route with a subdomain yields a scheme-relative URL
/// (`//sub.server/...`) when a server name is known, a plain path otherwise.
#[derive(Debug, Clone, Default)]
pub struct StaticRouter {
    routes: BTreeMap<String, Route>,
    server_name: Option<String>,
}

impl StaticRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes for the host static folder and the bundled material assets,
    /// laid out the way the host mounts them.
    pub fn from_config(cfg: &MaterialConfig) -> Self {
        let base = cfg.host.static_url_path.trim_end_matches('/');
        let mut router = Self::new()
            .route(STATIC_ENDPOINT, base, None)
            .route(
                MATERIAL_STATIC_ENDPOINT,
                &format!("{base}/material"),
                cfg.local_subdomain.as_deref(),
            );
        router.server_name = cfg.host.server_name.clone();
        router
    }

    /// Adds or replaces the route for `endpoint`.
    pub fn route(mut self, endpoint: &str, prefix: &str, subdomain: Option<&str>) -> Self {
        self.routes.insert(
            endpoint.to_string(),
            Route {
                prefix: prefix.trim_end_matches('/').to_string(),
                subdomain: subdomain.filter(|s| !s.is_empty()).map(str::to_string),
            },
        );
        self
    }

    pub fn server_name(mut self, name: &str) -> Self {
        self.server_name = Some(name.to_string());
        self
    }
}

impl UrlRouter for StaticRouter {
    fn url_for(&self, endpoint: &str, filename: &str, query: &[(&str, &str)]) -> Result<String> {
        let route = self
            .routes
            .get(endpoint)
            .ok_or_else(|| ResolveError::UnknownEndpoint(endpoint.to_string()))?;

        let mut url = match (&route.subdomain, &self.server_name) {
            (Some(sub), Some(server)) => format!("//{sub}.{server}"),
            (Some(sub), None) => {
                tracing::warn!(
                    endpoint,
                    subdomain = %sub,
                    "subdomain route without server name; building a relative URL"
                );
                String::new()
            }
            (None, _) => String::new(),
        };
        url.push_str(&route.prefix);
        url.push('/');
        url.push_str(filename.trim_start_matches('/'));

        if !query.is_empty() {
            let qs = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(query)
                .finish();
            url.push('?');
            url.push_str(&qs);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let router = StaticRouter::from_config(&MaterialConfig::default());
        assert_eq!(
            router.url_for(STATIC_ENDPOINT, "js/app.js", &[]).unwrap(),
            "/static/js/app.js"
        );
        assert_eq!(
            router
                .url_for(MATERIAL_STATIC_ENDPOINT, "css/materialize.css", &[])
                .unwrap(),
            "/static/material/css/materialize.css"
        );
    }

    #[test]
    fn query_is_form_encoded() {
        let router = StaticRouter::new().route("static", "/s/", None);
        assert_eq!(
            router
                .url_for("static", "a.css", &[("material", "0.1.1"), ("q", "a b&c")])
                .unwrap(),
            "/s/a.css?material=0.1.1&q=a+b%26c"
        );
    }

    #[test]
    fn subdomain_with_server_name_is_scheme_relative() {
        let mut cfg = MaterialConfig {
            local_subdomain: Some("assets".to_string()),
            ..MaterialConfig::default()
        };
        cfg.host.server_name = Some("example.com".to_string());
        let router = StaticRouter::from_config(&cfg);
        assert_eq!(
            router
                .url_for(MATERIAL_STATIC_ENDPOINT, "js/materialize.js", &[])
                .unwrap(),
            "//assets.example.com/static/material/js/materialize.js"
        );
        // The host's own static folder stays on the main domain.
        assert_eq!(
            router.url_for(STATIC_ENDPOINT, "x.js", &[]).unwrap(),
            "/static/x.js"
        );
    }

    #[test]
    fn subdomain_without_server_name_falls_back_to_path() {
        let cfg = MaterialConfig {
            local_subdomain: Some("assets".to_string()),
            ..MaterialConfig::default()
        };
        let router = StaticRouter::from_config(&cfg);
        assert_eq!(
            router
                .url_for(MATERIAL_STATIC_ENDPOINT, "js/x.js", &[])
                .unwrap(),
            "/static/material/js/x.js"
        );
    }

    #[test]
    fn unknown_endpoint() {
        let router = StaticRouter::new();
        assert_eq!(
            router.url_for("nope", "a.js", &[]),
            Err(ResolveError::UnknownEndpoint("nope".to_string()))
        );
    }
}
