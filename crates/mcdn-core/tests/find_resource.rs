//! End-to-end resolution against the standard registry.
//!
//! Uses both the typed config (`Material`) and a host-style key/value store.

use mcdn_core::config::{keys, MapConfig, MaterialConfig};
use mcdn_core::locator::{ResolveContext, StaticRouter, REVISION};
use mcdn_core::policy::{find_resource, FindOptions};
use mcdn_core::registry::{self, Extensions, Registry};
use mcdn_core::{Material, ResolveError};

const MATERIALIZE_MIN_CSS: &str =
    "//cdnjs.cloudflare.com/ajax/libs/materialize/0.96.1/materialize.min.css";

fn material(f: impl FnOnce(&mut MaterialConfig)) -> Material {
    let mut cfg = MaterialConfig::default();
    f(&mut cfg);
    Material::new(cfg)
}

#[test]
fn defaults_resolve_to_minified_cdn_url() {
    let m = Material::default();
    let url = m
        .find_resource("materialize.css", "material", FindOptions::default())
        .unwrap();
    assert_eq!(url, MATERIALIZE_MIN_CSS);
}

#[test]
fn force_ssl_prefixes_https() {
    let m = material(|c| c.cdn_force_ssl = true);
    let url = m
        .find_resource("materialize.css", "material", FindOptions::default())
        .unwrap();
    assert_eq!(url, format!("https:{MATERIALIZE_MIN_CSS}"));
    assert!(url.starts_with("https://cdnjs."));
}

#[test]
fn force_ssl_leaves_local_paths_alone() {
    let m = material(|c| c.cdn_force_ssl = true);
    let url = m
        .find_resource("js/app.js", "static", FindOptions::default())
        .unwrap();
    assert_eq!(url, "/static/js/app.min.js");
}

#[test]
fn serve_local_routes_through_revisioned_static() {
    let m = material(|c| c.serve_local = true);
    let url = m
        .find_resource("materialize.css", "local", FindOptions::default())
        .unwrap();
    assert_eq!(
        url,
        format!("/static/material/js/materialize.min.css?material={REVISION}")
    );
}

#[test]
fn serve_local_switches_every_cdn_locator() {
    let m = material(|c| c.serve_local = true);
    let opts = FindOptions::default();
    assert_eq!(
        m.find_resource("css/materialize.css", "material", opts).unwrap(),
        format!("/static/material/css/materialize.min.css?material={REVISION}")
    );
    assert_eq!(
        m.find_resource("jquery.js", "jquery", opts).unwrap(),
        format!("/static/material/js/jquery.min.js?material={REVISION}")
    );
    // Shims fall back to the host's own static folder, without revisioning.
    assert_eq!(
        m.find_resource("html5shiv.js", "html5shiv", opts).unwrap(),
        "/static/js/html5shiv.min.js"
    );
    assert_eq!(
        m.find_resource("respond.js", "respond.js", opts).unwrap(),
        "/static/js/respond.min.js"
    );
}

#[test]
fn revving_off_drops_query() {
    let m = material(|c| {
        c.serve_local = true;
        c.querystring_revving = false;
    });
    assert_eq!(
        m.find_resource("css/materialize.css", "material", FindOptions::default())
            .unwrap(),
        "/static/material/css/materialize.min.css"
    );
}

#[test]
fn minified_override_beats_config() {
    let m = material(|c| c.use_minified = true);
    let opts = FindOptions {
        use_minified: Some(false),
        ..FindOptions::default()
    };
    assert_eq!(
        m.find_resource("materialize.css", "material", opts).unwrap(),
        "//cdnjs.cloudflare.com/ajax/libs/materialize/0.96.1/materialize.css"
    );

    let m = material(|c| c.use_minified = false);
    let opts = FindOptions {
        use_minified: Some(true),
        ..FindOptions::default()
    };
    assert_eq!(
        m.find_resource("materialize.css", "material", opts).unwrap(),
        MATERIALIZE_MIN_CSS
    );
}

#[test]
fn local_prefix_happens_before_minification() {
    // The prefix is applied first, so the error names the prefixed filename.
    let m = material(|c| c.serve_local = true);
    assert_eq!(
        m.find_resource("jquery", "static", FindOptions {
            use_minified: Some(false),
            ..FindOptions::default()
        })
        .unwrap(),
        "/static/js/jquery"
    );
    assert_eq!(
        m.find_resource("jquery", "static", FindOptions::default()),
        Err(ResolveError::MalformedFilename("js/jquery".to_string()))
    );
}

#[test]
fn local_flag_does_not_change_the_url() {
    let m = material(|c| c.serve_local = true);
    let with = m
        .find_resource("materialize.js", "material", FindOptions::default())
        .unwrap();
    let without = m
        .find_resource("materialize.js", "material", FindOptions {
            local: false,
            ..FindOptions::default()
        })
        .unwrap();
    assert_eq!(with, without);
}

#[test]
fn unknown_locator_propagates() {
    let m = Material::default();
    assert_eq!(
        m.find_resource("bootstrap.css", "bootstrap", FindOptions::default()),
        Err(ResolveError::UnknownLocator("bootstrap".to_string()))
    );
}

#[test]
fn malformed_filename_propagates() {
    let m = Material::default();
    assert_eq!(
        m.find_resource("LICENSE", "material", FindOptions::default()),
        Err(ResolveError::MalformedFilename("LICENSE".to_string()))
    );
}

#[test]
fn resolution_is_repeatable() {
    let m = material(|c| c.serve_local = true);
    let a = m
        .find_resource("materialize.css", "local", FindOptions::default())
        .unwrap();
    let b = m
        .find_resource("materialize.css", "local", FindOptions::default())
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn host_key_value_config_is_read_per_call() {
    let mut ext = Extensions::new();
    registry::register(&mut ext);
    let registry = Registry::from_extensions(&ext).unwrap();
    let router = StaticRouter::from_config(&MaterialConfig::default());

    let mut cfg = MapConfig::new();
    cfg.apply_material_defaults();
    {
        let ctx = ResolveContext::new(&cfg, &router);
        assert_eq!(
            find_resource(registry, &ctx, "materialize.css", "material", FindOptions::default())
                .unwrap(),
            MATERIALIZE_MIN_CSS
        );
    }

    cfg.set(keys::CDN_FORCE_SSL, true);
    let ctx = ResolveContext::new(&cfg, &router);
    assert_eq!(
        find_resource(registry, &ctx, "materialize.css", "material", FindOptions::default())
            .unwrap(),
        format!("https:{MATERIALIZE_MIN_CSS}")
    );
}

#[test]
fn host_config_missing_switch_fails() {
    let registry = Registry::material();
    let router = StaticRouter::new();
    let mut cfg = MapConfig::new();
    cfg.set(keys::SERVE_LOCAL, false);
    let ctx = ResolveContext::new(&cfg, &router);
    assert_eq!(
        find_resource(&registry, &ctx, "materialize.css", "material", FindOptions::default()),
        Err(ResolveError::MissingConfig(keys::USE_MINIFIED.to_string()))
    );
}

#[test]
fn subdomain_local_assets_get_ssl_rewrite() {
    let mut cfg = MaterialConfig {
        serve_local: true,
        cdn_force_ssl: true,
        local_subdomain: Some("assets".to_string()),
        ..MaterialConfig::default()
    };
    cfg.host.server_name = Some("example.com".to_string());
    let m = Material::new(cfg);
    assert_eq!(
        m.find_resource("css/materialize.css", "material", FindOptions::default())
            .unwrap(),
        format!(
            "https://assets.example.com/static/material/css/materialize.min.css?material={REVISION}"
        )
    );
}
