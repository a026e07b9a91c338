//! `mcdn list` – show registered locators.

use anyhow::Result;
use mcdn_core::locator::Locator;
use mcdn_core::registry::Registry;

/// One-line description of a locator, nested conditionals included.
pub fn describe(locator: &Locator) -> String {
    match locator {
        Locator::Static {
            endpoint,
            revisioning,
        } => {
            if *revisioning {
                format!("static:{endpoint} (revved)")
            } else {
                format!("static:{endpoint}")
            }
        }
        Locator::Web { base_url } => base_url.clone(),
        Locator::Conditional {
            switch,
            primary,
            fallback,
        } => format!(
            "if {switch} then {} else {}",
            describe(primary),
            describe(fallback)
        ),
    }
}

pub fn run_list(json: bool) -> Result<()> {
    let registry = Registry::material();
    if json {
        println!("{}", serde_json::to_string_pretty(&registry)?);
        return Ok(());
    }
    println!("{:<12} {}", "NAME", "LOCATOR");
    for (name, locator) in registry.iter() {
        println!("{:<12} {}", name, describe(locator));
    }
    Ok(())
}
