//! CLI for resolving Materialize asset URLs.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mcdn_core::config::{self, MaterialConfig};
use std::path::PathBuf;

use commands::{run_config, run_list, run_resolve, ResolveArgs};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "mcdn")]
#[command(about = "Resolve Materialize asset URLs (local static route or CDN)", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/mcdn/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Debug-level logging regardless of RUST_LOG.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the URL serving a file.
    Resolve {
        /// File to resolve, e.g. css/materialize.css.
        filename: String,

        /// Registered locator to resolve with.
        #[arg(long, default_value = "material", value_name = "NAME")]
        cdn: String,

        /// Force the minified variant.
        #[arg(long, conflicts_with = "no_minified")]
        minified: bool,

        /// Force the unminified variant.
        #[arg(long)]
        no_minified: bool,

        /// Serve from local static routes (overrides config).
        #[arg(long)]
        serve_local: bool,

        /// Rewrite scheme-relative URLs to https (overrides config).
        #[arg(long)]
        force_ssl: bool,

        /// Do not append the revision query parameter (overrides config).
        #[arg(long)]
        no_revving: bool,
    },

    /// List registered locators.
    List {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the config path and the effective configuration.
    Config,
}

impl Cli {
    fn load_config(&self) -> Result<MaterialConfig> {
        match &self.config {
            Some(path) => config::load_from(path),
            None => config::load_or_init(),
        }
    }

    pub fn run(self) -> Result<()> {
        let cfg = self.load_config()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match self.command {
            CliCommand::Resolve {
                filename,
                cdn,
                minified,
                no_minified,
                serve_local,
                force_ssl,
                no_revving,
            } => {
                let use_minified = match (minified, no_minified) {
                    (true, _) => Some(true),
                    (_, true) => Some(false),
                    _ => None,
                };
                let args = ResolveArgs {
                    filename,
                    cdn,
                    use_minified,
                    serve_local,
                    force_ssl,
                    no_revving,
                };
                run_resolve(cfg, &args)?;
            }
            CliCommand::List { json } => run_list(json)?,
            CliCommand::Config => run_config(self.config.as_deref(), &cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
