//! CLI for the envprobe diagnostic backend.
//!
//! Launched by a CGI gateway (or without a subcommand) it serves the
//! diagnostic page for the request in its environment.

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use envprobe_core::config::{self, OutputFormat, ProbeConfig};
use envprobe_core::report::Page;
use std::path::{Path, PathBuf};

use commands::{run_cgi, run_inspect, run_segments};

/// Top-level CLI for envprobe.
#[derive(Debug, Parser)]
#[command(name = "envprobe", version)]
#[command(about = "envprobe: FastCGI/CGI request-environment diagnostic backend", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/envprobe/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Serve the diagnostic page as a CGI response (default when no subcommand is given).
    Cgi {
        /// Page to serve: "index" or "path-info" (default: chosen from the request).
        #[arg(long, value_name = "PAGE")]
        page: Option<Page>,
        /// Body format: "text" or "json" (default: from config).
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,
    },

    /// Build the report from a KEY=VALUE environment dump and print the body.
    Inspect {
        /// Path to the environment dump (e.g. output of `env`).
        env_file: PathBuf,
        /// Page to build: "index" or "path-info" (default: chosen from the dump).
        #[arg(long, value_name = "PAGE")]
        page: Option<Page>,
        /// Body format: "text" or "json" (default: from config).
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,
    },

    /// Print the segments parsed from a PATH_INFO value, one per line.
    Segments {
        /// Raw PATH_INFO value, e.g. "/api/v1/products".
        path_info: String,
    },
}

/// True when a CGI server launched us (RFC 3875 requires GATEWAY_INTERFACE).
fn launched_by_gateway() -> bool {
    std::env::var_os("GATEWAY_INTERFACE").is_some()
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        // Under a gateway argv comes from the query string (RFC 3875 4.4), so it is never parsed.
        if launched_by_gateway() {
            let cfg = load_cgi_config(None);
            return run_cgi(&cfg, None, None);
        }

        let cli = Cli::parse();

        match cli.command {
            None => {
                let cfg = load_cgi_config(cli.config.as_deref());
                run_cgi(&cfg, None, None)?;
            }
            Some(CliCommand::Cgi { page, format }) => {
                let cfg = load_cgi_config(cli.config.as_deref());
                run_cgi(&cfg, page, format)?;
            }
            Some(CliCommand::Inspect {
                env_file,
                page,
                format,
            }) => {
                let cfg = load_config(cli.config.as_deref())?;
                run_inspect(&cfg, &env_file, page, format)?;
            }
            Some(CliCommand::Segments { path_info }) => run_segments(&path_info)?,
        }

        Ok(())
    }
}

/// Config for interactive commands: explicit path, or the XDG file (created if missing).
fn load_config(path: Option<&Path>) -> Result<ProbeConfig> {
    let cfg = match path {
        Some(p) => config::load_from_path(p)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

/// Config for CGI mode: never writes, and falls back to defaults so the page is still served.
fn load_cgi_config(path: Option<&Path>) -> ProbeConfig {
    let loaded = match path {
        Some(p) => config::load_from_path(p),
        None => config::load_or_default(),
    };
    match loaded {
        Ok(cfg) => {
            tracing::debug!("loaded config: {:?}", cfg);
            cfg
        }
        Err(err) => {
            tracing::warn!("using default config: {:#}", err);
            ProbeConfig::default()
        }
    }
}

#[cfg(test)]
mod tests;
