//! `envprobe cgi` – serve the diagnostic page for the request in the process environment.

use anyhow::{Context, Result};
use envprobe_core::config::{OutputFormat, ProbeConfig};
use envprobe_core::env::EnvKey;
use envprobe_core::report::{Page, Report};
use envprobe_core::RequestEnvironment;
use std::io;

use crate::cli::render;

pub fn run_cgi(cfg: &ProbeConfig, page: Option<Page>, format: Option<OutputFormat>) -> Result<()> {
    let env = RequestEnvironment::from_process_env();
    let page = Page::select(page, &env, cfg.default_page);
    let format = format.unwrap_or(cfg.format);
    tracing::info!(
        "cgi request method={} uri={} page={} format={}",
        env.get_or(EnvKey::RequestMethod.as_str(), "-"),
        env.get_or(EnvKey::RequestUri.as_str(), "-"),
        page,
        format
    );

    let report = Report::build(page, &env, &cfg.example_paths);
    let body = render::render(&report, format)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render::write_cgi_response(&mut out, format, &body).context("write CGI response")?;
    Ok(())
}
