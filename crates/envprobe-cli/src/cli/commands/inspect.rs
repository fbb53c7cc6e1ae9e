//! `envprobe inspect` – build a report from a saved environment dump.

use anyhow::Result;
use envprobe_core::config::{OutputFormat, ProbeConfig};
use envprobe_core::report::{Page, Report};
use envprobe_core::RequestEnvironment;
use std::path::Path;

use crate::cli::render;

/// Print the report body (no CGI headers) for the dump at `env_file`.
pub fn run_inspect(
    cfg: &ProbeConfig,
    env_file: &Path,
    page: Option<Page>,
    format: Option<OutputFormat>,
) -> Result<()> {
    let env = RequestEnvironment::read_env_file(env_file)?;
    let page = Page::select(page, &env, cfg.default_page);
    let report = Report::build(page, &env, &cfg.example_paths);
    let body = render::render(&report, format.unwrap_or(cfg.format))?;
    print!("{}", body);
    Ok(())
}
