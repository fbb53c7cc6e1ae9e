//! Response rendering: plain-text or JSON bodies and the CGI header block.

use anyhow::{Context, Result};
use envprobe_core::config::OutputFormat;
use envprobe_core::report::{IndexReport, PathInfoReport, Report, ReportRow};
use std::fmt::Write as _;
use std::io::{self, Write};

pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => {
            let mut body = serde_json::to_string_pretty(report).context("serialize report")?;
            body.push('\n');
            Ok(body)
        }
    }
}

/// Write `Content-Type`, the blank separator line, then `body`.
pub fn write_cgi_response<W: Write>(out: &mut W, format: OutputFormat, body: &str) -> io::Result<()> {
    write!(out, "Content-Type: {}\n\n", format.content_type())?;
    out.write_all(body.as_bytes())?;
    out.flush()
}

pub fn render_text(report: &Report) -> String {
    match report {
        Report::Index(r) => index_text(r),
        Report::PathInfo(r) => path_info_text(r),
    }
}

fn heading(out: &mut String, title: &str, underline: char) {
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", underline.to_string().repeat(title.chars().count()));
}

fn rows(out: &mut String, rows: &[ReportRow], suffix: &str) {
    let width = rows
        .iter()
        .map(|r| r.label.chars().count() + suffix.len())
        .max()
        .unwrap_or(0);
    for row in rows {
        let label = format!("{}{}", row.label, suffix);
        let _ = writeln!(out, "{:<width$}  {}", label, row.value, width = width);
    }
}

fn index_text(r: &IndexReport) -> String {
    let mut out = String::new();
    heading(&mut out, &r.title, '=');
    let _ = writeln!(out, "{}\n", r.banner);
    rows(&mut out, &r.rows, "");
    if !r.links.is_empty() {
        out.push('\n');
        heading(&mut out, "Test Links", '-');
        for link in &r.links {
            let _ = writeln!(out, "  {}: {}", link.label, link.href);
        }
    }
    out
}

fn path_info_text(r: &PathInfoReport) -> String {
    let mut out = String::new();
    heading(&mut out, &r.title, '=');

    match (&r.path_info, &r.note) {
        (Some(path_info), _) => {
            let _ = writeln!(out, "Success! PATH_INFO is working correctly.\n");
            heading(&mut out, "PATH_INFO Value", '-');
            let _ = writeln!(out, "{}\n", path_info);
            heading(&mut out, "Parsed Path Segments", '-');
            if r.segments.is_empty() {
                let _ = writeln!(out, "(none)");
            }
            for (i, seg) in r.segments.iter().enumerate() {
                let _ = writeln!(out, "[{}] => {}", i, seg);
            }
            out.push('\n');
        }
        (None, Some(note)) => {
            let _ = writeln!(out, "Note: {}\n", note);
        }
        (None, None) => out.push('\n'),
    }

    heading(&mut out, "Request Information", '-');
    rows(&mut out, &r.request_info, ":");

    if !r.examples.is_empty() {
        out.push('\n');
        heading(&mut out, "Example Usage", '-');
        for link in &r.examples {
            let _ = writeln!(out, "  {}", link.href);
        }
    }
    out
}
