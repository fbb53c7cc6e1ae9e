//! `envprobe segments` – show how a PATH_INFO value is split.

use anyhow::Result;
use envprobe_core::PathSegments;

pub fn run_segments(path_info: &str) -> Result<()> {
    let segments = PathSegments::parse(path_info);
    tracing::debug!("path_info={:?} segments={}", path_info, segments.len());
    for segment in &segments {
        println!("{}", segment);
    }
    Ok(())
}
