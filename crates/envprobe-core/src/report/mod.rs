//! Page view models.
//!
//! Pure data derived from a request environment; the CLI decides how to
//! render them (plain text or JSON).

mod index;
mod page;
mod path_info;

pub use index::IndexReport;
pub use page::{Page, UnknownPage, PATH_INFO_SCRIPT_STEM};
pub use path_info::PathInfoReport;

use serde::Serialize;

use crate::env::RequestEnvironment;

/// Script path of the PATH_INFO test page, for links that cannot use `SCRIPT_NAME`.
pub const PATH_INFO_SCRIPT: &str = "/test-path-info";

/// Labelled value shown in a report table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub label: String,
    pub value: String,
}

impl ReportRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// A built page, tagged by kind when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "kebab-case")]
pub enum Report {
    Index(IndexReport),
    PathInfo(PathInfoReport),
}

impl Report {
    pub fn build(page: Page, env: &RequestEnvironment, example_paths: &[String]) -> Self {
        tracing::debug!("building {} report from {} variables", page, env.len());
        match page {
            Page::Index => Report::Index(IndexReport::build(env)),
            Page::PathInfo => Report::PathInfo(PathInfoReport::build(env, example_paths)),
        }
    }

    pub fn page(&self) -> Page {
        match self {
            Report::Index(_) => Page::Index,
            Report::PathInfo(_) => Page::PathInfo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_dispatches_on_page() {
        let env = RequestEnvironment::new();
        assert_eq!(Report::build(Page::Index, &env, &[]).page(), Page::Index);
        assert_eq!(Report::build(Page::PathInfo, &env, &[]).page(), Page::PathInfo);
    }

    #[test]
    fn json_is_tagged_by_page() {
        let env: RequestEnvironment = [("PATH_INFO", "/a//b")].into_iter().collect();
        let json = serde_json::to_value(Report::build(Page::PathInfo, &env, &[])).unwrap();
        assert_eq!(json["page"], "path-info");
        assert_eq!(json["segments"], serde_json::json!(["a", "b"]));
        assert_eq!(json["path_info_set"], true);
    }
}
