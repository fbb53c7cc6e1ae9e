//! PATH_INFO test page.

use serde::Serialize;

use super::{Link, ReportRow, PATH_INFO_SCRIPT};
use crate::env::{EnvKey, RequestEnvironment, NOT_AVAILABLE};
use crate::inspector::{PathSegments, RequestInspector};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathInfoReport {
    pub title: String,
    /// True when `PATH_INFO` is present and non-empty.
    pub path_info_set: bool,
    pub path_info: Option<String>,
    pub segments: PathSegments,
    pub note: Option<String>,
    pub request_info: Vec<ReportRow>,
    pub examples: Vec<Link>,
}

impl PathInfoReport {
    pub fn build(env: &RequestEnvironment, example_paths: &[String]) -> Self {
        let path_info = env.key(EnvKey::PathInfo).filter(|p| !p.is_empty());
        let path_info_set = path_info.is_some();
        let note = (!path_info_set).then(|| {
            "PATH_INFO is not set. Try accessing this page with additional path segments."
                .to_string()
        });

        // This page reports every field, PATH_INFO included, as "N/A" when absent.
        let request_info = [
            EnvKey::ScriptName,
            EnvKey::RequestUri,
            EnvKey::PathInfo,
            EnvKey::QueryString,
        ]
        .into_iter()
        .map(|k| ReportRow::new(k.as_str(), env.get_or(k.as_str(), NOT_AVAILABLE)))
        .collect();

        let script_name = env.get_or(EnvKey::ScriptName.as_str(), PATH_INFO_SCRIPT);
        let examples = example_paths
            .iter()
            .map(|p| {
                let href = format!("{}{}", script_name, p);
                Link::new(href.clone(), href)
            })
            .collect();

        Self {
            title: "PATH_INFO Test".to_string(),
            path_info_set,
            path_info: path_info.map(str::to_string),
            segments: RequestInspector.parse_path_segments(env),
            note,
            request_info,
            examples,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn examples() -> Vec<String> {
        vec!["/users".to_string(), "/users/123".to_string()]
    }

    #[test]
    fn path_info_present() {
        let env: RequestEnvironment = [
            ("SCRIPT_NAME", "/test-path-info.php"),
            ("PATH_INFO", "/api/v1/products"),
            ("REQUEST_URI", "/test-path-info.php/api/v1/products?page=2"),
            ("QUERY_STRING", "page=2"),
        ]
        .into_iter()
        .collect();
        let report = PathInfoReport::build(&env, &examples());
        assert!(report.path_info_set);
        assert!(report.note.is_none());
        assert_eq!(report.path_info.as_deref(), Some("/api/v1/products"));
        assert_eq!(report.segments.as_slice(), ["api", "v1", "products"]);
        assert_eq!(report.request_info[3].value, "page=2");
        assert_eq!(report.examples[1].href, "/test-path-info.php/users/123");
    }

    #[test]
    fn path_info_absent_uses_na() {
        let report = PathInfoReport::build(&RequestEnvironment::new(), &examples());
        assert!(!report.path_info_set);
        assert!(report.note.is_some());
        assert!(report.segments.is_empty());
        let path_row = report
            .request_info
            .iter()
            .find(|r| r.label == "PATH_INFO")
            .unwrap();
        assert_eq!(path_row.value, "N/A");
        assert_eq!(report.examples[0].href, "/test-path-info/users");
    }

    #[test]
    fn empty_path_info_counts_as_unset() {
        let env: RequestEnvironment = [("PATH_INFO", "")].into_iter().collect();
        let report = PathInfoReport::build(&env, &[]);
        assert!(!report.path_info_set);
        assert!(report.path_info.is_none());
        assert_eq!(report.request_info[2].value, "");
        assert!(report.examples.is_empty());
    }

    #[test]
    fn root_path_info_is_set_but_has_no_segments() {
        let env: RequestEnvironment = [("PATH_INFO", "/")].into_iter().collect();
        let report = PathInfoReport::build(&env, &[]);
        assert!(report.path_info_set);
        assert!(report.segments.is_empty());
    }
}
