//! FastCGI environment table.

use serde::Serialize;

use super::{Link, ReportRow, PATH_INFO_SCRIPT};
use crate::env::RequestEnvironment;
use crate::inspector::RequestInspector;

/// PATH_INFO suffix the index page links to.
const PATH_INFO_DEMO_SUFFIX: &str = "/extra/path";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexReport {
    pub title: String,
    pub banner: String,
    pub rows: Vec<ReportRow>,
    pub links: Vec<Link>,
}

impl IndexReport {
    pub fn build(env: &RequestEnvironment) -> Self {
        let snap = RequestInspector.snapshot(env);
        let https = if snap.https { "Yes" } else { "No" };
        let rows = vec![
            ReportRow::new("Probe Version", env!("CARGO_PKG_VERSION")),
            ReportRow::new("Server Software", snap.server_software.as_str()),
            ReportRow::new("Document Root", snap.document_root.as_str()),
            ReportRow::new("Script Filename", snap.script_filename.as_str()),
            ReportRow::new("Request URI", snap.request_uri.as_str()),
            ReportRow::new("Request Method", snap.request_method.as_str()),
            ReportRow::new("Server Name", snap.server_name.as_str()),
            ReportRow::new("Server Port", snap.server_port.as_str()),
            ReportRow::new("HTTPS", https),
            ReportRow::new("PATH_INFO", snap.path_info.as_str()),
            ReportRow::new("Gateway Interface", snap.gateway_interface.as_str()),
            ReportRow::new("Query String", snap.query_string.as_str()),
        ];

        let links = vec![Link::new(
            "Test PATH_INFO support",
            format!("{}{}", PATH_INFO_SCRIPT, PATH_INFO_DEMO_SUFFIX),
        )];

        Self {
            title: "FastCGI Environment".to_string(),
            banner: "Request reached the backend through the FastCGI/CGI gateway.".to_string(),
            rows,
            links,
        }
    }

    /// Value of the row labelled `label`.
    pub fn row(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.value.as_str())
    }
}
