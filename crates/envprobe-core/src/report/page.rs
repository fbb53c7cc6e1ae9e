//! Which diagnostic page to produce for a request.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::env::{EnvKey, RequestEnvironment};

/// Script stem that always selects the PATH_INFO test page.
pub const PATH_INFO_SCRIPT_STEM: &str = "test-path-info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    /// FastCGI environment table.
    #[default]
    Index,
    /// PATH_INFO test page with parsed segments.
    PathInfo,
}

impl Page {
    /// Page implied by the script name (`/test-path-info.php` -> `PathInfo`).
    pub fn from_script_name(script_name: &str) -> Option<Page> {
        let stem = Path::new(script_name).file_stem()?.to_str()?;
        (stem == PATH_INFO_SCRIPT_STEM).then_some(Page::PathInfo)
    }

    /// Resolve the page for a request: an explicit choice wins, then the
    /// script name, then `default`. `PATH_INFO` plays no part, so the index
    /// page reports whatever extra path the gateway forwarded.
    pub fn select(explicit: Option<Page>, env: &RequestEnvironment, default: Page) -> Page {
        explicit
            .or_else(|| env.key(EnvKey::ScriptName).and_then(Page::from_script_name))
            .unwrap_or(default)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Page::Index => "index",
            Page::PathInfo => "path-info",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page {0:?} (expected \"index\" or \"path-info\")")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "index" => Ok(Page::Index),
            "path-info" => Ok(Page::PathInfo),
            other => Err(UnknownPage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_name_selects_path_info_page() {
        assert_eq!(Page::from_script_name("/test-path-info.php"), Some(Page::PathInfo));
        assert_eq!(Page::from_script_name("/cgi-bin/test-path-info"), Some(Page::PathInfo));
        assert_eq!(Page::from_script_name("/index.php"), None);
        assert_eq!(Page::from_script_name(""), None);
    }

    #[test]
    fn select_precedence() {
        let env: RequestEnvironment = [("SCRIPT_NAME", "/test-path-info.php")].into_iter().collect();
        assert_eq!(Page::select(Some(Page::Index), &env, Page::Index), Page::Index);
        assert_eq!(Page::select(None, &env, Page::Index), Page::PathInfo);
        assert_eq!(Page::select(None, &RequestEnvironment::new(), Page::PathInfo), Page::PathInfo);
    }

    #[test]
    fn path_info_does_not_change_page() {
        let env: RequestEnvironment = [("SCRIPT_NAME", "/index.php"), ("PATH_INFO", "/extra/path")]
            .into_iter()
            .collect();
        assert_eq!(Page::select(None, &env, Page::Index), Page::Index);

        let env: RequestEnvironment = [("PATH_INFO", "/x")].into_iter().collect();
        assert_eq!(Page::select(None, &env, Page::Index), Page::Index);
    }

    #[test]
    fn parse_names() {
        assert_eq!("index".parse::<Page>().unwrap(), Page::Index);
        assert_eq!("path-info".parse::<Page>().unwrap(), Page::PathInfo);
        assert!("pathinfo".parse::<Page>().is_err());
    }
}
