//! PATH_INFO segmentation.

use serde::Serialize;

/// Non-empty path segments recovered from `PATH_INFO`, in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PathSegments(Vec<String>);

impl PathSegments {
    /// Split a raw `PATH_INFO` value.
    ///
    /// Only `/` is trimmed from the ends; empty pieces between consecutive
    /// slashes are dropped. Percent-escapes are left as they are.
    pub fn parse(path_info: &str) -> Self {
        let segments = path_info
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        PathSegments(segments)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Segments joined with `/`, without leading or trailing slash.
    pub fn join(&self) -> String {
        self.0.join("/")
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a PathSegments {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
