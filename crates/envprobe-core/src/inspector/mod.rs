//! Request inspection: field snapshot and PATH_INFO segments.
//!
//! Both operations are total. Missing or odd input degrades to fallbacks or an
//! empty segment list. Nothing here returns an error or holds state between
//! requests.

mod segments;
mod snapshot;

pub use segments::PathSegments;
pub use snapshot::EnvironmentSnapshot;

use crate::env::{EnvKey, RequestEnvironment};

/// Stateless inspector over a request environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestInspector;

impl RequestInspector {
    pub fn new() -> Self {
        RequestInspector
    }

    /// Recognized fields with fallbacks applied.
    pub fn snapshot(&self, env: &RequestEnvironment) -> EnvironmentSnapshot {
        EnvironmentSnapshot::from_env(env)
    }

    /// `PATH_INFO` split into non-empty segments; absent counts as empty.
    pub fn parse_path_segments(&self, env: &RequestEnvironment) -> PathSegments {
        PathSegments::parse(env.key(EnvKey::PathInfo).unwrap_or(""))
    }
}

/// Shorthand for [`RequestInspector::snapshot`].
pub fn snapshot(env: &RequestEnvironment) -> EnvironmentSnapshot {
    RequestInspector.snapshot(env)
}

/// Shorthand for [`RequestInspector::parse_path_segments`].
pub fn parse_path_segments(env: &RequestEnvironment) -> PathSegments {
    RequestInspector.parse_path_segments(env)
}
