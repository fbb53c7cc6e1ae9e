pub mod config;
pub mod logging;

pub mod env;
pub mod inspector;
pub mod report;

pub use env::{EnvKey, RequestEnvironment};
pub use inspector::{EnvironmentSnapshot, PathSegments, RequestInspector};
