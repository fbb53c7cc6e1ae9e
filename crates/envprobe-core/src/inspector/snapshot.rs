//! Normalized view of the recognized request variables.

use crate::env::{EnvKey, RequestEnvironment};

/// Recognized request variables with fallbacks applied.
///
/// String fields hold either the raw value or the key's fallback (`"N/A"`, or
/// `"Not set"` for `PATH_INFO`). `https` is true only for the literal `"on"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    pub server_software: String,
    pub document_root: String,
    pub script_filename: String,
    pub script_name: String,
    pub request_uri: String,
    pub request_method: String,
    pub server_name: String,
    pub server_port: String,
    pub https: bool,
    pub path_info: String,
    pub gateway_interface: String,
    pub query_string: String,
}

impl EnvironmentSnapshot {
    pub fn from_env(env: &RequestEnvironment) -> Self {
        let field = |key: EnvKey| env.get_or(key.as_str(), key.fallback()).to_string();
        Self {
            server_software: field(EnvKey::ServerSoftware),
            document_root: field(EnvKey::DocumentRoot),
            script_filename: field(EnvKey::ScriptFilename),
            script_name: field(EnvKey::ScriptName),
            request_uri: field(EnvKey::RequestUri),
            request_method: field(EnvKey::RequestMethod),
            server_name: field(EnvKey::ServerName),
            server_port: field(EnvKey::ServerPort),
            https: field(EnvKey::Https) == "on",
            path_info: field(EnvKey::PathInfo),
            gateway_interface: field(EnvKey::GatewayInterface),
            query_string: field(EnvKey::QueryString),
        }
    }

    /// Display value for `key`. `HTTPS` reads as `"on"` or `"off"`.
    pub fn get(&self, key: EnvKey) -> &str {
        match key {
            EnvKey::ServerSoftware => &self.server_software,
            EnvKey::DocumentRoot => &self.document_root,
            EnvKey::ScriptFilename => &self.script_filename,
            EnvKey::ScriptName => &self.script_name,
            EnvKey::RequestUri => &self.request_uri,
            EnvKey::RequestMethod => &self.request_method,
            EnvKey::ServerName => &self.server_name,
            EnvKey::ServerPort => &self.server_port,
            EnvKey::Https => {
                if self.https {
                    "on"
                } else {
                    "off"
                }
            }
            EnvKey::PathInfo => &self.path_info,
            EnvKey::GatewayInterface => &self.gateway_interface,
            EnvKey::QueryString => &self.query_string,
        }
    }
}
