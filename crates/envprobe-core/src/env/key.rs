//! Recognized CGI/FastCGI parameter names.

use std::fmt;
use std::str::FromStr;

/// Fallback for recognized variables that are absent from the environment.
pub const NOT_AVAILABLE: &str = "N/A";

/// Fallback for `PATH_INFO` when absent.
pub const PATH_INFO_NOT_SET: &str = "Not set";

/// One of the request variables the inspector reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EnvKey {
    ServerSoftware,
    DocumentRoot,
    ScriptFilename,
    ScriptName,
    RequestUri,
    RequestMethod,
    ServerName,
    ServerPort,
    Https,
    PathInfo,
    GatewayInterface,
    QueryString,
}

impl EnvKey {
    /// All recognized keys, in report order.
    pub const ALL: [EnvKey; 12] = [
        EnvKey::ServerSoftware,
        EnvKey::DocumentRoot,
        EnvKey::ScriptFilename,
        EnvKey::ScriptName,
        EnvKey::RequestUri,
        EnvKey::RequestMethod,
        EnvKey::ServerName,
        EnvKey::ServerPort,
        EnvKey::Https,
        EnvKey::PathInfo,
        EnvKey::GatewayInterface,
        EnvKey::QueryString,
    ];

    /// Variable name exactly as the server layer sets it.
    pub fn as_str(self) -> &'static str {
        match self {
            EnvKey::ServerSoftware => "SERVER_SOFTWARE",
            EnvKey::DocumentRoot => "DOCUMENT_ROOT",
            EnvKey::ScriptFilename => "SCRIPT_FILENAME",
            EnvKey::ScriptName => "SCRIPT_NAME",
            EnvKey::RequestUri => "REQUEST_URI",
            EnvKey::RequestMethod => "REQUEST_METHOD",
            EnvKey::ServerName => "SERVER_NAME",
            EnvKey::ServerPort => "SERVER_PORT",
            EnvKey::Https => "HTTPS",
            EnvKey::PathInfo => "PATH_INFO",
            EnvKey::GatewayInterface => "GATEWAY_INTERFACE",
            EnvKey::QueryString => "QUERY_STRING",
        }
    }

    /// Value substituted when the key is absent.
    ///
    /// `HTTPS` is normalized to a boolean before display; its raw fallback is `"off"`.
    pub fn fallback(self) -> &'static str {
        match self {
            EnvKey::PathInfo => PATH_INFO_NOT_SET,
            EnvKey::Https => "off",
            _ => NOT_AVAILABLE,
        }
    }
}

impl fmt::Display for EnvKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name is not one of the recognized keys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized request variable: {0}")]
pub struct UnknownEnvKey(pub String);

impl FromStr for EnvKey {
    type Err = UnknownEnvKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnvKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownEnvKey(s.to_string()))
    }
}
