//! `KEY=VALUE` environment dumps (output of `env`, or hand-written fixtures).

use anyhow::{Context, Result};
use std::path::Path;

use super::RequestEnvironment;

/// Error for a single malformed line in an environment dump.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvFileError {
    /// Line has no `=` separator.
    #[error("line {line}: expected KEY=VALUE")]
    MissingSeparator { line: usize },
    /// Line starts with `=`.
    #[error("line {line}: empty variable name")]
    EmptyName { line: usize },
}

impl RequestEnvironment {
    /// Parse an environment dump. Blank lines and `#` comments are skipped; the
    /// value is everything after the first `=` and may be empty.
    pub fn parse_env_file(text: &str) -> Result<Self, EnvFileError> {
        let mut env = RequestEnvironment::new();
        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.strip_suffix('\r').unwrap_or(raw);
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let (name, value) = line
                .split_once('=')
                .ok_or(EnvFileError::MissingSeparator { line: line_no })?;
            if name.is_empty() {
                return Err(EnvFileError::EmptyName { line: line_no });
            }
            env.insert(name, value);
        }
        Ok(env)
    }

    /// Read and parse an environment dump from disk.
    pub fn read_env_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read env file: {}", path.display()))?;
        let env = Self::parse_env_file(&text)
            .with_context(|| format!("parse env file: {}", path.display()))?;
        tracing::debug!("read {} variables from {}", env.len(), path.display());
        Ok(env)
    }
}
