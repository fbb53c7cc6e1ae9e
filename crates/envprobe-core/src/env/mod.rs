//! Request environment as handed over by the CGI/FastCGI server layer.
//!
//! A `RequestEnvironment` is built once per request and then only read. Absent
//! variables and variables set to the empty string are kept distinct.

mod file;
mod key;

pub use file::EnvFileError;
pub use key::{EnvKey, UnknownEnvKey, NOT_AVAILABLE, PATH_INFO_NOT_SET};

use std::collections::BTreeMap;

/// Mapping of request variable names to values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestEnvironment {
    vars: BTreeMap<String, String>,
}

impl RequestEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current process environment, which is how a CGI server
    /// passes request parameters. Non-UTF-8 names or values are converted lossily.
    pub fn from_process_env() -> Self {
        std::env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }

    /// Set a variable. Later inserts of the same name win.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Value of `name`, or `fallback` when the variable is absent.
    pub fn get_or<'a>(&'a self, name: &str, fallback: &'a str) -> &'a str {
        self.get(name).unwrap_or(fallback)
    }

    /// Value of a recognized key, or `None` when absent.
    pub fn key(&self, key: EnvKey) -> Option<&str> {
        self.get(key.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for RequestEnvironment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = RequestEnvironment::new();
        for (k, v) in iter {
            env.insert(k, v);
        }
        env
    }
}
