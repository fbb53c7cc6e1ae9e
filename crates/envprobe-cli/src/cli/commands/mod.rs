//! CLI command handlers, one per file.

mod cgi;
mod inspect;
mod segments;

pub use cgi::run_cgi;
pub use inspect::run_inspect;
pub use segments::run_segments;
