//! Run configuration and fixed presentation constants.

use std::path::PathBuf;

/// Source scanned when no path is given on the command line.
pub const DEFAULT_SOURCE: &str = "entrada.txt";

/// Width the category label is padded to in token and summary lines.
pub const LABEL_WIDTH: usize = 22;

pub const SUMMARY_HEADER: &str = "--- Token count by category ---";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub source: PathBuf,
    /// Print one line per token as it is scanned.
    pub show_tokens: bool,
    /// Print the per-category count table after the last line.
    pub show_summary: bool,
}
