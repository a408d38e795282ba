use log::{debug, info};

use crate::{
    errors::errors::Error,
    lexer::{lexer::scan_line, tokens::Token},
    summary::summary::Summary,
};

/// Run-level token log.
///
/// Lines are numbered from 1 in the order they are pushed, blank lines
/// included, and their tokens are appended in that same order.
#[derive(Debug, Clone, Default)]
pub struct Scan {
    tokens: Vec<Token>,
    lines: u32,
}

impl Scan {
    pub fn new() -> Self {
        Scan::default()
    }

    /// Scans the next line and returns the tokens it produced.
    pub fn push_line(&mut self, line: &str) -> &[Token] {
        self.lines += 1;
        let found = scan_line(line, self.lines);
        debug!("line {}: {} tokens", self.lines, found.len());

        let start = self.tokens.len();
        self.tokens.extend(found);
        &self.tokens[start..]
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn line_count(&self) -> u32 {
        self.lines
    }

    pub fn summary(&self) -> Summary {
        Summary::from_tokens(&self.tokens)
    }
}

/// Scans every line in order, handing each line's tokens to `sink` as soon
/// as they are produced.
///
/// Stops at the first read or sink error.
pub fn scan_lines<I, F>(lines: I, mut sink: F) -> Result<Scan, Error>
where
    I: IntoIterator<Item = Result<String, Error>>,
    F: FnMut(&[Token]) -> Result<(), Error>,
{
    let mut scan = Scan::new();

    for line in lines {
        let line = line?;
        sink(scan.push_line(&line))?;
    }

    info!(
        "scanned {} lines, {} tokens",
        scan.line_count(),
        scan.tokens().len()
    );
    Ok(scan)
}

/// Scans in-memory text with no per-line reporting.
pub fn scan_text(text: &str) -> Scan {
    let mut scan = Scan::new();
    for line in text.lines() {
        scan.push_line(line);
    }
    scan
}
