use std::io::Write;

use crate::{
    config::{LABEL_WIDTH, SUMMARY_HEADER},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
    summary::summary::Summary,
    Position,
};

pub fn format_token(token: &Token) -> String {
    format!(
        "[Line {}, Col {}] {:<width$} : {}",
        token.line,
        token.column,
        token.kind,
        token.lexeme,
        width = LABEL_WIDTH
    )
}

/// One line per occurring category, in label order. The header is not
/// included.
pub fn format_summary(summary: &Summary) -> Vec<String> {
    summary
        .entries()
        .iter()
        .map(|(kind, count)| format!("{:<width$} : {}", kind, count, width = LABEL_WIDTH))
        .collect()
}

/// Writes scan output to any writer.
pub struct Reporter<W: Write> {
    out: W,
    show_tokens: bool,
    show_summary: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, show_tokens: bool, show_summary: bool) -> Self {
        Reporter {
            out,
            show_tokens,
            show_summary,
        }
    }

    pub fn tokens(&mut self, tokens: &[Token]) -> Result<(), Error> {
        if !self.show_tokens {
            return Ok(());
        }

        for token in tokens {
            writeln!(self.out, "{}", format_token(token)).map_err(report_failed)?;
        }
        Ok(())
    }

    pub fn summary(&mut self, summary: &Summary) -> Result<(), Error> {
        if !self.show_summary {
            return Ok(());
        }

        writeln!(self.out).map_err(report_failed)?;
        writeln!(self.out, "{}", SUMMARY_HEADER).map_err(report_failed)?;
        for line in format_summary(summary) {
            writeln!(self.out, "{}", line).map_err(report_failed)?;
        }
        self.out.flush().map_err(report_failed)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn report_failed(e: std::io::Error) -> Error {
    Error::new(
        ErrorImpl::ReportFailed {
            reason: e.to_string(),
        },
        Position::null(),
    )
}
