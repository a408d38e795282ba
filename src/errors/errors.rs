use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A failure while locating or reading input.
///
/// Unrecognised characters are never reported through this type; they travel
/// through the token stream as `TokenKind::LexicalError`.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::SourceNotFound { .. } => "SourceNotFound",
            ErrorImpl::SourceUnreadable { .. } => "SourceUnreadable",
            ErrorImpl::EmptySourcePath => "EmptySourcePath",
            ErrorImpl::ReportFailed { .. } => "ReportFailed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::SourceNotFound { path } => ErrorTip::Suggestion(format!(
                "File `{}` does not exist, check the path",
                path
            )),
            ErrorImpl::SourceUnreadable { reason, .. } => {
                ErrorTip::Suggestion(format!("Could not read the file: {}", reason))
            }
            ErrorImpl::EmptySourcePath => ErrorTip::None,
            ErrorImpl::ReportFailed { .. } => ErrorTip::Suggestion(String::from(
                "Output was closed before the report finished",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("source {path:?} not found")]
    SourceNotFound { path: String },
    #[error("source {path:?} could not be read: {reason}")]
    SourceUnreadable { path: String, reason: String },
    #[error("no source path given")]
    EmptySourcePath,
    #[error("failed to write report: {reason}")]
    ReportFailed { reason: String },
}
