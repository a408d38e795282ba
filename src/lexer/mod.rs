//! Lexical analysis module for the scanner.
//!
//! This module contains the line scanner that converts a line of source text
//! into classified tokens. It handles:
//!
//! - Character classification and the fixed keyword/operator/grouping tables
//! - Maximal munch for identifiers and integer literals
//! - Two-character operator lookahead
//! - Column tracking in characters, not bytes
//! - Lexical error tokens for anything unrecognised

pub mod classify;
pub mod lexer;
pub mod tokens;
