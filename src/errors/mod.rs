//! Error types and error handling for the scanner shell.
//!
//! This module defines the errors raised while opening and reading a
//! source. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for locating and reading input
//! - Helpful error messages and suggestions

pub mod errors;
