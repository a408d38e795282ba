//! Line producer for the scanner.
//!
//! Locates and opens the input and hands it over one line at a time. All
//! failures to find or read the input are raised here; the scanner itself
//! only ever sees decoded text.

pub mod source;
