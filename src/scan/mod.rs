//! Drives the line scanner over a whole source.
//!
//! Owns the line counter and the ordered token log for one run, and feeds
//! each line's tokens to a reporting sink before moving to the next line.

pub mod scan;
