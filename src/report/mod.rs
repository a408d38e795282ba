//! Text rendering of tokens and the category count table.

pub mod report;
