//! Per-category token counts for a finished scan.

pub mod summary;
