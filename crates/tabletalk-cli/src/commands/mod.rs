//! CLI command implementations.

pub mod ask;
pub mod serve;
pub mod summarize;
