//! Dataset ingestion: JSON records from the API, delimited files from the CLI.

mod reader;
mod record;

pub use reader::{Reader, ReaderConfig, SourceInfo};
pub use record::{Dataset, Record};
