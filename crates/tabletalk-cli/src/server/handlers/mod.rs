//! API request handlers.

mod chat;
mod status;
mod summarize;

pub use chat::*;
pub use status::*;
pub use summarize::*;
