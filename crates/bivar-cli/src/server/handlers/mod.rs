//! API request handlers.

mod columns;
mod dashboard;

pub use columns::*;
pub use dashboard::*;
