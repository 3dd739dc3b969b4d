//! CLI command handlers, one per file.

mod batch;
mod classify;
mod extract;
mod schema;

pub use batch::run_batch;
pub use classify::run_classify;
#[cfg(test)]
pub(crate) use classify::text_report;
pub use extract::run_extract;
pub use schema::run_schema;
