//! Output handling
//!
//! The run's single artifact is the [`ArticleTable`], persisted as CSV and
//! optionally rendered for the console.

mod csv;
mod table;

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

pub use csv::{format_csv, write_csv};
pub use table::{format_table, ArticleTable};
