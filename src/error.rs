use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractError>;

/// Ways a page extraction can fail.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Start page {start} must be less than or equal to end page {end}")]
    InvalidRange { start: i64, end: i64 },

    #[error("Page range {start}-{end} must be between 1 and {page_count}")]
    OutOfBounds {
        start: i64,
        end: i64,
        page_count: u32,
    },

    #[error("Failed to read PDF: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse PDF: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    #[error("Failed to write PDF: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
