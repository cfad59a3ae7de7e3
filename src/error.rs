use thiserror::Error;

/// Pipeline-fatal failures. A run is all-or-nothing: none of these are
/// recovered from mid-pipeline. Lookup misses are `Option`, not errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The markup source could not be read or fetched.
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),

    /// A book heading yields no canonical short name.
    #[error("malformed book title {0:?}")]
    MalformedTitle(String),

    /// Fragment-to-verse segmentation failed for one book.
    #[error("malformed book {book}: {reason}")]
    MalformedSection { book: String, reason: String },

    /// A snapshot file could not be read or written.
    #[error("snapshot i/o failed for {path}: {reason}")]
    SnapshotIo { path: String, reason: String },

    /// A persisted snapshot does not parse back to its expected shape.
    #[error("corrupt snapshot {path}: {reason}")]
    CorruptSnapshot { path: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
