//! Error types for pathmem
//!
//! Provides a unified error type for all store operations. Engine errors
//! are carried verbatim so callers can inspect the underlying cause.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using MemoryError
pub type Result<T> = std::result::Result<T, MemoryError>;

/// Unified error type for pathmem operations
///
/// Missing buckets and missing keys are never reported through this type;
/// they surface as `Ok(None)` / `Ok(false)` from the store.
#[derive(Debug, Error)]
pub enum MemoryError {
    // -------------------------------------------------------------------------
    // Lifecycle Errors
    // -------------------------------------------------------------------------
    #[error("failed to open database at {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: redb::DatabaseError,
    },

    #[error("failed to open database at {}: {source}", path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Engine Errors
    // -------------------------------------------------------------------------
    #[error("transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("bucket error: {0}")]
    Table(#[from] redb::TableError),

    #[error("storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("commit error: {0}")]
    Commit(#[from] redb::CommitError),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
