//! Memory Module
//!
//! The key/value capability set and its store implementation.
//!
//! ## Responsibilities
//! - Expose Set / Get / Delete / Keys / Close over logical string keys
//! - Map each logical key to a (bucket, key) pair through the path codec
//! - Run every operation as exactly one engine transaction
//! - Report missing buckets and keys as absence, never as errors
//!
//! ## Outcomes
//! | Operation | Present          | Absent        | Failure  |
//! |-----------|------------------|---------------|----------|
//! | `get`     | `Ok(Some(v))`    | `Ok(None)`    | `Err(e)` |
//! | `delete`  | `Ok(true)`       | `Ok(false)`*  | `Err(e)` |
//!
//! \* only when the bucket does not exist. Deleting an absent key from an
//! existing bucket still reports `Ok(true)`.

mod store;

pub use store::MemoryStore;

use crate::error::Result;

/// A pluggable key/value memory backend
///
/// Implementations are handed to a host application, which calls
/// [`close`](Memory::close) once during shutdown.
pub trait Memory: Send + Sync {
    /// Store `value` under `key`, creating its bucket if needed
    fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Fetch the value under `key`
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Remove `key`, returning whether its bucket existed
    fn delete(&self, key: &str) -> Result<bool>;

    /// Every stored key, decoded to its logical form
    fn keys(&self) -> Result<Vec<String>>;

    /// Release the backend
    fn close(self: Box<Self>) -> Result<()>;
}
