//! # pathmem
//!
//! A path-keyed memory backend on an embedded, transactional store:
//! - Flat string keys such as `"users/42"` map onto (bucket, key) pairs
//! - One ACID transaction per operation, single file on disk
//! - Single-writer/multi-reader concurrency inherited from the engine
//! - Missing buckets and keys reported as absence, not errors
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Host Application                        │
//! │              (set / get / delete / keys / close)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     MemoryStore                              │
//! │             (one transaction per operation)                  │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │                                  │
//!            ▼                                  ▼
//!   ┌─────────────────┐               ┌──────────────────┐
//!   │   Path Codec    │               │      redb        │
//!   │ "a/b" ⇄ (a, b)  │               │ table per bucket │
//!   └─────────────────┘               └──────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use pathmem::MemoryStore;
//!
//! let store = MemoryStore::open_path("memory.redb")?;
//! store.set("users/42", b"alice")?;
//! assert_eq!(store.get("users/42")?, Some(b"alice".to_vec()));
//! assert!(store.delete("users/42")?);
//! store.close()?;
//! # Ok::<(), pathmem::MemoryError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod path;
pub mod memory;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{MemoryError, Result};
pub use config::{Config, Durability, EngineOptions};
pub use memory::{Memory, MemoryStore};
pub use path::PathKey;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of pathmem
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
