//! Configuration for pathmem
//!
//! Centralized configuration with sensible defaults. Built once and handed
//! by value to [`MemoryStore::open`](crate::MemoryStore::open).

use std::path::PathBuf;

use tracing::Dispatch;

/// Default database file, relative to the working directory
pub const DEFAULT_PATH: &str = "./pathmem.redb";

/// Default permission bits for a newly created database file
pub const DEFAULT_FILE_MODE: u32 = 0o666;

/// Main configuration for a store instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // File Configuration
    // -------------------------------------------------------------------------
    /// Path of the single database file
    pub path: PathBuf,

    /// Permission bits used when the file is created (Unix only, umask applies)
    pub file_mode: u32,

    // -------------------------------------------------------------------------
    // Engine Configuration
    // -------------------------------------------------------------------------
    /// Tuning passed through to the embedded engine
    pub engine: EngineOptions,

    // -------------------------------------------------------------------------
    // Logging
    // -------------------------------------------------------------------------
    /// Dispatcher every store event is sent to. `Dispatch::none()` drops them,
    /// regardless of the subscriber the host has installed.
    pub logger: Dispatch,
}

/// Engine-specific tuning
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineOptions {
    /// Page cache size in bytes; `None` keeps the engine default
    pub cache_size: Option<usize>,

    /// Commit durability for write transactions
    pub durability: Durability,
}

/// Commit durability strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Durability {
    /// fsync on every commit (safest, slowest)
    #[default]
    Immediate,

    /// Commits become durable at a later commit (faster, may lose recent writes on crash)
    Eventual,
}

impl From<Durability> for redb::Durability {
    fn from(durability: Durability) -> Self {
        match durability {
            Durability::Immediate => redb::Durability::Immediate,
            Durability::Eventual => redb::Durability::Eventual,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            file_mode: DEFAULT_FILE_MODE,
            engine: EngineOptions::default(),
            logger: Dispatch::none(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the database file path
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = path.into();
        self
    }

    /// Set the permission bits for a newly created file
    pub fn file_mode(mut self, mode: u32) -> Self {
        self.config.file_mode = mode;
        self
    }

    /// Set all engine options at once
    pub fn engine_options(mut self, options: EngineOptions) -> Self {
        self.config.engine = options;
        self
    }

    /// Set the engine page cache size (in bytes)
    pub fn cache_size(mut self, bytes: usize) -> Self {
        self.config.engine.cache_size = Some(bytes);
        self
    }

    /// Set the commit durability
    pub fn durability(mut self, durability: Durability) -> Self {
        self.config.engine.durability = durability;
        self
    }

    /// Set the dispatcher store events are sent to
    pub fn logger(mut self, logger: Dispatch) -> Self {
        self.config.logger = logger;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
