//! Store façade
//!
//! CRUD over the embedded engine using the path codec.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use redb::{Database, ReadableTable, TableDefinition, TableError, TableHandle, WriteTransaction};
use tracing::{debug, dispatcher, info};

use crate::config::{Config, Durability};
use crate::error::{MemoryError, Result};
use crate::path::{decode, PathKey};

use super::Memory;

/// Every bucket maps raw key bytes to raw value bytes
type Bucket<'a> = TableDefinition<'a, &'static [u8], &'static [u8]>;

fn bucket(name: &str) -> Bucket<'_> {
    TableDefinition::new(name)
}

/// Path-keyed memory backed by a single redb file
///
/// ## Concurrency Model
///
/// No locking happens here. Each public call maps onto exactly one
/// engine transaction:
/// - **Writes** (`set`/`delete`): one write transaction, serialized by the
///   engine's global writer lock
/// - **Reads** (`get`/`keys`/`buckets`): one read transaction, each seeing
///   a snapshot as of its start
pub struct MemoryStore {
    /// Store configuration
    config: Config,

    /// The open engine handle
    db: Database,
}

impl MemoryStore {
    /// Open or create the database file named in `config`
    pub fn open(config: Config) -> Result<Self> {
        validate(&config)?;

        let logger = config.logger.clone();
        dispatcher::with_default(&logger, || {
            debug!(path = %config.path.display(), "Opening database");
        });

        let file = create_file(&config.path, config.file_mode).map_err(|source| {
            MemoryError::OpenFile {
                path: config.path.clone(),
                source,
            }
        })?;

        let mut builder = redb::Builder::new();
        if let Some(bytes) = config.engine.cache_size {
            builder.set_cache_size(bytes);
        }

        let db = builder.create_file(file).map_err(|source| MemoryError::Open {
            path: config.path.clone(),
            source,
        })?;

        dispatcher::with_default(&logger, || {
            info!(path = %config.path.display(), "Memory initialized successfully");
        });

        Ok(Self { config, db })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified file
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(Config::builder().path(path.as_ref()).build())
    }

    /// Store `value` under `key`
    ///
    /// Bucket creation and the write commit together or not at all.
    pub fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let pk = PathKey::encode(key);
        self.log(|| {
            debug!(bucket = %pk.table_name(), key = %pk.key_name(), "Database access: Put");
        });

        let name = pk.table_name();
        let txn = self.begin_write()?;
        {
            let mut table = txn.open_table(bucket(&name))?;
            table.insert(pk.key(), value)?;
        }
        txn.commit()?;

        Ok(())
    }

    /// Fetch the value under `key`
    ///
    /// A missing bucket and a missing key both yield `Ok(None)`.
    pub fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let pk = PathKey::encode(key);
        self.log(|| {
            debug!(bucket = %pk.table_name(), key = %pk.key_name(), "Database access: Get");
        });

        let name = pk.table_name();
        let txn = self.db.begin_read()?;
        let table = match txn.open_table(bucket(&name)) {
            Ok(table) => table,
            Err(TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let value = table.get(pk.key())?.map(|guard| guard.value().to_vec());
        Ok(value)
    }

    /// Remove `key`
    ///
    /// Returns `Ok(false)` only when the bucket never existed. The engine
    /// does not tell us whether the key itself was present, so an existing
    /// bucket always reports `Ok(true)`.
    pub fn delete(&self, key: &str) -> Result<bool> {
        let pk = PathKey::encode(key);
        self.log(|| {
            debug!(bucket = %pk.table_name(), key = %pk.key_name(), "Database access: Delete");
        });

        let name = pk.table_name();
        let txn = self.begin_write()?;

        // Opening a table in a write transaction creates it
        if !bucket_exists(&txn, &name)? {
            txn.abort()?;
            return Ok(false);
        }

        {
            let mut table = txn.open_table(bucket(&name))?;
            table.remove(pk.key())?;
        }
        txn.commit()?;

        Ok(true)
    }

    /// Every stored key across every bucket, in engine iteration order
    ///
    /// Buckets are visited by name, keys within a bucket by raw bytes.
    pub fn keys(&self) -> Result<Vec<String>> {
        self.log(|| debug!("Database access: Keys"));

        let txn = self.db.begin_read()?;
        let mut keys = Vec::new();

        for handle in txn.list_tables()? {
            let name = handle.name();
            let table = txn.open_table(bucket(name))?;
            for entry in table.iter()? {
                let (key, _) = entry?;
                keys.push(decode(name.as_bytes(), key.value()));
            }
        }

        Ok(keys)
    }

    /// Names of every bucket that has been written to
    pub fn buckets(&self) -> Result<Vec<String>> {
        let txn = self.db.begin_read()?;
        let names = txn
            .list_tables()?
            .map(|handle| handle.name().to_string())
            .collect();
        Ok(names)
    }

    /// Close the store, releasing the file and its lock
    ///
    /// With eventual durability, pending commits are flushed by one final
    /// immediate commit first; a failure there is returned.
    pub fn close(self) -> Result<()> {
        self.log(|| debug!(path = %self.config.path.display(), "Closing database"));

        if self.config.engine.durability != Durability::Immediate {
            let mut txn = self.db.begin_write()?;
            txn.set_durability(redb::Durability::Immediate);
            txn.commit()?;
        }

        drop(self.db);
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Emit through the configured dispatcher only
    fn log(&self, event: impl FnOnce()) {
        dispatcher::with_default(&self.config.logger, event);
    }

    fn begin_write(&self) -> Result<WriteTransaction> {
        let mut txn = self.db.begin_write()?;
        txn.set_durability(self.config.engine.durability.into());
        Ok(txn)
    }
}

impl Memory for MemoryStore {
    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        MemoryStore::set(self, key, value)
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        MemoryStore::get(self, key)
    }

    fn delete(&self, key: &str) -> Result<bool> {
        MemoryStore::delete(self, key)
    }

    fn keys(&self) -> Result<Vec<String>> {
        MemoryStore::keys(self)
    }

    fn close(self: Box<Self>) -> Result<()> {
        MemoryStore::close(*self)
    }
}

fn validate(config: &Config) -> Result<()> {
    if config.path.as_os_str().is_empty() {
        return Err(MemoryError::Config("database path is empty".to_string()));
    }
    if config.path.is_dir() {
        return Err(MemoryError::Config(format!(
            "database path is a directory: {}",
            config.path.display()
        )));
    }
    Ok(())
}

fn bucket_exists(txn: &WriteTransaction, name: &str) -> Result<bool> {
    Ok(txn.list_tables()?.any(|handle| handle.name() == name))
}

/// Open the database file, creating it with `mode` if it is missing
#[cfg_attr(not(unix), allow(unused_variables))]
fn create_file(path: &Path, mode: u32) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.read(true).write(true).create(true).truncate(false);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }

    options.open(path)
}
