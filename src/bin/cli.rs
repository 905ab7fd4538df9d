//! pathmem CLI
//!
//! Inspect and edit a pathmem database file directly.

use std::process;

use clap::{Parser, Subcommand};
use pathmem::{Config, MemoryStore};
use tracing_subscriber::{fmt, EnvFilter};

/// pathmem CLI
#[derive(Parser, Debug)]
#[command(name = "pathmem-cli")]
#[command(about = "CLI for pathmem database files")]
#[command(version)]
struct Args {
    /// Database file
    #[arg(short, long, default_value = pathmem::config::DEFAULT_PATH)]
    db: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a value by key
    Get {
        /// The key to get
        key: String,
    },

    /// Set a key-value pair
    Set {
        /// The key to set
        key: String,

        /// The value to set
        value: String,
    },

    /// Delete a key
    Del {
        /// The key to delete
        key: String,
    },

    /// List every key
    Keys,

    /// List every bucket
    Buckets,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pathmem=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .path(&args.db)
        .logger(tracing::dispatcher::get_default(|dispatch| dispatch.clone()))
        .build();

    let store = match MemoryStore::open(config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            process::exit(1);
        }
    };

    let outcome = run(&store, args.command);
    let closed = store.close();

    if let Err(e) = outcome.and(closed) {
        tracing::error!("{}", e);
        process::exit(1);
    }
}

fn run(store: &MemoryStore, command: Commands) -> pathmem::Result<()> {
    match command {
        Commands::Get { key } => match store.get(&key)? {
            Some(value) => println!("{}", String::from_utf8_lossy(&value)),
            None => println!("(nil)"),
        },
        Commands::Set { key, value } => {
            store.set(&key, value.as_bytes())?;
            println!("OK");
        }
        Commands::Del { key } => {
            let deleted = store.delete(&key)?;
            println!("{}", if deleted { "1" } else { "0" });
        }
        Commands::Keys => {
            for key in store.keys()? {
                println!("{key}");
            }
        }
        Commands::Buckets => {
            for bucket in store.buckets()? {
                println!("{bucket}");
            }
        }
    }
    Ok(())
}
