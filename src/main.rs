//! Instrumented Cache demo
//!
//! Connects to Redis, stores one value of each scalar type, reads them back,
//! and prints the replay of the store calls.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use instrumented_cache::{Cache, Config, STORE_METHOD};

/// Demo entry point.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect and flush the configured database
/// 4. Store and read back sample values
/// 5. Print the call replay and close the connection
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "instrumented_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: host={}, port={}, db={}, connect_timeout={}s",
        config.host, config.port, config.db, config.connect_timeout
    );

    let mut cache = Cache::connect(&config)
        .with_context(|| format!("could not open cache at {}", config.url()))?;
    info!("Cache ready at {}", cache.client().url());

    let text = cache.store("foo")?;
    let bytes = cache.store(b"bar".to_vec())?;
    let integer = cache.store(42i64)?;
    let float = cache.store(2.5f64)?;

    println!("{} -> {:?}", text, cache.get_text(&text)?);
    println!("{} -> {:?}", bytes, cache.get(&bytes)?);
    println!("{} -> {:?}", integer, cache.get_integer(&integer)?);
    println!("{} -> {:?}", float, cache.get_float(&float)?);

    println!("{}", cache.replay(STORE_METHOD)?);

    cache.close();
    Ok(())
}
