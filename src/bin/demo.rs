//! Scripted walk through the cache API.
//!
//! Run with `cargo run --features demo --bin demo`. Set `RUST_LOG=rw_cache=trace` to see every
//! write the cache performs.

use rw_cache::Cache;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rw_cache=info,demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cache: Cache<i32, String> = Cache::new();

    cache.put(1, String::from("A"));
    cache.put(2, String::from("B"));
    info!(size = cache.size(), "populated cache");

    println!("{:?}", cache.get(&1)); // Some("A")
    println!("{:?}", cache.get(&2)); // Some("B")
    println!("{:?}", cache.get(&3)); // None

    cache.clear();
    info!(size = cache.size(), "cleared cache");

    println!("{:?}", cache.get(&1)); // None
}
