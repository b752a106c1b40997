//! Recency demo - replays access traces against an LRU cache

mod handler;
mod trace;

use anyhow::{Context, Result};
use clap::Parser;
use recency::LruCache;
use tracing::info;

use crate::handler::{CommandHandler, Outcome};
use crate::trace::{parse_trace, DEFAULT_TRACE};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cache capacity (number of items)
    #[arg(short, long, default_value_t = 3)]
    capacity: usize,

    /// Operations to replay: put:KEY=VALUE, get:KEY, del:KEY
    ///
    /// Defaults to a five-day trace through the cache.
    #[arg(value_name = "OP")]
    ops: Vec<String>,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let ops = if args.ops.is_empty() {
        parse_trace(DEFAULT_TRACE)?
    } else {
        parse_trace(args.ops.as_slice())?
    };

    let cache: LruCache<String, String> =
        LruCache::new(args.capacity).context("Failed to create cache")?;
    info!("Cache capacity: {}", cache.capacity());
    info!("Replaying {} operation(s)", ops.len());

    let mut handler = CommandHandler::new(cache);
    for op in ops {
        let line = format!("{:?}", op);
        match handler.handle(op) {
            Outcome::Inserted { evicted: Some((key, value)) } => {
                println!("{:<40} inserted, evicted {}={}", line, key, value)
            }
            Outcome::Inserted { evicted: None } => println!("{:<40} inserted", line),
            Outcome::Updated => println!("{:<40} updated", line),
            Outcome::Hit(value) => println!("{:<40} hit {}", line, value),
            Outcome::Miss => println!("{:<40} miss", line),
            Outcome::Removed(Some(value)) => println!("{:<40} removed {}", line, value),
            Outcome::Removed(None) => println!("{:<40} not present", line),
        }
    }

    let cache = handler.cache();
    println!("\nMost to least recently used:");
    for (key, value) in cache {
        println!("  {} = {}", key, value);
    }

    let stats = cache.stats();
    println!("\nEntries:    {}/{}", cache.len(), cache.capacity());
    println!("Hits:       {}", stats.hits());
    println!("Misses:     {}", stats.misses());
    println!("Hit ratio:  {:.2}", stats.hit_ratio());
    println!("Inserts:    {}", stats.inserts());
    println!("Updates:    {}", stats.updates());
    println!("Evictions:  {}", stats.evictions());

    Ok(())
}
