use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ddbcache::cli::{parse_value, Cli, Commands};
use ddbcache::output::{format_ack, format_value};
use ddbcache::DynamoDbCache;
use ddbcache_core::cache::Cache;
use ddbcache_core::storage::CallOptions;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ddbcache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.config();
    tracing::debug!(
        table = %config.cache.table_name,
        destination = %config.connection.target_display(),
        "Connecting"
    );
    let cache = DynamoDbCache::connect(config.cache, &config.connection).await?;

    match cli.command {
        Commands::Get {
            key,
            consistent_read,
        } => {
            let mut options = CallOptions::new();
            if consistent_read {
                options = options.with_consistent_read(true);
            }

            match cache.get(&key.parse_key()?, &options).await? {
                Some(value) => println!("{}", format_value(&value, cli.format)),
                None => {
                    if !cli.quiet {
                        eprintln!("Not found: {}", key.key);
                    }
                }
            }
        }
        Commands::Set {
            key,
            value,
            value_json,
            write,
        } => {
            let value = parse_value(&value, value_json)?;
            if !cache.is_cacheable_value(&value) {
                bail!("Value is not cacheable");
            }

            let ack = cache
                .set(&key.parse_key()?, value, &write.call_options()?)
                .await?;
            match format_ack(&ack, cli.format) {
                Some(output) => println!("{}", output),
                None if !cli.quiet => println!("Stored {}", key.key),
                None => {}
            }
        }
        Commands::Delete { key, write } => {
            let ack = cache
                .delete(&key.parse_key()?, &write.call_options()?)
                .await?;
            match format_ack(&ack, cli.format) {
                Some(output) => println!("{}", output),
                None if !cli.quiet => println!("Deleted {}", key.key),
                None => {}
            }
        }
    }

    Ok(())
}
