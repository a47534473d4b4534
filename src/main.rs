use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use m3u_ingest::{
    config::{Config, PlaylistSourceConfig},
    ingestor::M3uIngestor,
    models::Playlist,
};

#[derive(Parser)]
#[command(name = "m3u-ingest")]
#[command(version = "0.1.0")]
#[command(about = "Fetch extended-M3U playlists and emit structured channel lists")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Fetch a single playlist URL instead of the configured sources
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,

    /// Source name used together with --url
    #[arg(short, long, default_value = "Ad-hoc playlist")]
    name: String,

    /// Print a one-line summary per source instead of JSON
    #[arg(short, long)]
    summary: bool,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays valid JSON.
    let log_filter = format!("m3u_ingest={}", cli.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    std::env::set_var("CONFIG_FILE", &cli.config);
    let config = Config::load()?;
    info!("Configuration loaded from: {}", cli.config);

    let sources = match cli.url {
        Some(url) => vec![PlaylistSourceConfig {
            name: cli.name.clone(),
            url,
        }],
        None => config.sources.clone(),
    };

    if sources.is_empty() {
        anyhow::bail!(
            "no playlist sources configured; add [[sources]] entries to {} or pass --url",
            cli.config
        );
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.ingestion.timeout_seconds))
        .user_agent(config.ingestion.user_agent.clone())
        .build()?;
    let ingestor = M3uIngestor::with_client(client);

    // Each retrieval is independent; fetch all configured sources at once.
    let fetches = sources.iter().map(|source| {
        let ingestor = &ingestor;
        async move { (source, ingestor.fetch_and_parse(&source.url).await) }
    });
    let results = futures::future::join_all(fetches).await;

    let mut playlists = Vec::new();
    let mut failures = 0usize;
    for (source, result) in results {
        match result {
            Ok(channels) => {
                info!(
                    "Ingested {} channels from source '{}'",
                    channels.len(),
                    source.name
                );
                playlists.push(Playlist {
                    id: Uuid::new_v4(),
                    name: source.name.clone(),
                    url: source.url.clone(),
                    channels,
                    last_updated: Utc::now(),
                });
            }
            Err(e) => {
                error!("Failed to ingest source '{}': {}", source.name, e);
                failures += 1;
            }
        }
    }

    if cli.summary {
        for playlist in &playlists {
            println!(
                "{}: {} channels ({})",
                playlist.name,
                playlist.channels.len(),
                playlist.url
            );
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&playlists)?);
    }

    if playlists.is_empty() && failures > 0 {
        anyhow::bail!("all {} playlist sources failed", failures);
    }

    Ok(())
}
