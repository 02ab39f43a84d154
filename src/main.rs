use anyhow::Context;
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use shawty::{AppConfig, FileStore, HttpShortenerApi, LinkCache, LinkRecord};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// ── CLI ────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "shawty", version, about = "Short links with superpowers")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List cached short links, newest first (the default)
    List,
    /// Shorten a URL and add it to the local list
    Create {
        /// The long URL to shorten
        url: String,
        /// Expiration date for the link, YYYY-MM-DD
        #[arg(long)]
        expires: Option<NaiveDate>,
    },
    /// Remove a link from the local list by its key
    Remove { key: String },
}

// ── Entry point ────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (ignore error if file is absent — env vars may already be set)
    dotenvy::dotenv().ok();

    // Initialise structured logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shawty=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    let api = HttpShortenerApi::new(
        config.api_base_url.clone(),
        Duration::from_secs(config.http_timeout_secs),
    )
    .context("building API client")?;
    let store = FileStore::new(&config.store_path);
    let mut cache = LinkCache::new(api, store);

    // The startup load runs to completion before any user mutation can
    // touch the persisted slot.
    cache.load().await?;

    match cli.command.unwrap_or(Command::List) {
        Command::List => print_links(cache.links()),
        Command::Create { url, expires } => {
            let expire_at = expires
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc());
            let record = cache.create(url.trim(), expire_at).await?;
            tracing::info!("Created short link '{}'", record.key);
            println!("{} -> {}", record.short_url, record.long_url);
        }
        Command::Remove { key } => {
            cache.remove(&key).await?;
            tracing::info!("Removed '{}' from the local list", key);
        }
    }

    Ok(())
}

// ── Rendering ──────────────────────────────────────────────────────────────

fn print_links(links: &[LinkRecord]) {
    if links.is_empty() {
        println!("No short links yet. Create one with `shawty create <url>`.");
        return;
    }

    let now = Utc::now();
    for link in links {
        println!(
            "{:>10}  {}  ->  {}  [{} click(s), {}]",
            link.key,
            link.short_url,
            link.long_url,
            link.clicks,
            expiry_badge(link, now),
        );
    }
}

fn expiry_badge(link: &LinkRecord, now: DateTime<Utc>) -> String {
    let days = (link.expire_at - now).num_days();
    if days <= 0 {
        "expires today".into()
    } else {
        format!("expires in {days}d")
    }
}
