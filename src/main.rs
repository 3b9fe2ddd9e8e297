//! Page Composer - assembles pages from reusable fragments
//!
//! Composes the requested pages through the cache and prints them as JSON.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use page_composer::compose::DEFAULT_PAGE;
use page_composer::{spawn_sweep_task, ComposeError, Config, PageComposer};

/// Compose pages from their registered fragments.
#[derive(Debug, Parser)]
#[command(name = "page-composer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Page names to compose
    #[arg(default_value = DEFAULT_PAGE)]
    pages: Vec<String>,

    /// Compose the page list this many times
    #[arg(short, long, default_value_t = 1)]
    repeat: u32,

    /// Print cache statistics after composing
    #[arg(long)]
    stats: bool,
}

/// Main entry point for the page composer.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from `.env` and environment variables
/// 3. Create registry, cache and composer
/// 4. Start background sweep task
/// 5. Compose the requested pages
/// 6. Abort the sweep task
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "page_composer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::load();
    info!(
        "Configuration loaded: cache_ttl={}s, sweep_interval={}s, site_name={:?}",
        config.cache_ttl, config.sweep_interval, config.site_name
    );

    let composer = PageComposer::from_config(&config);
    let sweep_handle = spawn_sweep_task(
        Arc::clone(composer.cache()),
        Duration::from_secs(config.sweep_interval),
    );

    let mut not_found = 0usize;
    for _ in 0..cli.repeat {
        for page_name in &cli.pages {
            match composer.compose(page_name) {
                Ok(page) => {
                    let json = serde_json::to_string_pretty(&page)
                        .context("failed to serialize composed page")?;
                    println!("{}", json);
                }
                Err(ComposeError::PageNotFound(name)) => {
                    not_found += 1;
                    eprintln!("404 - Page Not Found: {}", name);
                }
            }
        }
    }

    if cli.stats {
        let stats = composer.cache().stats();
        let json =
            serde_json::to_string_pretty(&stats).context("failed to serialize cache stats")?;
        println!("{}", json);
        info!("Cache hit rate: {:.2}", stats.hit_rate());
    }

    sweep_handle.abort();
    if not_found > 0 {
        warn!("{} page request(s) were not found", not_found);
        return Ok(ExitCode::FAILURE);
    }

    info!("Composition complete");
    Ok(ExitCode::SUCCESS)
}
