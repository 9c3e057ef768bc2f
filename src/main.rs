use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vuoro::config::Config;
use vuoro::discord::{notify::notification_lines, render_table, DiscordClient};
use vuoro::engine::{merge_schedules, rare_slots};
use vuoro::models::Venue;
use vuoro::runner::run_once;
use vuoro::source::{CintoiaSource, SlotSource};
use vuoro::store::{ChannelStore, FileStore, SnapshotStore};

#[derive(Parser)]
#[command(
    name = "vuoro",
    version,
    about = "Tali badminton slot watcher with Discord publishing",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true, default_value = "text")]
    log_format: String,

    /// TOML config file; falls back to environment variables
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one poll: scrape, publish table, notify, persist snapshot
    Run {
        /// Keep the snapshot in a local file instead of the history channel
        #[arg(long)]
        snapshot_file: Option<PathBuf>,
    },

    /// Scrape and print schedules without touching Discord or state
    Preview {
        /// Override the number of days to scan
        #[arg(long)]
        days: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(&cli.log_format, cli.verbose)?;

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    config.validate()?;

    match cli.command {
        Commands::Run { snapshot_file } => {
            run(&config, snapshot_file).await?;
        }
        Commands::Preview { days } => {
            if let Some(days) = days {
                config.scraper.days_ahead = days;
            }
            preview(&config).await?;
        }
    }

    Ok(())
}

fn setup_tracing(format: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("vuoro=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("vuoro=info,warn")
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

fn build_sources(config: &Config) -> Result<Vec<Box<dyn SlotSource>>> {
    Venue::ALL
        .into_iter()
        .map(|venue| {
            let source = CintoiaSource::new(
                venue,
                config.scraper.email.clone(),
                config.scraper.password.clone(),
                config.request_timeout(),
            )?;
            Ok(Box::new(source) as Box<dyn SlotSource>)
        })
        .collect()
}

async fn run(config: &Config, snapshot_file: Option<PathBuf>) -> Result<()> {
    let sources = build_sources(config)?;
    let client = DiscordClient::new(config.discord.token.clone())?;
    let store: Box<dyn SnapshotStore> = match snapshot_file {
        Some(path) => Box::new(FileStore::new(path)),
        None => Box::new(ChannelStore::new(
            client.clone(),
            config.discord.history_channel_id.clone(),
        )),
    };

    let report = run_once(config, &sources, &client, store.as_ref()).await?;

    tracing::info!(
        dates = report.canonical.len(),
        rare_slots = report.rare.values().map(Vec::len).sum::<usize>(),
        new_slots = report.delta.values().map(Vec::len).sum::<usize>(),
        notified = report.notified,
        "run finished"
    );
    Ok(())
}

async fn preview(config: &Config) -> Result<()> {
    let sources = build_sources(config)?;

    let mut per_venue = Vec::with_capacity(sources.len());
    for source in &sources {
        per_venue.push(
            source
                .open_slots(&config.scraper.desired_times, config.scraper.days_ahead)
                .await?,
        );
    }

    let canonical = merge_schedules(per_venue);
    let rare = rare_slots(&canonical, &config.rarity.rules);

    println!("{}", render_table(&canonical, chrono::Utc::now()));
    println!();
    if rare.is_empty() {
        println!("No rare slots in the window.");
    } else {
        println!("Rare slots:");
        for line in notification_lines(&rare) {
            println!("  {line}");
        }
    }
    Ok(())
}
