use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::info;

use marquee_scraper::apis::{factory, LocalFileSource, ScheduleSource};
use marquee_scraper::common::constants::WHATS_ON_PAGE_SOURCE;
use marquee_scraper::common::error::ScrapeError;
use marquee_scraper::config::AppConfig;
use marquee_scraper::infra::SnapshotWriter;
use marquee_scraper::observability::logging::init_logging;
use marquee_scraper::pipeline::clock::ClockTime;
use marquee_scraper::pipeline::orchestrator;

#[derive(Parser)]
#[command(name = "marquee-scraper")]
#[command(about = "Cinema showtime scraper that always publishes a schedule snapshot")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a named source and publish the snapshot
    Publish {
        /// Source to fetch (whats-on-page, showtimes-api)
        #[arg(long, default_value = WHATS_ON_PAGE_SOURCE)]
        source: String,
        /// Override the configured output path
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Run the pipeline over a saved document and print the snapshot
    ParseFile {
        /// Document to parse (markup or plain text)
        #[arg(long)]
        input: PathBuf,
        /// Wall-clock override as HH:MM (defaults to the current local time)
        #[arg(long)]
        now: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    init_logging(config.logging.dir.as_deref());

    match cli.command {
        Commands::Publish { source, out } => {
            println!("🎬 Fetching schedule from source: {}", source);
            let acquired = match factory::create_source(&source, &config) {
                Some(src) => src.fetch_document().await,
                None => Err(ScrapeError::UnknownSource(source.clone())),
            };
            let now_minute = orchestrator::minute_of_day(&Local::now());
            let snapshot = orchestrator::run(&source, acquired, now_minute, config.derive);
            let out_path = out.unwrap_or_else(|| config.output.path.clone());
            SnapshotWriter::new(config.output.pretty).publish(&snapshot, &out_path)?;
            println!("✅ Wrote {}", out_path.display());
        }
        Commands::ParseFile { input, now } => {
            let now_minute = match now.as_deref() {
                Some(token) => match ClockTime::parse(token) {
                    Some(time) => time.minutes(),
                    None => anyhow::bail!("--now must be HH:MM, got {token:?}"),
                },
                None => orchestrator::minute_of_day(&Local::now()),
            };
            info!(input = %input.display(), now_minute, "parsing local document");
            let source = LocalFileSource::new(input);
            let acquired = source.fetch_document().await;
            let snapshot = orchestrator::run(source.source_name(), acquired, now_minute, config.derive);
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }

    Ok(())
}
