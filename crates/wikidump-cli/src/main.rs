use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use wikidump_acquire::WikipediaSource;

mod config;

#[derive(Parser)]
#[command(name = "wikidump")]
#[command(about = "Fetch encyclopedia articles by title and dump each one to a text file")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long)]
    utc: bool,

    /// TOML config file (defaults to ./wikidump.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Wikipedia language edition (e.g., "es", "en")
    #[arg(short, long)]
    lang: Option<String>,

    /// Output directory for article text files
    #[arg(short = 'O', long)]
    output_dir: Option<PathBuf>,

    /// File with one topic title per line (replaces the built-in list)
    #[arg(short, long)]
    topics: Option<PathBuf>,

    /// Resolve each title through the search API before fetching it
    #[arg(long)]
    auto_suggest: bool,

    /// Also write the run summary as JSON to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Map log level, suppressing noisy HTTP internals at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn  => "warn",
        LogLevel::Info  => "info",
        LogLevel::Debug => "debug,hyper_util=warn,rustls=warn",
        LogLevel::Trace => "trace,hyper_util=warn,rustls=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    // Logs go to stderr; stdout carries the progress lines.
    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }

    let file_config = config::load_config(cli.config.as_deref())?;
    let settings = config::Settings::resolve(
        file_config,
        config::Overrides {
            language: cli.lang,
            output_dir: cli.output_dir,
            topics_file: cli.topics,
            auto_suggest: cli.auto_suggest,
        },
    )?;

    tracing::info!(
        lang = %settings.language,
        topics = settings.topics.len(),
        output_dir = %settings.output_dir.display(),
        auto_suggest = settings.source.auto_suggest,
        "Dumping articles"
    );

    let source = WikipediaSource::new(&settings.language, settings.source)?;
    let mut stdout = std::io::stdout().lock();
    let summary =
        wikidump_acquire::run(&source, &settings.topics, &settings.output_dir, &mut stdout).await?;

    if let Some(path) = &cli.report {
        wikidump_acquire::output::write_report(&summary, path)?;
    }

    Ok(())
}
