use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use weblarek::config::Config;
use weblarek::logging::init_tracing;

/// Terminal storefront for the Web-Larek shop.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Shop origin, e.g. https://larek-api.nomoreparties.co
    #[arg(long)]
    api_origin: Option<String>,

    /// Log level or filter directive (RUST_LOG still wins).
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load config")?;
    config.apply_env();
    config.apply_origin_override(cli.api_origin);
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.validate().context("invalid config")?;

    init_tracing(&config.logging).context("failed to open log file")?;
    weblarek::ui::run(&config)
}
