use anyhow::Context;
use clap::Parser;
use pitchcast::api::{ApiServer, AppState};
use pitchcast::cli::{self, Cli, Commands, OutputMode};
use pitchcast::config::AppConfig;
use pitchcast::services::PitchAnalysisService;
use std::net::SocketAddr;
use tracing::{error, info};

mod main_runtime;

use main_runtime::{init_logging, init_logging_simple};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.config_dir)?;

    match cli.command {
        None => {
            init_logging(&config.logging);
            run_server(config, None).await?;
        }
        Some(Commands::Serve { port }) => {
            init_logging(&config.logging);
            run_server(config, port).await?;
        }
        Some(Commands::Dates { player, json }) => {
            init_logging_simple();
            let service = PitchAnalysisService::from_config(&config)?;
            let games = service.season_game_dates(&player).await?;
            cli::print_game_dates(&games, OutputMode::from_json_flag(json))?;
        }
        Some(Commands::Analyze { player, date, json }) => {
            init_logging_simple();
            let service = PitchAnalysisService::from_config(&config)?;
            let analysis = service.game_analysis(&player, &date).await?;
            cli::print_analysis(&analysis, OutputMode::from_json_flag(json))?;
        }
    }

    Ok(())
}

fn load_config(config_dir: &str) -> anyhow::Result<AppConfig> {
    let config = AppConfig::load_from(config_dir)
        .with_context(|| format!("failed to load configuration from {config_dir}"))?;

    if let Err(errors) = config.validate() {
        for e in &errors {
            eprintln!("config: {e}");
        }
        anyhow::bail!("invalid configuration ({} problems)", errors.len());
    }
    Ok(config)
}

async fn run_server(config: AppConfig, port: Option<u16>) -> anyhow::Result<()> {
    let port = port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", config.server.host, port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", config.server.host, port))?;

    let service = PitchAnalysisService::from_config(&config)?;
    info!(
        players = config.players.len(),
        cache = service.has_cache(),
        season_start = %config.season.start_date,
        season_end = %config.season.end_date,
        "pitch prediction service configured"
    );

    let state = AppState::new(service, config.players);
    if let Err(e) = ApiServer::new(state, addr).run().await {
        error!("Server exited with error: {}", e);
        return Err(e.into());
    }
    Ok(())
}
