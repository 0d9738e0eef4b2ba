use anyhow::Context;
use clap::Parser;
use propline::api::{ApiServer, AppState};
use propline::cli::output::{self, OutputMode};
use propline::cli::{commands, Cli, Commands};
use propline::config::{AppConfig, LoggingConfig};
use propline::data::Dataset;
use propline::domain::BetQuery;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        output::print_error(&format!("Error: {e:#}"));
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(dir) = &cli.data_dir {
        config = config.with_data_dir(dir);
    }
    if let Err(errors) = config.validate() {
        anyhow::bail!("Invalid configuration: {}", errors.join("; "));
    }

    match cli.command {
        Commands::Teams { json } => {
            init_logging_simple();
            commands::list_teams(OutputMode::from_json_flag(json))?;
        }
        Commands::Players { team, json } => {
            init_logging_simple();
            let dataset = load_dataset(&config)?;
            commands::list_players(&dataset, &team, OutputMode::from_json_flag(json))?;
        }
        Commands::Assess {
            team,
            player,
            stat,
            line,
            opponent,
            json,
        } => {
            init_logging_simple();
            let dataset = load_dataset(&config)?;
            let query = BetQuery::new(team, player, stat, line, opponent);
            commands::assess(&dataset, &query, OutputMode::from_json_flag(json))?;
        }
        Commands::Serve { host, port } => {
            init_logging(&config.logging);
            let host = host.unwrap_or(config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            let addr: SocketAddr = format!("{host}:{port}")
                .parse()
                .with_context(|| format!("invalid listen address {host}:{port}"))?;

            let dataset = load_dataset(&config)?;
            ApiServer::new(AppState::new(dataset), addr)
                .run(shutdown_signal())
                .await?;
        }
    }

    Ok(())
}

fn load_dataset(config: &AppConfig) -> anyhow::Result<Dataset> {
    info!(
        "Loading datasets: players={} teams={}",
        config.data.players_path.display(),
        config.data.teams_path.display()
    );
    Ok(Dataset::load(
        &config.data.players_path,
        &config.data.teams_path,
    )?)
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{},propline=debug,tower_http=warn", logging.level))
    });

    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .init();
    }
}

fn init_logging_simple() {
    // Minimal logging for one-shot commands
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .try_init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
