//! CLI entrypoint for Trivia API
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;
use trivia_infrastructure::{
    ConfigLoader, Database, FileConfig, Severity, SqliteCategoryRepository, SqliteDrinkRepository,
    SqliteQuestionRepository, StaticTokenPermissions, seed_if_empty,
};
use trivia_presentation::{AppState, Cli, Ports, build_router};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    apply_overrides(&mut config, &cli);

    let _log_guard = init_logging(&config, cli.verbose)?;

    info!("Starting Trivia API");

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => error!("{}", issue.message),
        }
    }
    if issues.iter().any(|i| i.severity == Severity::Error) {
        bail!("Invalid configuration; see the errors above");
    }

    // === Dependency Injection ===
    let db = open_database(&config)?;
    match db.path() {
        Some(path) => info!("Database stored at {}", path.display()),
        None => info!("Database is in memory"),
    }
    if config.database.seed {
        seed_if_empty(&db).await.context("Failed to seed database")?;
    }

    let permissions = StaticTokenPermissions::new(config.auth.to_grants().0);
    if permissions.token_count() == 0 {
        warn!("No access tokens configured; gated drink routes will refuse every request");
    } else {
        info!("{} access tokens configured", permissions.token_count());
    }

    let ports = Ports {
        questions: Arc::new(SqliteQuestionRepository::new(db.clone())),
        categories: Arc::new(SqliteCategoryRepository::new(db.clone())),
        drinks: Arc::new(SqliteDrinkRepository::new(db)),
        permissions: Arc::new(permissions),
    };
    let state = AppState::new(ports, config.listing_params());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

/// Command-line flags win over every configuration source.
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(bind) = cli.bind {
        config.server.bind = bind.to_string();
    }
    if let Some(path) = &cli.database {
        config.database.path = Some(path.clone());
        config.database.in_memory = false;
    }
    if cli.in_memory {
        config.database.in_memory = true;
    }
    if cli.seed {
        config.database.seed = true;
    }
}

/// Filter precedence: `-v` flags, then `RUST_LOG`, then `[logging] filter`,
/// then `warn`.
fn log_filter(config: &FileConfig, verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::try_new(config.logging.filter.as_deref().unwrap_or("warn"))
                .unwrap_or_else(|_| EnvFilter::new("warn"))
        }),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    }
}

/// Install the global subscriber. The returned guard flushes the log file on
/// drop and must live until shutdown.
fn init_logging(config: &FileConfig, verbose: u8) -> Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match &config.logging.file {
        Some(path) => {
            let (writer, guard) = non_blocking_file(path)?;
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(log_filter(config, verbose))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(file_layer)
        .init();

    Ok(guard)
}

fn non_blocking_file(
    path: &Path,
) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}

fn open_database(config: &FileConfig) -> Result<Database> {
    if config.database.in_memory {
        warn!("Using an in-memory database; data is lost on exit");
        return Database::open_in_memory().context("Failed to create in-memory database");
    }

    let path = config
        .database
        .resolved_path()
        .context("No database path configured")?;
    Database::open(&path).with_context(|| format!("Failed to open database {}", path.display()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cli_flags_override_config() {
        let mut config = FileConfig::default();
        config.database.in_memory = true;
        let cli = Cli::parse_from([
            "trivia-api",
            "--bind",
            "0.0.0.0:9000",
            "--database",
            "/tmp/t.db",
            "--seed",
        ]);

        apply_overrides(&mut config, &cli);

        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.database.path, Some(PathBuf::from("/tmp/t.db")));
        assert!(!config.database.in_memory);
        assert!(config.database.seed);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let mut config = FileConfig::default();
        config.database.seed = true;
        let before = config.clone();

        apply_overrides(&mut config, &Cli::parse_from(["trivia-api"]));

        assert_eq!(config, before);
    }

    #[test]
    fn test_verbose_filter() {
        let config = FileConfig::default();
        assert_eq!(log_filter(&config, 2).to_string(), "debug");
        assert_eq!(log_filter(&config, 5).to_string(), "trace");
    }
}
