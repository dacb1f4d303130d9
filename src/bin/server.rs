use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use taskcards::{
    config::{self, CliArgs, Config},
    create_app, db, run_migrations,
};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// `RUST_LOG` if set, otherwise our crate and tower_http at info (debug with `--debug`)
fn env_filter(debug: bool) -> EnvFilter {
    let default_directives = if debug { "taskcards=debug,tower_http=debug" } else { "taskcards=info,tower_http=info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

/// Sets up stdout logging and, when `log_dir` is configured, a daily JSON log file
///
/// The returned guard must stay alive for buffered file logs to be flushed.
fn init_tracing(config: &Config, debug: bool) -> Option<WorkerGuard> {
    let env_filter = env_filter(debug);

    let stdout_layer = tracing_subscriber::fmt::layer().boxed();

    let (file_layer, guard) = match &config.log_dir {
        Some(log_dir) => {
            let appender = tracing_appender::rolling::daily(log_dir, "taskcards.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    guard
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables before clap reads its env fallbacks
    dotenv::dotenv().ok();

    let args = CliArgs::parse();
    // The global subscriber depends on the config, so loading it logs to stdout only
    let config = tracing::subscriber::with_default(
        tracing_subscriber::fmt().with_env_filter(env_filter(args.debug)).finish(),
        || config::get_config(&args),
    );
    let _guard = init_tracing(&config, args.debug);

    info!(
        database_url = %config.database_url,
        bind_address = %config.bind_address,
        "Starting taskcards"
    );

    let pool = db::init_pool(&config.database_url)?;
    {
        let mut conn = pool.get().context("failed to get a connection for migrations")?;
        run_migrations(&mut conn)?;
    }

    let app = create_app(Arc::new(pool), &config);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address))?;
    info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}
