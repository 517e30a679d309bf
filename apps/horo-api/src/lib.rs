pub mod routes;
pub mod state;

use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(
	version = horo_cli::VERSION,
	rename_all = "kebab",
	styles = horo_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = horo_config::load(&args.config)?;

	init_tracing(&config)?;

	let http_addr: SocketAddr = config.service.http_bind.parse()?;
	let state = AppState::new(config).await?;
	let app = routes::router(state);
	let listener = TcpListener::bind(http_addr).await?;

	tracing::info!(%http_addr, version = horo_cli::VERSION, "HTTP server listening.");

	axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

	tracing::info!("HTTP server stopped.");

	Ok(())
}

fn init_tracing(config: &horo_config::Config) -> color_eyre::Result<()> {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();

	Ok(())
}

async fn shutdown_signal() {
	let ctrl_c = async {
		if let Err(err) = tokio::signal::ctrl_c().await {
			tracing::error!(error = %err, "Failed to listen for Ctrl+C.");
			std::future::pending::<()>().await;
		}

		tracing::info!("Received Ctrl+C, shutting down.");
	};

	#[cfg(unix)]
	let terminate = async {
		use tokio::signal::unix::{SignalKind, signal};

		match signal(SignalKind::terminate()) {
			Ok(mut stream) => {
				stream.recv().await;

				tracing::info!("Received SIGTERM, shutting down.");
			},
			Err(err) => {
				tracing::error!(error = %err, "Failed to install SIGTERM handler.");
				std::future::pending::<()>().await;
			},
		}
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		_ = ctrl_c => {},
		_ = terminate => {},
	}
}
