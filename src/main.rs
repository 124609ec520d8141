//! CineSaga · Movie Quiz Engine Backend
//!
//! - Axum HTTP API serving level and daily question batches
//! - Movie corpus loaded once from a JSON cache file (hot-reloadable)
//!
//! Important env variables:
//!   PORT                 : u16 (default 3000)
//!   MOVIE_CACHE_FILE     : corpus JSON path (overrides the config file)
//!   CINESAGA_CONFIG_PATH : path to TOML config (engine + corpus sections)
//!   LOG_LEVEL            : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT           : "pretty" (default) or "json"

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{error, info};

use cinesaga_engine::config::load_config_from_env;
use cinesaga_engine::provider::MovieCorpus;
use cinesaga_engine::routes::build_router;
use cinesaga_engine::state::AppState;
use cinesaga_engine::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  let config = load_config_from_env();

  // No corpus, no game: fail fast.
  let corpus = MovieCorpus::load(&config.corpus.path, &config.corpus).map_err(|e| {
    error!(target: "cinesaga", error = %e, "Cannot start without a movie corpus");
    e
  })?;

  let state = Arc::new(AppState::new(config, corpus));

  // Build the HTTP router with routes, CORS and tracing layers.
  let app = build_router(state.clone());

  // Read port from env or default to 3000.
  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "cinesaga", %addr, movies = state.snapshot().await.len(), "HTTP server listening");
  axum::serve(listener, app).await?;
  Ok(())
}
