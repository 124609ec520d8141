//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs parameters and basic result info.

use std::sync::Arc;
use axum::{extract::{State, Query}, http::StatusCode, Json, response::{IntoResponse, Response}};
use tracing::{info, instrument};

use crate::protocol::*;
use crate::state::AppState;
use crate::logic::*;

#[instrument(level = "info", skip(state))]
pub async fn http_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let movies = state.snapshot().await.len();
  Json(HealthOut { ok: movies > 0, movies })
}

#[instrument(level = "info", skip(state), fields(level = ?q.level, seed = ?q.seed))]
pub async fn http_game_start(
  State(state): State<Arc<AppState>>,
  Query(q): Query<GameQuery>,
) -> Response {
  serve_batch(&state, q, false).await
}

#[instrument(level = "info", skip(state), fields(level = ?q.level, seed = ?q.seed))]
pub async fn http_game_daily(
  State(state): State<Arc<AppState>>,
  Query(q): Query<GameQuery>,
) -> Response {
  serve_batch(&state, q, true).await
}

// An empty batch only happens with an empty corpus.
async fn serve_batch(state: &AppState, q: GameQuery, is_daily: bool) -> Response {
  let level = q.level.unwrap_or(1);
  let out = start_level(state, level, is_daily, q.seed).await;
  info!(target: "cinesaga", batch_id = %out.batch_id, level, daily = is_daily, questions = out.questions.len(), "HTTP batch served");
  if out.questions.is_empty() {
    (StatusCode::SERVICE_UNAVAILABLE, Json(out)).into_response()
  } else {
    Json(out).into_response()
  }
}

#[instrument(level = "info", skip(state))]
pub async fn http_post_reload(State(state): State<Arc<AppState>>) -> Response {
  let out = reload_corpus(&state).await;
  let status = if out.ok { StatusCode::OK } else { StatusCode::INTERNAL_SERVER_ERROR };
  (status, Json(out)).into_response()
}
