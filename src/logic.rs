//! Core behaviors behind the HTTP handlers.
//!
//! This includes:
//!   - Serving a level batch (normal or daily) from the current corpus snapshot
//!   - Reloading the corpus file

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::pipeline::QuestionEngine;
use crate::protocol::{GameOut, ReloadOut};
use crate::state::AppState;
use crate::tier::Tier;
use crate::util::trunc_for_log;

/// Generate one batch for `level`. A `seed` replays the same batch for the
/// same corpus snapshot; without it the RNG is seeded from entropy.
#[instrument(level = "info", skip(state))]
pub async fn start_level(state: &AppState, level: i64, is_daily: bool, seed: Option<u64>) -> GameOut {
  let corpus = state.snapshot().await;
  let mut rng = match seed {
    Some(s) => StdRng::seed_from_u64(s),
    None => StdRng::from_entropy(),
  };

  let engine = QuestionEngine::new(corpus.as_ref(), &state.config.engine);
  let questions = engine.generate_level_content(level, is_daily, &mut rng);
  let batch_id = Uuid::new_v4().to_string();
  let tier = Tier::resolve(level, is_daily);

  if questions.is_empty() {
    warn!(target: "cinesaga", %batch_id, level, daily = is_daily, "No questions generated (empty corpus?)");
  } else {
    info!(target: "cinesaga", %batch_id, level, daily = is_daily, ?tier, questions = questions.len(), "Level batch generated");
    for q in &questions {
      debug!(target: "cinesaga", %batch_id, movie_id = q.movie_id, kind = ?q.kind, text = %trunc_for_log(&q.text, 80), "Question");
    }
  }

  GameOut { batch_id, level, tier, daily: is_daily, questions }
}

#[instrument(level = "info", skip(state))]
pub async fn reload_corpus(state: &AppState) -> ReloadOut {
  match state.reload().await {
    Ok(movies) => ReloadOut { ok: true, movies, error: None },
    Err(e) => {
      let movies = state.snapshot().await.len();
      ReloadOut { ok: false, movies, error: Some(e.to_string()) }
    }
  }
}
