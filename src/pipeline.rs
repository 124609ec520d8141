//! Level content pipeline: turns (level, daily flag) into a batch of questions.
//!
//! The engine never fails for a non-empty corpus. Starved pools widen to the
//! safety-net slice, builder failures become anagrams and an empty batch gets
//! one guaranteed anagram.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, instrument, warn};

use crate::blueprint;
use crate::builders::{build_anagram, BuildContext};
use crate::config::EngineSettings;
use crate::domain::{Movie, Question};
use crate::provider::DataProvider;
use crate::tier::{question_count, Tier};

pub struct QuestionEngine<'a> {
  provider: &'a dyn DataProvider,
  settings: &'a EngineSettings,
}

impl<'a> QuestionEngine<'a> {
  pub fn new(provider: &'a dyn DataProvider, settings: &'a EngineSettings) -> Self {
    Self { provider, settings }
  }

  /// Level pool, or the most popular slice of the corpus when the pool is
  /// smaller than `min_pool_size`.
  fn resolve_pool(&self, level: i64, is_daily: bool) -> &'a [Movie] {
    let provider: &'a dyn DataProvider = self.provider;
    let daily_pool = is_daily || level > self.settings.daily_pool_above_level;
    let pool = provider.pool_by_level(level, daily_pool);
    if pool.len() >= self.settings.min_pool_size {
      return pool;
    }
    let all = provider.all_movies();
    let net = &all[..all.len().min(self.settings.safety_net_size)];
    debug!(target: "engine", level, pool = pool.len(), safety_net = net.len(), "Pool starved; using safety net");
    net
  }

  /// Generate the questions for one level visit. Empty only when the corpus is.
  #[instrument(level = "debug", skip(self, rng))]
  pub fn generate_level_content<R: Rng + ?Sized>(&self, level: i64, is_daily: bool, rng: &mut R) -> Vec<Question> {
    let corpus = self.provider.all_movies();
    let pool = self.resolve_pool(level, is_daily);
    if pool.is_empty() {
      warn!(target: "engine", level, is_daily, "Empty pool; returning empty batch");
      return Vec::new();
    }

    let tier = Tier::resolve(level, is_daily);
    let count = question_count(level, is_daily).min(pool.len());
    let ctx = BuildContext { pool, corpus, settings: self.settings };

    let picked: Vec<&Movie> = pool.choose_multiple(rng, count).collect();
    let mut questions = Vec::with_capacity(count);
    for movie in picked {
      let built = match blueprint::select(movie, tier, is_daily, corpus, rng) {
        Some(bp) => {
          debug!(target: "engine", movie_id = movie.id, blueprint = bp.name(), "Building question");
          bp.build(movie, &ctx, rng).or_else(|| {
            debug!(target: "engine", movie_id = movie.id, blueprint = bp.name(), "Builder precondition failed; anagram instead");
            build_anagram(movie, &ctx, rng)
          })
        }
        None => {
          debug!(target: "engine", movie_id = movie.id, ?tier, "No eligible blueprint; anagram instead");
          build_anagram(movie, &ctx, rng)
        }
      };
      questions.extend(built);
    }

    if questions.is_empty() {
      warn!(target: "engine", level, is_daily, "Batch came out empty; adding a guaranteed anagram");
      if let Some(movie) = pool.choose(rng) {
        questions.extend(build_anagram(movie, &ctx, rng));
      }
    }

    debug!(target: "engine", level, is_daily, ?tier, questions = questions.len(), "Level content ready");
    questions
  }
}
