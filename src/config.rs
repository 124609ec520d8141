//! Loading engine configuration (image URLs, pool sizing, generation knobs) from TOML.
//!
//! See `AppConfig`, `EngineSettings` and `CorpusSettings` for the expected schema.
//! Every field has a default, so a partial file (or no file) is fine.

use serde::Deserialize;
use tracing::{error, info};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
  #[serde(default)]
  pub engine: EngineSettings,
  #[serde(default)]
  pub corpus: CorpusSettings,
}

/// Knobs used while building questions.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
  pub image_base_url: String,
  pub poster_size: String,
  pub backdrop_size: String,
  /// Year decoys never go past this.
  pub current_year: i32,
  pub hangman_reveal_probability: f64,
  pub riddle_char_budget: usize,
  /// Pools smaller than this are replaced by the safety-net slice.
  pub min_pool_size: usize,
  pub safety_net_size: usize,
  /// Levels above this draw from the daily pool even outside daily mode.
  pub daily_pool_above_level: i64,
}

impl Default for EngineSettings {
  fn default() -> Self {
    Self {
      image_base_url: "https://image.tmdb.org/t/p/".into(),
      poster_size: "w500".into(),
      backdrop_size: "w780".into(),
      current_year: 2026,
      hangman_reveal_probability: 0.6,
      riddle_char_budget: 180,
      min_pool_size: 15,
      safety_net_size: 300,
      daily_pool_above_level: 800,
    }
  }
}

impl EngineSettings {
  pub fn poster_url(&self, path: &str) -> String {
    format!("{}{}{}", self.image_base_url, self.poster_size, path)
  }

  pub fn backdrop_url(&self, path: &str) -> String {
    format!("{}{}{}", self.image_base_url, self.backdrop_size, path)
  }
}

/// Where the corpus lives and how it is sliced into level pools.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CorpusSettings {
  pub path: String,
  pub total_levels: i64,
  pub level_pool_size: usize,
  /// Share of the corpus (most popular first) served as the daily pool.
  pub daily_share: f64,
}

impl Default for CorpusSettings {
  fn default() -> Self {
    Self {
      path: "movies_cache.json".into(),
      total_levels: 500,
      level_pool_size: 100,
      daily_share: 0.15,
    }
  }
}

pub fn parse_config(s: &str) -> Result<AppConfig, toml::de::Error> {
  toml::from_str::<AppConfig>(s)
}

/// Load `AppConfig` from CINESAGA_CONFIG_PATH, then apply MOVIE_CACHE_FILE.
/// Any IO/parse error is logged and the defaults are used instead.
pub fn load_config_from_env() -> AppConfig {
  let mut cfg = match std::env::var("CINESAGA_CONFIG_PATH") {
    Ok(path) => match std::fs::read_to_string(&path) {
      Ok(s) => match parse_config(&s) {
        Ok(cfg) => {
          info!(target: "cinesaga", %path, "Loaded engine config (TOML)");
          cfg
        }
        Err(e) => {
          error!(target: "cinesaga", %path, error = %e, "Failed to parse TOML config; using defaults");
          AppConfig::default()
        }
      },
      Err(e) => {
        error!(target: "cinesaga", %path, error = %e, "Failed to read TOML config file; using defaults");
        AppConfig::default()
      }
    },
    Err(_) => AppConfig::default(),
  };

  if let Ok(path) = std::env::var("MOVIE_CACHE_FILE") {
    cfg.corpus.path = path;
  }
  cfg
}
