//! Movie corpus and the level-scoped pools handed to the engine.
//!
//! The engine only depends on `DataProvider`. `MovieCorpus` is the concrete
//! implementation backed by the JSON cache file: records are sanitized and
//! sorted by popularity (descending) once, then never mutated.

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::config::CorpusSettings;
use crate::domain::Movie;

/// Read-only view of the corpus used by the engine.
pub trait DataProvider: Send + Sync {
  /// Whole corpus, most popular first.
  fn all_movies(&self) -> &[Movie];

  /// Candidate pool for a level. Out-of-range levels are clamped, never rejected.
  fn pool_by_level(&self, level: i64, is_daily: bool) -> &[Movie];
}

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
  #[error("corpus file not readable: {path}: {source}")]
  Io {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error("corpus file is not valid JSON: {path}: {source}")]
  Parse {
    path: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("corpus is empty after sanitization ({raw} raw records)")]
  Empty { raw: usize },
}

#[derive(Clone, Debug)]
pub struct MovieCorpus {
  movies: Vec<Movie>,
  total_levels: i64,
  window_size: usize,
  daily_share: f64,
}

impl MovieCorpus {
  /// Sanitize and sort raw records. Records without id, title or overview are dropped.
  pub fn from_movies(raw: Vec<Movie>, settings: &CorpusSettings) -> Self {
    let raw_len = raw.len();
    let mut movies: Vec<Movie> = raw
      .into_iter()
      .filter(|m| m.id != 0 && !m.title.trim().is_empty() && m.overview().is_some())
      .collect();
    movies.sort_by(|a, b| b.popularity.total_cmp(&a.popularity));

    if movies.len() < raw_len {
      warn!(target: "corpus", dropped = raw_len - movies.len(), "Dropped records missing id/title/overview");
    }

    Self {
      movies,
      total_levels: settings.total_levels.max(1),
      window_size: settings.level_pool_size.max(1),
      daily_share: settings.daily_share.clamp(0.0, 1.0),
    }
  }

  /// Load the JSON cache file. Fails fast when the file is missing, malformed
  /// or yields no usable record.
  #[instrument(level = "info", skip(settings), fields(path = %path.as_ref().display()))]
  pub fn load(path: impl AsRef<Path>, settings: &CorpusSettings) -> Result<Self, CorpusError> {
    let path_str = path.as_ref().display().to_string();
    let data = std::fs::read_to_string(path.as_ref())
      .map_err(|source| CorpusError::Io { path: path_str.clone(), source })?;
    let raw: Vec<Movie> = serde_json::from_str(&data)
      .map_err(|source| CorpusError::Parse { path: path_str.clone(), source })?;
    let raw_len = raw.len();

    let corpus = Self::from_movies(raw, settings);
    if corpus.is_empty() {
      return Err(CorpusError::Empty { raw: raw_len });
    }
    info!(target: "corpus", path = %path_str, movies = corpus.len(), "Corpus loaded");
    Ok(corpus)
  }

  pub fn len(&self) -> usize {
    self.movies.len()
  }

  pub fn is_empty(&self) -> bool {
    self.movies.is_empty()
  }

  fn daily_pool(&self) -> &[Movie] {
    let total = self.movies.len();
    let take = ((total as f64 * self.daily_share).round() as usize).clamp(1, total);
    &self.movies[..take]
  }

  // Linear interpolation from the corpus head (level 1) to the last full window (max level).
  fn window_start(&self, level: i64) -> usize {
    if self.total_levels <= 1 {
      return 0;
    }
    let safe_level = level.clamp(1, self.total_levels);
    let max_shift = self.movies.len().saturating_sub(self.window_size);
    (safe_level - 1) as usize * max_shift / (self.total_levels - 1) as usize
  }
}

impl DataProvider for MovieCorpus {
  fn all_movies(&self) -> &[Movie] {
    &self.movies
  }

  fn pool_by_level(&self, level: i64, is_daily: bool) -> &[Movie] {
    if self.movies.is_empty() {
      return &[];
    }
    if is_daily {
      return self.daily_pool();
    }
    let start = self.window_start(level).min(self.movies.len());
    let end = (start + self.window_size).min(self.movies.len());
    &self.movies[start..end]
  }
}
