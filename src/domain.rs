//! Domain models used by the engine: movie records coming from the corpus and
//! the question records handed back to callers.

use serde::{Deserialize, Serialize};

/// One credited cast entry. The first entry of a movie's cast is its lead.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CastMember {
  pub name: String,
  #[serde(default)]
  pub character: String,
}

/// Movie record as stored in the corpus cache (TMDB-shaped).
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Movie {
  #[serde(default)] pub id: i64,
  #[serde(default)] pub title: String,
  #[serde(default)] pub overview: Option<String>,
  #[serde(default)] pub tagline: Option<String>,
  #[serde(default)] pub release_date: Option<String>,
  #[serde(default)] pub poster_path: Option<String>,
  #[serde(default)] pub backdrop_path: Option<String>,
  #[serde(default)] pub cast: Vec<CastMember>,
  #[serde(default)] pub genre_ids: Vec<i64>,
  #[serde(default)] pub popularity: f64,
}

fn present(field: &Option<String>) -> Option<&str> {
  field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl Movie {
  pub fn overview(&self) -> Option<&str> { present(&self.overview) }
  pub fn tagline(&self) -> Option<&str> { present(&self.tagline) }
  pub fn release_date(&self) -> Option<&str> { present(&self.release_date) }
  pub fn poster_path(&self) -> Option<&str> { present(&self.poster_path) }
  pub fn backdrop_path(&self) -> Option<&str> { present(&self.backdrop_path) }

  pub fn lead(&self) -> Option<&CastMember> {
    self.cast.first()
  }

  pub fn primary_genre(&self) -> Option<i64> {
    self.genre_ids.first().copied()
  }

  /// First four characters of the release date, `"????"` when unknown.
  pub fn year_label(&self) -> String {
    match self.release_date() {
      Some(d) => d.chars().take(4).collect(),
      None => "????".into(),
    }
  }

  /// Numeric release year, if the date starts with one.
  pub fn year(&self) -> Option<i32> {
    let label = self.year_label();
    if label.len() == 4 && label.chars().all(|c| c.is_ascii_digit()) {
      label.parse().ok()
    } else {
      None
    }
  }

  pub fn has_actor(&self, name: &str) -> bool {
    self.cast.iter().any(|c| c.name == name)
  }
}

/// Archetype tag exposed to callers. Several blueprints share a type
/// (all poster/scene variants are `visual`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
  Visual,
  Franchise,
  Knowledge,
  OddOne,
  DynamicDuo,
  CoStarLookup,
  Actor,
  Text,
  Year,
  Riddle,
  Logic,
  Emoji,
  Anagram,
  Hangman,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
  /// Multiple choice; `answer` is one of `options`.
  Select,
  /// Free text typed by the player; `options` is empty.
  Keyboard,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ImageEffect {
  #[default]
  #[serde(rename = "")]
  None,
  #[serde(rename = "blur")]
  Blur,
  #[serde(rename = "pixel")]
  Pixel,
}

/// Fully formed question, owned by the caller once returned.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Question {
  pub movie_id: i64,
  #[serde(rename = "type")]
  pub kind: QuestionType,
  pub input_mode: InputMode,
  pub text: String,
  pub image: Option<String>,
  #[serde(default)]
  pub image_effect: ImageEffect,
  pub answer: String,
  pub options: Vec<String>,
  pub hint: String,
}
