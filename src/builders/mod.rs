//! Question builders, one per archetype family.
//!
//! Every builder takes the anchor movie plus a `BuildContext` and returns
//! `None` when its preconditions fail at build time (capability checks are
//! necessary, not sufficient). The pipeline then substitutes an anagram.

use crate::config::EngineSettings;
use crate::domain::{ImageEffect, InputMode, Movie, Question, QuestionType};
use crate::oracle::guard;

pub mod cast;
pub mod puzzle;
pub mod text;
pub mod visual;

pub use cast::{build_actor_cross, build_actor_standard, build_co_star_lookup, build_duo_reveal, build_odd_one_out};
pub use puzzle::{build_anagram, build_emoji, build_hangman};
pub use text::{build_logic_comparison, build_riddle, build_tagline_gap, build_year_logic};
pub use visual::{build_franchise_trap, build_visual, franchise_prefix, series_titles, ImageKind, FRANCHISE_MIN_TITLES};

/// Options shown for multiple-choice questions (comparison questions use 2).
pub const OPTION_COUNT: usize = 4;

/// Everything a builder may look at besides the anchor movie.
#[derive(Clone, Copy)]
pub struct BuildContext<'a> {
  /// Level-scoped candidates.
  pub pool: &'a [Movie],
  /// Full corpus, for lookups that must not be limited to the pool.
  pub corpus: &'a [Movie],
  pub settings: &'a EngineSettings,
}

/// Parts of a question before the hint guard runs.
pub(crate) struct Draft {
  pub movie_id: i64,
  pub kind: QuestionType,
  pub input_mode: InputMode,
  pub text: String,
  pub image: Option<String>,
  pub image_effect: ImageEffect,
  pub answer: String,
  pub options: Vec<String>,
  pub hint: String,
}

impl Draft {
  /// Text-only multiple choice about `movie`.
  pub fn select(movie: &Movie, kind: QuestionType, text: String, answer: String, options: Vec<String>, hint: String) -> Self {
    Self {
      movie_id: movie.id,
      kind,
      input_mode: InputMode::Select,
      text,
      image: None,
      image_effect: ImageEffect::None,
      answer,
      options,
      hint,
    }
  }

  pub fn finish(self) -> Question {
    let hint = guard(self.hint, &self.answer);
    Question {
      movie_id: self.movie_id,
      kind: self.kind,
      input_mode: self.input_mode,
      text: self.text,
      image: self.image,
      image_effect: self.image_effect,
      answer: self.answer,
      options: self.options,
      hint,
    }
  }
}
