//! Blueprint catalog and selector.
//!
//! Each blueprint unlocks at a tier and is gated by a capability predicate on
//! the anchor movie. The eligible set is cumulative over tiers, so a higher
//! tier never offers fewer blueprints than a lower one for the same movie.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::builders::{self, series_titles, BuildContext, ImageKind, FRANCHISE_MIN_TITLES};
use crate::domain::{ImageEffect, Movie, Question};
use crate::tier::Tier;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Blueprint {
  VisualPosterClean,
  VisualSceneClean,
  YearDecade,
  ActorMatchSimple,
  TaglineGap,
  FranchiseTrapEasy,
  VisualPosterBlur,
  DuoWhoIsIn,
  DuoWhichMovie,
  EmojiPuzzle,
  AnagramSimple,
  VisualScenePixel,
  OddOneOut,
  RiddleRedacted,
  ActorCrossRef,
  HangmanKeyboard,
  LogicComparison,
  FranchiseTrapHard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Capability {
  Poster,
  Backdrop,
  ReleaseDate,
  Cast,
  RichCast,
  Tagline,
  Overview,
  Franchise,
  Always,
}

impl Blueprint {
  /// Catalog order; also the order `eligible` reports.
  pub const ALL: [Blueprint; 18] = [
    Blueprint::VisualPosterClean,
    Blueprint::VisualSceneClean,
    Blueprint::YearDecade,
    Blueprint::ActorMatchSimple,
    Blueprint::TaglineGap,
    Blueprint::FranchiseTrapEasy,
    Blueprint::VisualPosterBlur,
    Blueprint::DuoWhoIsIn,
    Blueprint::DuoWhichMovie,
    Blueprint::EmojiPuzzle,
    Blueprint::AnagramSimple,
    Blueprint::VisualScenePixel,
    Blueprint::OddOneOut,
    Blueprint::RiddleRedacted,
    Blueprint::ActorCrossRef,
    Blueprint::HangmanKeyboard,
    Blueprint::LogicComparison,
    Blueprint::FranchiseTrapHard,
  ];

  pub fn name(self) -> &'static str {
    match self {
      Blueprint::VisualPosterClean => "visual_poster_clean",
      Blueprint::VisualSceneClean => "visual_scene_clean",
      Blueprint::YearDecade => "year_decade",
      Blueprint::ActorMatchSimple => "actor_match_simple",
      Blueprint::TaglineGap => "tagline_gap",
      Blueprint::FranchiseTrapEasy => "franchise_trap_easy",
      Blueprint::VisualPosterBlur => "visual_poster_blur",
      Blueprint::DuoWhoIsIn => "duo_who_is_in",
      Blueprint::DuoWhichMovie => "duo_which_movie",
      Blueprint::EmojiPuzzle => "emoji_puzzle",
      Blueprint::AnagramSimple => "anagram_simple",
      Blueprint::VisualScenePixel => "visual_scene_pixel",
      Blueprint::OddOneOut => "odd_one_out",
      Blueprint::RiddleRedacted => "riddle_redacted",
      Blueprint::ActorCrossRef => "actor_cross_ref",
      Blueprint::HangmanKeyboard => "hangman_keyboard",
      Blueprint::LogicComparison => "logic_comparison",
      Blueprint::FranchiseTrapHard => "franchise_trap_hard",
    }
  }

  pub fn min_tier(self) -> Tier {
    match self {
      Blueprint::VisualPosterClean | Blueprint::VisualSceneClean => Tier::Novice,
      Blueprint::YearDecade | Blueprint::ActorMatchSimple | Blueprint::TaglineGap | Blueprint::FranchiseTrapEasy => Tier::Pro,
      Blueprint::VisualPosterBlur
      | Blueprint::DuoWhoIsIn
      | Blueprint::DuoWhichMovie
      | Blueprint::EmojiPuzzle
      | Blueprint::AnagramSimple => Tier::Expert,
      Blueprint::VisualScenePixel | Blueprint::OddOneOut | Blueprint::RiddleRedacted | Blueprint::ActorCrossRef => {
        Tier::Master
      }
      Blueprint::HangmanKeyboard | Blueprint::LogicComparison | Blueprint::FranchiseTrapHard => Tier::Legend,
    }
  }

  fn capability(self) -> Capability {
    match self {
      Blueprint::VisualPosterClean | Blueprint::VisualPosterBlur => Capability::Poster,
      Blueprint::VisualSceneClean | Blueprint::VisualScenePixel => Capability::Backdrop,
      Blueprint::YearDecade | Blueprint::LogicComparison => Capability::ReleaseDate,
      Blueprint::ActorMatchSimple | Blueprint::OddOneOut | Blueprint::ActorCrossRef => Capability::Cast,
      Blueprint::DuoWhoIsIn | Blueprint::DuoWhichMovie => Capability::RichCast,
      Blueprint::TaglineGap => Capability::Tagline,
      Blueprint::RiddleRedacted => Capability::Overview,
      Blueprint::FranchiseTrapEasy | Blueprint::FranchiseTrapHard => Capability::Franchise,
      Blueprint::EmojiPuzzle | Blueprint::AnagramSimple | Blueprint::HangmanKeyboard => Capability::Always,
    }
  }

  /// Ungated poster/scene questions, dropped from daily content.
  pub fn is_clean_visual(self) -> bool {
    matches!(self, Blueprint::VisualPosterClean | Blueprint::VisualSceneClean)
  }

  pub fn is_capable(self, movie: &Movie, corpus: &[Movie]) -> bool {
    match self.capability() {
      Capability::Poster => movie.poster_path().is_some(),
      Capability::Backdrop => movie.backdrop_path().is_some(),
      Capability::ReleaseDate => movie.release_date().is_some(),
      Capability::Cast => !movie.cast.is_empty(),
      Capability::RichCast => movie.cast.len() >= 2,
      Capability::Tagline => movie.tagline().is_some(),
      Capability::Overview => movie.overview().is_some(),
      Capability::Franchise => is_franchise(movie, corpus),
      Capability::Always => true,
    }
  }

  /// Run the builder behind this blueprint.
  pub fn build<R: Rng + ?Sized>(self, movie: &Movie, ctx: &BuildContext<'_>, rng: &mut R) -> Option<Question> {
    match self {
      Blueprint::VisualPosterClean => builders::build_visual(movie, ctx, ImageKind::Poster, ImageEffect::None, rng),
      Blueprint::VisualSceneClean => builders::build_visual(movie, ctx, ImageKind::Scene, ImageEffect::None, rng),
      Blueprint::VisualPosterBlur => builders::build_visual(movie, ctx, ImageKind::Poster, ImageEffect::Blur, rng),
      Blueprint::VisualScenePixel => builders::build_visual(movie, ctx, ImageKind::Scene, ImageEffect::Pixel, rng),
      Blueprint::FranchiseTrapEasy | Blueprint::FranchiseTrapHard => builders::build_franchise_trap(movie, ctx, rng),
      Blueprint::YearDecade => builders::build_year_logic(movie, ctx, rng),
      Blueprint::ActorMatchSimple => builders::build_actor_standard(movie, ctx, rng),
      Blueprint::ActorCrossRef => builders::build_actor_cross(movie, ctx, rng),
      Blueprint::OddOneOut => builders::build_odd_one_out(movie, ctx, rng),
      Blueprint::DuoWhoIsIn => builders::build_duo_reveal(movie, ctx, rng),
      Blueprint::DuoWhichMovie => builders::build_co_star_lookup(movie, ctx, rng),
      Blueprint::TaglineGap => builders::build_tagline_gap(movie, ctx, rng),
      Blueprint::RiddleRedacted => builders::build_riddle(movie, ctx, rng),
      Blueprint::EmojiPuzzle => builders::build_emoji(movie, ctx, rng),
      Blueprint::AnagramSimple => builders::build_anagram(movie, ctx, rng),
      Blueprint::HangmanKeyboard => builders::build_hangman(movie, ctx, rng),
      Blueprint::LogicComparison => builders::build_logic_comparison(ctx, rng),
    }
  }
}

/// At least three distinct corpus titles, the anchor included, start with the
/// anchor's two-word prefix. Uses the same sibling lookup as the franchise
/// builder, so an eligible movie always gets a real series question.
/// A known approximation: "The Dark" groups unrelated films.
pub fn is_franchise(movie: &Movie, corpus: &[Movie]) -> bool {
  series_titles(movie, corpus).len() + 1 >= FRANCHISE_MIN_TITLES
}

/// Eligible blueprints for `movie` at `tier`, in catalog order.
pub fn eligible(movie: &Movie, tier: Tier, is_daily: bool, corpus: &[Movie]) -> Vec<Blueprint> {
  Blueprint::ALL
    .into_iter()
    .filter(|bp| bp.min_tier() <= tier)
    .filter(|bp| bp.is_capable(movie, corpus))
    .filter(|bp| !(is_daily && bp.is_clean_visual()))
    .collect()
}

/// Uniform pick among the eligible blueprints. `None` means fall back to an anagram.
pub fn select<R: Rng + ?Sized>(movie: &Movie, tier: Tier, is_daily: bool, corpus: &[Movie], rng: &mut R) -> Option<Blueprint> {
  eligible(movie, tier, is_daily, corpus).choose(rng).copied()
}
