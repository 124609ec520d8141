//! Image-based questions: poster/scene variants and the franchise trap.

use rand::seq::SliceRandom;
use rand::Rng;

use super::{BuildContext, Draft, OPTION_COUNT};
use crate::distractors::{title_options, title_options_avoiding};
use crate::domain::{ImageEffect, InputMode, Movie, Question, QuestionType};
use crate::oracle::{hint, HintClass};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageKind {
  Poster,
  Scene,
}

fn prompt(kind: ImageKind, effect: ImageEffect) -> &'static str {
  match (kind, effect) {
    (ImageKind::Poster, ImageEffect::None) => "Which film does this poster belong to?",
    (ImageKind::Scene, ImageEffect::None) => "Which film is this scene from?",
    (ImageKind::Poster, ImageEffect::Blur) => "Focus! Which film does this blurred poster belong to?",
    (ImageKind::Scene, ImageEffect::Blur) => "Focus! Which film is this blurred frame from?",
    (ImageKind::Poster, ImageEffect::Pixel) => "Signal lost... which film does this pixelated poster belong to?",
    (ImageKind::Scene, ImageEffect::Pixel) => "Signal lost... which film is this pixelated scene from?",
  }
}

fn image_url(movie: &Movie, kind: ImageKind, ctx: &BuildContext<'_>) -> Option<String> {
  match kind {
    ImageKind::Poster => movie.poster_path().map(|p| ctx.settings.poster_url(p)),
    ImageKind::Scene => movie.backdrop_path().map(|p| ctx.settings.backdrop_url(p)),
  }
}

pub fn build_visual<R: Rng + ?Sized>(
  movie: &Movie,
  ctx: &BuildContext<'_>,
  kind: ImageKind,
  effect: ImageEffect,
  rng: &mut R,
) -> Option<Question> {
  let url = image_url(movie, kind, ctx)?;
  Some(
    Draft {
      movie_id: movie.id,
      kind: QuestionType::Visual,
      input_mode: InputMode::Select,
      text: prompt(kind, effect).into(),
      image: Some(url),
      image_effect: effect,
      answer: movie.title.clone(),
      options: title_options(&movie.title, ctx.pool, ctx.corpus, OPTION_COUNT, rng),
      hint: hint(movie, HintClass::Visual, rng),
    }
    .finish(),
  )
}

/// Corpus titles sharing a two-word prefix, anchor included, for a series.
pub const FRANCHISE_MIN_TITLES: usize = 3;

/// First two words of a title, if it has at least two.
pub fn franchise_prefix(title: &str) -> Option<String> {
  let words: Vec<&str> = title.split_whitespace().take(2).collect();
  if words.len() < 2 { None } else { Some(words.join(" ")) }
}

/// Distinct corpus titles of the anchor's series, the anchor excluded.
/// Empty for one-word titles.
pub fn series_titles<'a>(movie: &Movie, corpus: &'a [Movie]) -> Vec<&'a str> {
  let Some(prefix) = franchise_prefix(&movie.title) else {
    return Vec::new();
  };
  let mut out: Vec<&str> = Vec::new();
  for m in corpus {
    if m.id != movie.id && m.title != movie.title && m.title.starts_with(&prefix) && !out.contains(&m.title.as_str()) {
      out.push(&m.title);
    }
  }
  out
}

/// Options come from the same series; a trilogy is topped up with one title
/// from the pool. Degrades to the clean poster question outside a series.
pub fn build_franchise_trap<R: Rng + ?Sized>(movie: &Movie, ctx: &BuildContext<'_>, rng: &mut R) -> Option<Question> {
  let siblings = series_titles(movie, ctx.corpus);
  if siblings.len() + 1 < FRANCHISE_MIN_TITLES {
    return build_visual(movie, ctx, ImageKind::Poster, ImageEffect::None, rng);
  }

  let (kind, label) = if movie.backdrop_path().is_some() {
    (ImageKind::Scene, "scene")
  } else {
    (ImageKind::Poster, "poster")
  };
  let url = image_url(movie, kind, ctx)?;

  let picked: Vec<&str> = siblings.choose_multiple(rng, OPTION_COUNT - 1).copied().collect();
  let mut options = title_options_avoiding(&movie.title, &picked, ctx.pool, ctx.corpus, OPTION_COUNT - picked.len(), rng);
  options.extend(picked.iter().map(|s| s.to_string()));
  options.shuffle(rng);

  Some(
    Draft {
      movie_id: movie.id,
      kind: QuestionType::Franchise,
      input_mode: InputMode::Select,
      text: format!("Careful! Which film of the series is this {label} from?"),
      image: Some(url),
      image_effect: ImageEffect::None,
      answer: movie.title.clone(),
      options,
      hint: hint(movie, HintClass::Franchise, rng),
    }
    .finish(),
  )
}

#[cfg(test)]
mod tests {
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  use super::*;
  use crate::builders::fixtures::{corpus, full};
  use crate::config::EngineSettings;

  #[test]
  fn visual_resolves_sized_urls_and_effects() {
    let movies = corpus(10);
    let settings = EngineSettings::default();
    let ctx = BuildContext { pool: &movies, corpus: &movies, settings: &settings };
    let mut rng = StdRng::seed_from_u64(2);

    let q = build_visual(&movies[0], &ctx, ImageKind::Scene, ImageEffect::Pixel, &mut rng).expect("scene");
    assert_eq!(q.image.as_deref(), Some("https://image.tmdb.org/t/p/w780/scene1.jpg"));
    assert_eq!(q.image_effect, ImageEffect::Pixel);
    assert_eq!(q.kind, QuestionType::Visual);
    assert_eq!(q.options.len(), 4);
    assert!(q.options.contains(&q.answer));

    let q = build_visual(&movies[1], &ctx, ImageKind::Poster, ImageEffect::Blur, &mut rng).expect("poster");
    assert_eq!(q.image.as_deref(), Some("https://image.tmdb.org/t/p/w500/poster2.jpg"));
  }

  #[test]
  fn visual_needs_the_image() {
    let mut movies = corpus(5);
    movies[0].poster_path = None;
    let settings = EngineSettings::default();
    let ctx = BuildContext { pool: &movies, corpus: &movies, settings: &settings };
    let mut rng = StdRng::seed_from_u64(2);
    assert!(build_visual(&movies[0], &ctx, ImageKind::Poster, ImageEffect::None, &mut rng).is_none());
  }

  #[test]
  fn franchise_offers_only_series_titles() {
    let mut movies = corpus(6);
    for (i, t) in ["Star Wars: A New Hope", "Star Wars: The Empire Strikes Back", "Star Wars: Return of the Jedi", "Star Wars: The Force Awakens"]
      .iter()
      .enumerate()
    {
      movies.push(full(100 + i as i64, t));
    }
    let settings = EngineSettings::default();
    let ctx = BuildContext { pool: &movies[..6], corpus: &movies, settings: &settings };
    let mut rng = StdRng::seed_from_u64(4);

    let anchor = &movies[6];
    let q = build_franchise_trap(anchor, &ctx, &mut rng).expect("franchise");
    assert_eq!(q.kind, QuestionType::Franchise);
    assert_eq!(q.options.len(), 4);
    assert_eq!(q.options.iter().filter(|o| **o == anchor.title).count(), 1);
    assert!(q.options.iter().all(|o| o.starts_with("Star Wars:")));
    assert!(q.image.as_deref().is_some_and(|u| u.contains("w780")));
  }

  #[test]
  fn franchise_degrades_to_visual() {
    let movies = corpus(6);
    let settings = EngineSettings::default();
    let ctx = BuildContext { pool: &movies, corpus: &movies, settings: &settings };
    let mut rng = StdRng::seed_from_u64(4);

    let lone = full(77, "Solaris");
    let q = build_franchise_trap(&lone, &ctx, &mut rng).expect("visual fallback");
    assert_eq!(q.kind, QuestionType::Visual);
    assert_eq!(q.image_effect, ImageEffect::None);
  }

  #[test]
  fn trilogy_builds_a_franchise_question() {
    let mut movies = corpus(8);
    movies.push(full(50, "Back to the Future"));
    movies.push(full(51, "Back to the Future Part II"));
    movies.push(full(52, "Back to the Future Part III"));
    let settings = EngineSettings::default();
    let ctx = BuildContext { pool: &movies[..8], corpus: &movies, settings: &settings };
    let mut rng = StdRng::seed_from_u64(6);

    for _ in 0..30 {
      let q = build_franchise_trap(&movies[9], &ctx, &mut rng).expect("franchise");
      assert_eq!(q.kind, QuestionType::Franchise);
      assert_eq!(q.options.len(), 4);
      assert_eq!(q.options.iter().filter(|o| **o == q.answer).count(), 1);
      assert_eq!(q.options.iter().filter(|o| o.starts_with("Back to")).count(), 3);
    }
  }

  #[test]
  fn series_titles_skip_anchor_and_duplicates() {
    let movies = vec![full(1, "Toy Story"), full(2, "Toy Story 2"), full(3, "Toy Story 2"), full(4, "Toy Story")];
    assert_eq!(series_titles(&movies[0], &movies), vec!["Toy Story 2"]);
    assert!(series_titles(&full(5, "Toy"), &movies).is_empty());
  }

  #[test]
  fn prefix_needs_two_words() {
    assert_eq!(franchise_prefix("Alien"), None);
    assert_eq!(franchise_prefix("The Two Towers").as_deref(), Some("The Two"));
  }
}
