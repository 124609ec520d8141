//! Text-driven questions: tagline gaps, redacted riddles, release years and
//! two-movie comparisons.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;

use super::{BuildContext, Draft, OPTION_COUNT};
use crate::distractors::title_options;
use crate::domain::{ImageEffect, InputMode, Movie, Question, QuestionType};
use crate::oracle::{hint, HintClass};
use crate::util::{redact_ci, truncate_chars};

const YEAR_JITTER: i32 = 8;
const YEAR_ATTEMPTS: usize = 100;
const PAIR_ATTEMPTS: usize = 50;

pub fn build_tagline_gap<R: Rng + ?Sized>(movie: &Movie, ctx: &BuildContext<'_>, rng: &mut R) -> Option<Question> {
  let tagline = movie.tagline()?;
  let censored = redact_ci(tagline, &movie.title, "...");
  Some(
    Draft::select(
      movie,
      QuestionType::Text,
      format!("TAGLINE:\n\n\"{censored}\"\n\nWhich film is this line from?"),
      movie.title.clone(),
      title_options(&movie.title, ctx.pool, ctx.corpus, OPTION_COUNT, rng),
      hint(movie, HintClass::Tagline, rng),
    )
    .finish(),
  )
}

pub fn build_riddle<R: Rng + ?Sized>(movie: &Movie, ctx: &BuildContext<'_>, rng: &mut R) -> Option<Question> {
  let overview = movie.overview()?;
  let redacted = redact_ci(overview, &movie.title, "********");
  let clipped = truncate_chars(&redacted, ctx.settings.riddle_char_budget);
  Some(
    Draft::select(
      movie,
      QuestionType::Riddle,
      format!("CINEPHILE RIDDLE:\n\n\"{clipped}...\""),
      movie.title.clone(),
      title_options(&movie.title, ctx.pool, ctx.corpus, OPTION_COUNT, rng),
      hint(movie, HintClass::Visual, rng),
    )
    .finish(),
  )
}

/// Real year plus three decoys within +/-8 years, never past the current year.
fn year_options<R: Rng + ?Sized>(real: i32, current_year: i32, rng: &mut R) -> Vec<String> {
  let mut years: BTreeSet<i32> = BTreeSet::from([real]);
  let mut attempts = 0;
  while years.len() < OPTION_COUNT && attempts < YEAR_ATTEMPTS {
    let fake = real + rng.gen_range(-YEAR_JITTER..=YEAR_JITTER);
    if fake != real && fake <= current_year {
      years.insert(fake);
    }
    attempts += 1;
  }
  // Deterministic fill: walk backwards until enough decoys exist.
  let mut back = 1;
  while years.len() < OPTION_COUNT {
    let candidate = real - back;
    if candidate <= current_year {
      years.insert(candidate);
    }
    back += 1;
  }

  let mut options: Vec<String> = years.into_iter().map(|y| y.to_string()).collect();
  options.shuffle(rng);
  options
}

pub fn build_year_logic<R: Rng + ?Sized>(movie: &Movie, ctx: &BuildContext<'_>, rng: &mut R) -> Option<Question> {
  let real = movie.year()?;
  Some(
    Draft::select(
      movie,
      QuestionType::Year,
      format!("In which year was '{}' released?", movie.title),
      real.to_string(),
      year_options(real, ctx.settings.current_year, rng),
      hint(movie, HintClass::Year, rng),
    )
    .finish(),
  )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Comparison {
  Oldest,
  MostPopular,
  LongestTitle,
}

/// Two distinct dated pool movies with distinct titles.
fn comparison_pair<'a, R: Rng + ?Sized>(pool: &'a [Movie], rng: &mut R) -> Option<(&'a Movie, &'a Movie)> {
  let dated: Vec<&Movie> = pool.iter().filter(|m| m.release_date().is_some()).collect();
  if dated.len() < 2 {
    return None;
  }
  for _ in 0..PAIR_ATTEMPTS {
    let picked: Vec<&Movie> = dated.choose_multiple(rng, 2).copied().collect();
    let (a, b) = (picked[0], picked[1]);
    if a.id != b.id && a.title != b.title {
      return Some((a, b));
    }
  }
  None
}

/// Cross-movie question: which of two pool movies is older, more popular or
/// has the longer title. Not tied to a single movie, so `movie_id` is 0.
pub fn build_logic_comparison<R: Rng + ?Sized>(ctx: &BuildContext<'_>, rng: &mut R) -> Option<Question> {
  let (m1, m2) = comparison_pair(ctx.pool, rng)?;
  let logic = *[Comparison::Oldest, Comparison::MostPopular, Comparison::LongestTitle].choose(rng)?;

  let (first_wins, prompt, hint) = match logic {
    Comparison::Oldest => {
      let (d1, d2) = (m1.release_date().unwrap_or_default(), m2.release_date().unwrap_or_default());
      let gap = match (m1.year(), m2.year()) {
        (Some(y1), Some(y2)) => format!("Hint: their releases are {} year(s) apart.", (y1 - y2).abs()),
        _ => "Hint: think about which one your parents saw first.".to_string(),
      };
      (d1 < d2, "Which film is OLDER?", gap)
    }
    Comparison::MostPopular => (
      m1.popularity > m2.popularity,
      "Which film is more POPULAR?",
      "Hint: think of current buzz, not critics' scores.".to_string(),
    ),
    Comparison::LongestTitle => (
      m1.title.chars().count() > m2.title.chars().count(),
      "Which film has the LONGER title?",
      "Hint: count every character, spaces included.".to_string(),
    ),
  };
  let answer = if first_wins { m1.title.clone() } else { m2.title.clone() };

  Some(
    Draft {
      movie_id: 0,
      kind: QuestionType::Logic,
      input_mode: InputMode::Select,
      text: format!("LOGIC QUESTION:\n\n{prompt}"),
      image: None,
      image_effect: ImageEffect::None,
      answer,
      options: vec![m1.title.clone(), m2.title.clone()],
      hint,
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

  fn ctx<'a>(movies: &'a [Movie], settings: &'a EngineSettings) -> BuildContext<'a> {
    BuildContext { pool: movies, corpus: movies, settings }
  }

  #[test]
  fn tagline_gap_hides_title_case_insensitively() {
    let mut movies = corpus(6);
    movies[0].title = "Jaws".into();
    movies[0].tagline = Some("You'll never go in the water again. JAWS is back.".into());
    let settings = EngineSettings::default();
    let mut rng = StdRng::seed_from_u64(1);
    let q = build_tagline_gap(&movies[0], &ctx(&movies, &settings), &mut rng).expect("tagline");
    assert!(q.text.contains("water again. ... is back."));
    assert!(!q.text.contains("JAWS"));
    assert_eq!(q.kind, QuestionType::Text);
    assert_eq!(q.hint, "Hint: Lead 1 plays the lead.");
  }

  #[test]
  fn riddle_redacts_and_truncates() {
    let mut movies = corpus(6);
    movies[0].title = "Heat".into();
    movies[0].overview = Some(format!("The heat is on. {}", "x".repeat(400)));
    let settings = EngineSettings::default();
    let mut rng = StdRng::seed_from_u64(1);
    let q = build_riddle(&movies[0], &ctx(&movies, &settings), &mut rng).expect("riddle");
    assert!(q.text.contains("The ******** is on."));
    let quoted = q.text.trim_start_matches("CINEPHILE RIDDLE:\n\n\"").trim_end_matches("...\"");
    assert_eq!(quoted.chars().count(), 180);
    assert!(!q.hint.contains("Heat"));
  }

  #[test]
  fn year_decoys_stay_close_and_in_the_past() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
      let opts = year_options(2024, 2026, &mut rng);
      assert_eq!(opts.len(), 4);
      assert_eq!(opts.iter().filter(|o| *o == "2024").count(), 1);
      for y in opts.iter().map(|o| o.parse::<i32>().expect("year")) {
        assert!(y <= 2026 && (y - 2024).abs() <= 8);
      }
    }
  }

  #[test]
  fn year_decoys_fill_deterministically_for_future_releases() {
    let mut rng = StdRng::seed_from_u64(42);
    let opts = year_options(2050, 2026, &mut rng);
    let mut years: Vec<i32> = opts.iter().map(|o| o.parse().expect("year")).collect();
    years.sort();
    assert_eq!(years, vec![2024, 2025, 2026, 2050]);
  }

  #[test]
  fn year_logic_needs_numeric_year() {
    let mut movies = corpus(6);
    let settings = EngineSettings::default();
    let mut rng = StdRng::seed_from_u64(3);
    let q = build_year_logic(&movies[0], &ctx(&movies, &settings), &mut rng).expect("year");
    assert_eq!(q.answer, "1961");
    assert!(q.options.contains(&q.answer));

    movies[0].release_date = Some("unknown".into());
    assert!(build_year_logic(&movies[0], &ctx(&movies, &settings), &mut rng).is_none());
  }

  #[test]
  fn comparison_answers_by_direct_comparison() {
    let mut a = full(1, "Casablanca");
    a.release_date = Some("1942-11-26".into());
    a.popularity = 10.0;
    let mut b = full(2, "Up");
    b.release_date = Some("2009-05-29".into());
    b.popularity = 90.0;
    let pool = vec![a, b];
    let settings = EngineSettings::default();
    let mut rng = StdRng::seed_from_u64(17);

    for _ in 0..30 {
      let q = build_logic_comparison(&ctx(&pool, &settings), &mut rng).expect("logic");
      assert_eq!(q.movie_id, 0);
      assert_eq!(q.options.len(), 2);
      let expected = if q.text.contains("OLDER") || q.text.contains("LONGER") { "Casablanca" } else { "Up" };
      assert_eq!(q.answer, expected);
      assert!(!q.hint.contains("Casablanca") && !q.hint.contains("Up"));
    }
  }

  #[test]
  fn comparison_needs_two_dated_movies() {
    let mut pool = corpus(3);
    pool[1].release_date = None;
    pool[2].release_date = None;
    let settings = EngineSettings::default();
    let mut rng = StdRng::seed_from_u64(17);
    assert!(build_logic_comparison(&ctx(&pool, &settings), &mut rng).is_none());
  }
}
