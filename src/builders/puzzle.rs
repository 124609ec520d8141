//! Title puzzles: emoji decoding, scrambled letters and hangman.

use rand::seq::SliceRandom;
use rand::Rng;

use super::{BuildContext, Draft, OPTION_COUNT};
use crate::distractors::title_options;
use crate::domain::{ImageEffect, InputMode, Movie, Question, QuestionType};
use crate::oracle::{hint, HintClass};
use crate::seeds::{genre_emojis, FALLBACK_EMOJIS};

const EMOJI_SAMPLE: usize = 4;

/// Emojis mapped from every genre of the movie, deduplicated in genre order.
fn emoji_palette(movie: &Movie) -> Vec<&'static str> {
  let mut palette: Vec<&'static str> = Vec::new();
  for e in movie.genre_ids.iter().flat_map(|g| genre_emojis(*g).iter().copied()) {
    if !palette.contains(&e) {
      palette.push(e);
    }
  }
  if palette.is_empty() {
    palette.extend_from_slice(FALLBACK_EMOJIS);
  }
  palette
}

pub fn build_emoji<R: Rng + ?Sized>(movie: &Movie, ctx: &BuildContext<'_>, rng: &mut R) -> Option<Question> {
  let palette = emoji_palette(movie);
  let picked: Vec<&str> = palette.choose_multiple(rng, EMOJI_SAMPLE.min(palette.len())).copied().collect();
  Some(
    Draft::select(
      movie,
      QuestionType::Emoji,
      format!("Which film do these emojis describe?\n\n# {}", picked.join(" ")),
      movie.title.clone(),
      title_options(&movie.title, ctx.pool, ctx.corpus, OPTION_COUNT, rng),
      hint(movie, HintClass::Visual, rng),
    )
    .finish(),
  )
}

/// Uppercased alphanumerics of the title in random order.
fn scramble<R: Rng + ?Sized>(title: &str, rng: &mut R) -> Vec<String> {
  let mut letters: Vec<String> = title
    .chars()
    .filter(|c| c.is_alphanumeric())
    .flat_map(char::to_uppercase)
    .map(String::from)
    .collect();
  if letters.is_empty() {
    letters = title.chars().filter(|c| !c.is_whitespace()).map(String::from).collect();
  }
  letters.shuffle(rng);
  letters
}

/// Needs only a non-blank title, which the corpus guarantees.
pub fn build_anagram<R: Rng + ?Sized>(movie: &Movie, ctx: &BuildContext<'_>, rng: &mut R) -> Option<Question> {
  let letters = scramble(&movie.title, rng);
  if letters.is_empty() {
    return None;
  }
  Some(
    Draft::select(
      movie,
      QuestionType::Anagram,
      format!("SCRAMBLED LETTERS:\nWhich film could this be?\n\n**{}**", letters.join("  ")),
      movie.title.clone(),
      title_options(&movie.title, ctx.pool, ctx.corpus, OPTION_COUNT, rng),
      hint(movie, HintClass::Wordplay, rng),
    )
    .finish(),
  )
}

fn mask<R: Rng + ?Sized>(title: &str, reveal_probability: f64, rng: &mut R) -> String {
  let p = reveal_probability.clamp(0.0, 1.0);
  let mut masked = String::with_capacity(title.len() * 2);
  for c in title.chars() {
    if c == ' ' {
      masked.push_str("  ");
    } else if !c.is_alphanumeric() {
      masked.push(c);
    } else if rng.gen_bool(p) {
      masked.push(c);
      masked.push(' ');
    } else {
      masked.push_str("_ ");
    }
  }
  masked
}

pub fn build_hangman<R: Rng + ?Sized>(movie: &Movie, ctx: &BuildContext<'_>, rng: &mut R) -> Option<Question> {
  let masked = mask(&movie.title, ctx.settings.hangman_reveal_probability, rng);
  Some(
    Draft {
      movie_id: movie.id,
      kind: QuestionType::Hangman,
      input_mode: InputMode::Keyboard,
      text: format!("Fill in the missing letters:\n\n{masked}"),
      image: None,
      image_effect: ImageEffect::None,
      answer: movie.title.clone(),
      options: Vec::new(),
      hint: hint(movie, HintClass::Wordplay, rng),
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
  fn anagram_keeps_the_letter_multiset() {
    let mut movies = corpus(8);
    movies.push(full(99, "The Two Towers"));
    let settings = EngineSettings::default();
    let ctx = BuildContext { pool: &movies, corpus: &movies, settings: &settings };
    let mut rng = StdRng::seed_from_u64(11);

    let q = build_anagram(&movies[8], &ctx, &mut rng).expect("anagram");
    let body = q.text.rsplit("\n\n").next().expect("letters").trim_matches('*');
    let mut got: Vec<&str> = body.split("  ").collect();
    got.sort();
    let mut want = vec!["T", "H", "E", "T", "W", "O", "T", "O", "W", "E", "R", "S"];
    want.sort();
    assert_eq!(got, want);

    assert_eq!(q.kind, QuestionType::Anagram);
    assert_eq!(q.options.len(), 4);
    assert_eq!(q.options.iter().filter(|o| *o == "The Two Towers").count(), 1);
    assert_eq!(q.hint, "Hint: the title has 3 words. First letter: T");
  }

  #[test]
  fn anagram_of_punctuation_only_title_still_builds() {
    let movies = vec![full(1, "?!"), full(2, "Other")];
    let settings = EngineSettings::default();
    let ctx = BuildContext { pool: &movies, corpus: &movies, settings: &settings };
    let mut rng = StdRng::seed_from_u64(11);
    assert!(build_anagram(&movies[0], &ctx, &mut rng).is_some());
  }

  #[test]
  fn emoji_draws_from_all_genres_without_repeats() {
    let mut m = full(1, "Alien");
    m.genre_ids = vec![27, 878];
    let palette = emoji_palette(&m);
    let mut sorted = palette.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), palette.len());

    m.genre_ids = vec![424242];
    assert_eq!(emoji_palette(&m), FALLBACK_EMOJIS.to_vec());

    let movies = corpus(6);
    let settings = EngineSettings::default();
    let ctx = BuildContext { pool: &movies, corpus: &movies, settings: &settings };
    let mut rng = StdRng::seed_from_u64(5);
    let q = build_emoji(&m, &ctx, &mut rng).expect("emoji");
    let shown = q.text.rsplit("# ").next().expect("emojis");
    assert_eq!(shown.split(' ').count(), 3);
  }

  #[test]
  fn hangman_masks_letters_only() {
    let mut rng = StdRng::seed_from_u64(9);
    assert_eq!(mask("Up!", 0.0, &mut rng), "_ _ !");
    assert_eq!(mask("Up, Now", 1.0, &mut rng), "U p ,  N o w ");
  }

  #[test]
  fn hangman_is_free_text_without_options() {
    let movies = corpus(4);
    let settings = EngineSettings::default();
    let ctx = BuildContext { pool: &movies, corpus: &movies, settings: &settings };
    let mut rng = StdRng::seed_from_u64(9);
    let q = build_hangman(&movies[0], &ctx, &mut rng).expect("hangman");
    assert_eq!(q.input_mode, InputMode::Keyboard);
    assert!(q.options.is_empty());
    assert_eq!(q.answer, "Film Number 1");
    assert!(q.text.contains("  "));
  }
}
