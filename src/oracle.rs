//! Oracle hints: one short clue per question, chosen by how the question
//! elicits its answer. Hints point towards the answer without stating it.

use std::sync::OnceLock;

use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;

use crate::domain::Movie;
use crate::seeds::{genre_name, GENERIC_GENRE, KEYWORD_NO_CANDIDATE, KEYWORD_NO_TEXT, KEYWORD_STOPWORDS};
use crate::util::redact_ci;

/// Answer-elicitation style of a question, as seen by the oracle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HintClass {
  /// Hangman and anagram.
  Wordplay,
  Year,
  Actor,
  /// Poster/scene, emoji and riddle questions.
  Visual,
  /// Duo reveal and co-star lookup.
  Duo,
  Tagline,
  Franchise,
  General,
}

fn word_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"\w+").expect("static regex"))
}

pub fn genre_label(movie: &Movie) -> &'static str {
  movie.primary_genre().and_then(genre_name).unwrap_or(GENERIC_GENRE)
}

/// "Peter Parker / Spider-Man (voice)" -> "Peter Parker".
pub fn clean_character(raw: &str) -> Option<String> {
  let first = raw.split('/').next().unwrap_or_default();
  let clean = first.replace("(voice)", "");
  let clean = clean.trim();
  if clean.is_empty() { None } else { Some(clean.to_string()) }
}

/// Pick one "informative" overview word: longer than five letters, not a
/// stopword, not part of the title.
pub fn extract_keyword<R: Rng + ?Sized>(text: Option<&str>, title: &str, rng: &mut R) -> String {
  let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
    return KEYWORD_NO_TEXT.into();
  };
  let title_lower = title.to_lowercase();
  let title_words: Vec<&str> = word_re().find_iter(&title_lower).map(|m| m.as_str()).collect();

  let lower = text.to_lowercase();
  let candidates: Vec<&str> = word_re()
    .find_iter(&lower)
    .map(|m| m.as_str())
    .filter(|w| w.chars().count() > 5)
    .filter(|w| !KEYWORD_STOPWORDS.contains(w) && !title_words.contains(w))
    .collect();

  candidates
    .choose(rng)
    .map(|w| w.to_string())
    .unwrap_or_else(|| KEYWORD_NO_CANDIDATE.into())
}

/// A one-character title cannot be named or spelled out, so the hint only
/// gives the length, in a wording the guard leaves untouched.
fn single_character_hint(title: &str) -> String {
  let answer = title.to_lowercase();
  ["Hint: the whole title is a single character.", "Hint: only one symbol long.", "(1)"]
    .into_iter()
    .find(|h| !h.to_lowercase().contains(&answer))
    .unwrap_or("(1)")
    .to_string()
}

/// Build the hint for `movie` in the given class. Always non-empty.
pub fn hint<R: Rng + ?Sized>(movie: &Movie, class: HintClass, rng: &mut R) -> String {
  let title = movie.title.as_str();
  let year = movie.year_label();

  match class {
    HintClass::Wordplay if title.trim().chars().count() == 1 => single_character_hint(title.trim()),

    HintClass::Wordplay => {
      let words = title.split_whitespace().count();
      let first = title.chars().next().unwrap_or('?');
      if words > 1 {
        format!("Hint: the title has {words} words. First letter: {first}")
      } else {
        format!("Hint: a one-word masterpiece. First letter: {first}")
      }
    }

    HintClass::Year => match movie.lead() {
      Some(lead) => format!("Hint: around this time {} was at the peak of their career.", lead.name),
      None => format!("Hint: the genre is {}.", genre_label(movie)),
    },

    HintClass::Actor => match movie.lead().and_then(|l| clean_character(&l.character)) {
      Some(character) => format!("Hint: the character's name is {character}."),
      None => format!("Hint: the film was released in {year}."),
    },

    HintClass::Visual => {
      if let Some(tagline) = movie.tagline().filter(|t| t.chars().count() > 5) {
        return format!("Tagline: \"{tagline}\"");
      }
      if let Some(overview) = movie.overview() {
        let keyword = extract_keyword(Some(overview), title, rng);
        return format!("Key word of the story: {}", keyword.to_uppercase());
      }
      general(movie)
    }

    HintClass::Duo => format!("Hint: this {} favourite came out in {year}.", genre_label(movie)),

    HintClass::Tagline => match movie.lead() {
      Some(lead) => format!("Hint: {} plays the lead.", lead.name),
      None => format!("Hint: the genre is {}.", genre_label(movie)),
    },

    HintClass::Franchise => match movie.year() {
      Some(y) => format!("Hint: this instalment was released in {y}."),
      None => general(movie),
    },

    HintClass::General => general(movie),
  }
}

fn general(movie: &Movie) -> String {
  format!("Release date: {}", movie.release_date().unwrap_or("????"))
}

/// Redact the answer from a hint so the clue never states it.
pub fn guard(hint: String, answer: &str) -> String {
  if answer.is_empty() || !hint.to_lowercase().contains(&answer.to_lowercase()) {
    return hint;
  }
  redact_ci(&hint, answer, "…")
}
