//! Questions built around the cast: who played in what, who did not, who
//! shared the screen with whom.

use rand::seq::index::sample;
use rand::seq::SliceRandom;
use rand::Rng;

use super::{build_anagram, BuildContext, Draft, OPTION_COUNT};
use crate::distractors::{title_options, title_options_avoiding};
use crate::domain::{Movie, Question, QuestionType};
use crate::oracle::{hint, HintClass};
use crate::seeds::FALLBACK_OUTSIDERS;

/// Draws for the odd-one-out outsider and for duo distractors.
const OUTSIDER_ATTEMPTS: usize = 50;
const DUO_ATTEMPTS: usize = 100;

/// Distinct names among the first `slots` cast members, in billing order.
fn lead_names(movie: &Movie, slots: usize) -> Vec<&str> {
  let mut names: Vec<&str> = Vec::new();
  for c in movie.cast.iter().take(slots) {
    let name = c.name.trim();
    if !name.is_empty() && !names.contains(&name) {
      names.push(name);
    }
  }
  names
}

/// Two distinct names, kept in billing order so "A & B" and "B & A" never both appear.
fn sample_pair<'a, R: Rng + ?Sized>(names: &[&'a str], rng: &mut R) -> Option<(&'a str, &'a str)> {
  if names.len() < 2 {
    return None;
  }
  let mut idx = sample(rng, names.len(), 2).into_vec();
  idx.sort_unstable();
  Some((names[idx[0]], names[idx[1]]))
}

fn pair_label(a: &str, b: &str) -> String {
  format!("{a} & {b}")
}

/// "Which of these films did <lead> appear in?"
pub fn build_actor_standard<R: Rng + ?Sized>(movie: &Movie, ctx: &BuildContext<'_>, rng: &mut R) -> Option<Question> {
  let actor = movie.lead()?.name.clone();
  Some(
    Draft::select(
      movie,
      QuestionType::Actor,
      format!("{actor} appeared in which of these films?"),
      movie.title.clone(),
      title_options(&movie.title, ctx.pool, ctx.corpus, OPTION_COUNT, rng),
      hint(movie, HintClass::Actor, rng),
    )
    .finish(),
  )
}

/// The lead of the anchor movie also plays in another corpus movie: which one?
/// Falls back to the standard actor question when no such movie exists.
pub fn build_actor_cross<R: Rng + ?Sized>(movie: &Movie, ctx: &BuildContext<'_>, rng: &mut R) -> Option<Question> {
  let actor = movie.lead()?.name.as_str();
  let others: Vec<&Movie> = ctx
    .corpus
    .iter()
    .filter(|m| m.id != movie.id && m.title != movie.title && m.has_actor(actor))
    .collect();
  let Some(other) = others.choose(rng).copied() else {
    return build_actor_standard(movie, ctx, rng);
  };

  Some(
    Draft::select(
      movie,
      QuestionType::Knowledge,
      format!("{actor}, star of '{}', also appeared in which of these films?", movie.title),
      other.title.clone(),
      title_options_avoiding(&other.title, &[movie.title.as_str()], ctx.pool, ctx.corpus, OPTION_COUNT, rng),
      hint(other, HintClass::Actor, rng),
    )
    .finish(),
  )
}

/// Lead actor of a random pool movie who is not in the anchor's cast.
/// Bounded search, then the first hardcoded name not in the cast.
fn random_outsider<R: Rng + ?Sized>(movie: &Movie, pool: &[Movie], rng: &mut R) -> String {
  for _ in 0..OUTSIDER_ATTEMPTS {
    let Some(m) = pool.choose(rng) else { break };
    if let Some(lead) = m.lead() {
      if !lead.name.trim().is_empty() && !movie.has_actor(&lead.name) {
        return lead.name.clone();
      }
    }
  }
  FALLBACK_OUTSIDERS
    .iter()
    .find(|n| !movie.has_actor(n))
    .copied()
    .unwrap_or(FALLBACK_OUTSIDERS[0])
    .to_string()
}

/// Three real cast members and one outsider; the outsider is the answer.
pub fn build_odd_one_out<R: Rng + ?Sized>(movie: &Movie, ctx: &BuildContext<'_>, rng: &mut R) -> Option<Question> {
  let names = lead_names(movie, 6);
  if names.len() < 3 {
    return build_anagram(movie, ctx, rng);
  }
  let outsider = random_outsider(movie, ctx.pool, rng);

  let mut options: Vec<String> = names.choose_multiple(rng, 3).map(|n| n.to_string()).collect();
  options.push(outsider.clone());
  options.shuffle(rng);

  Some(
    Draft::select(
      movie,
      QuestionType::OddOne,
      format!("Which of these actors is NOT in the cast of '{}'?", movie.title),
      outsider,
      options,
      hint(movie, HintClass::Actor, rng),
    )
    .finish(),
  )
}

/// "Which duo is in the cast of <title>?" Distractors are duos from other pool
/// movies, deduplicated as formatted strings.
pub fn build_duo_reveal<R: Rng + ?Sized>(movie: &Movie, ctx: &BuildContext<'_>, rng: &mut R) -> Option<Question> {
  let (a, b) = sample_pair(&lead_names(movie, 3), rng)?;
  let correct = pair_label(a, b);

  let mut options: Vec<String> = vec![correct.clone()];
  let offer = |m: &Movie, options: &mut Vec<String>, rng: &mut R| {
    if m.id == movie.id {
      return;
    }
    if let Some((x, y)) = sample_pair(&lead_names(m, 3), rng) {
      // A pair made only of the anchor's own cast would also be a right answer.
      if movie.has_actor(x) && movie.has_actor(y) {
        return;
      }
      let label = pair_label(x, y);
      if !options.contains(&label) {
        options.push(label);
      }
    }
  };

  for _ in 0..DUO_ATTEMPTS {
    if options.len() >= OPTION_COUNT {
      break;
    }
    let Some(m) = ctx.pool.choose(rng) else { break };
    offer(m, &mut options, rng);
  }
  if options.len() < OPTION_COUNT {
    let mut order: Vec<&Movie> = ctx.corpus.iter().collect();
    order.shuffle(rng);
    for m in order {
      if options.len() >= OPTION_COUNT {
        break;
      }
      offer(m, &mut options, rng);
    }
  }
  if options.len() < OPTION_COUNT {
    return None;
  }
  options.shuffle(rng);

  Some(
    Draft::select(
      movie,
      QuestionType::DynamicDuo,
      format!("Which pair is in the cast of '{}'?", movie.title),
      correct,
      options,
      hint(movie, HintClass::Duo, rng),
    )
    .finish(),
  )
}

/// "These two actors shared the screen in which film?"
pub fn build_co_star_lookup<R: Rng + ?Sized>(movie: &Movie, ctx: &BuildContext<'_>, rng: &mut R) -> Option<Question> {
  let (a, b) = sample_pair(&lead_names(movie, 4), rng)?;
  Some(
    Draft::select(
      movie,
      QuestionType::CoStarLookup,
      format!("Two names from the big screen:\n\n{a} and {b}\n\nIn which film did they appear TOGETHER?"),
      movie.title.clone(),
      title_options(&movie.title, ctx.pool, ctx.corpus, OPTION_COUNT, rng),
      hint(movie, HintClass::Duo, rng),
    )
    .finish(),
  )
}
