//! Wrong-answer generation for title-based multiple choice.
//!
//! Two phases: a bounded number of random draws from the level pool keeps
//! distractors close to the question's difficulty, then a shuffled scan of
//! the whole corpus fills whatever is still missing.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::Movie;

/// Random pool draws before widening to the corpus.
pub const POOL_ATTEMPTS: usize = 100;

/// `count` unique titles including `correct`, shuffled.
/// Fewer are returned only when the corpus itself lacks distinct titles.
pub fn title_options<R: Rng + ?Sized>(
  correct: &str,
  pool: &[Movie],
  corpus: &[Movie],
  count: usize,
  rng: &mut R,
) -> Vec<String> {
  title_options_avoiding(correct, &[], pool, corpus, count, rng)
}

/// Same as `title_options`, but titles in `avoid` are never used as distractors.
pub fn title_options_avoiding<R: Rng + ?Sized>(
  correct: &str,
  avoid: &[&str],
  pool: &[Movie],
  corpus: &[Movie],
  count: usize,
  rng: &mut R,
) -> Vec<String> {
  let mut opts: Vec<String> = vec![correct.to_string()];
  let usable = |t: &str, opts: &[String]| !avoid.contains(&t) && !opts.iter().any(|o| o == t);

  let mut attempts = 0;
  while opts.len() < count && attempts < POOL_ATTEMPTS && !pool.is_empty() {
    if let Some(m) = pool.choose(rng) {
      if usable(&m.title, &opts) {
        opts.push(m.title.clone());
      }
    }
    attempts += 1;
  }

  if opts.len() < count {
    let mut order: Vec<&Movie> = corpus.iter().collect();
    order.shuffle(rng);
    for m in order {
      if opts.len() >= count {
        break;
      }
      if usable(&m.title, &opts) {
        opts.push(m.title.clone());
      }
    }
  }

  opts.shuffle(rng);
  opts
}
