//! Difficulty tiers and the level step functions.

use serde::{Deserialize, Serialize};

/// Ordered difficulty classes. Higher tiers unlock more blueprints.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
  Novice = 1,
  Pro = 2,
  Expert = 3,
  Master = 4,
  Legend = 5,
}

impl Tier {
  pub const ALL: [Tier; 5] = [Tier::Novice, Tier::Pro, Tier::Expert, Tier::Master, Tier::Legend];

  /// Daily mode is always LEGEND. Thresholds are inclusive upper bounds;
  /// any integer is accepted.
  pub fn resolve(level: i64, is_daily: bool) -> Tier {
    if is_daily {
      return Tier::Legend;
    }
    match level {
      i64::MIN..=20 => Tier::Novice,
      21..=100 => Tier::Pro,
      101..=300 => Tier::Expert,
      301..=600 => Tier::Master,
      _ => Tier::Legend,
    }
  }
}

/// Questions per batch.
pub fn question_count(level: i64, is_daily: bool) -> usize {
  if is_daily {
    return 1;
  }
  match level {
    i64::MIN..=19 => 1,
    20..=99 => 2,
    100..=399 => 3,
    _ => 4,
  }
}
