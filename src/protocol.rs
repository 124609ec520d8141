//! Public protocol structs for the HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::Question;
use crate::tier::Tier;

/// Query string for `/game/start` and `/game/daily`.
#[derive(Debug, Deserialize)]
pub struct GameQuery {
    /// Player level; missing means level 1.
    pub level: Option<i64>,
    /// Replays the exact same batch when set.
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameOut {
    pub batch_id: String,
    pub level: i64,
    pub tier: Tier,
    pub daily: bool,
    pub questions: Vec<Question>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthOut {
    pub ok: bool,
    pub movies: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReloadOut {
    pub ok: bool,
    pub movies: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
