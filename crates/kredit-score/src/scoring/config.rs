use serde::{Deserialize, Serialize};

/// Base score, clamp range and per-referral bonus applied on top of the rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub base_score: i32,
    pub min_score: i32,
    pub max_score: i32,
    pub referral_bonus_points: i32,
}

impl ScoringConfig {
    pub const STANDARD: ScoringConfig = ScoringConfig {
        base_score: 600,
        min_score: 300,
        max_score: 900,
        referral_bonus_points: 20,
    };
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}
