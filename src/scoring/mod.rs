pub mod weights;
pub mod engine;

pub use weights::{RankWeights, AFFORDABILITY_SCALE, SIZE_SCALE};
pub use engine::{rank_score, score_breakdown, ScoreBreakdown, ScoreComponent};
