use serde::Serialize;

/// Tuition (in naira) at which affordability drops to 0.5.
pub const AFFORDABILITY_SCALE: f64 = 1_000_000.0;

/// Student population at which the size component saturates.
pub const SIZE_SCALE: f64 = 30_000.0;

/// Per-category emphasis for (accreditation, affordability, size).
///
/// The three weights of every category row sum to 1.0, which keeps the
/// composite rank score inside [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankWeights {
    pub accreditation: f64,
    pub affordability: f64,
    pub size: f64,
}

impl RankWeights {
    pub const fn new(accreditation: f64, affordability: f64, size: f64) -> Self {
        Self {
            accreditation,
            affordability,
            size,
        }
    }

    pub fn total(&self) -> f64 {
        self.accreditation + self.affordability + self.size
    }
}
