use super::weights::{AFFORDABILITY_SCALE, SIZE_SCALE};
use crate::institution::Institution;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreComponent {
    pub label: String, // e.g. "Accreditation", "Affordability", "Size"
    pub value: f64,    // Normalized feature in [0, 1]
    pub weight: f64,   // Category weight applied to the feature
    pub contribution: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub components: Vec<ScoreComponent>,
    pub total: f64,
}

/// Normalized (accreditation, affordability, size) features, each in [0, 1].
/// A NaN feature counts as 0.
fn normalized_features(inst: &Institution) -> (f64, f64, f64) {
    let acc = unit_or_zero(inst.accreditation_score() / 100.0);
    // Negative tuition is treated as free so the denominator stays >= 1.
    let aff = unit_or_zero(1.0 / (1.0 + inst.tuition_avg().max(0.0) / AFFORDABILITY_SCALE));
    let size = unit_or_zero(inst.student_population() as f64 / SIZE_SCALE);
    (acc, aff, size)
}

fn unit_or_zero(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Composite desirability score in [0, 1], weighted by the institution's category.
pub fn rank_score(inst: &Institution) -> f64 {
    let w = inst.weights();
    let (acc, aff, size) = normalized_features(inst);
    combine(w.accreditation * acc, w.affordability * aff, w.size * size)
}

/// Same computation as [`rank_score`], itemized per component.
pub fn score_breakdown(inst: &Institution) -> ScoreBreakdown {
    let w = inst.weights();
    let (acc, aff, size) = normalized_features(inst);

    let components = vec![
        ScoreComponent {
            label: "Accreditation".to_string(),
            value: acc,
            weight: w.accreditation,
            contribution: w.accreditation * acc,
        },
        ScoreComponent {
            label: "Affordability".to_string(),
            value: aff,
            weight: w.affordability,
            contribution: w.affordability * aff,
        },
        ScoreComponent {
            label: "Size".to_string(),
            value: size,
            weight: w.size,
            contribution: w.size * size,
        },
    ];

    let total = combine(
        components[0].contribution,
        components[1].contribution,
        components[2].contribution,
    );

    ScoreBreakdown { components, total }
}

// Rounding in the weight sum can land a hair above 1.0
fn combine(acc: f64, aff: f64, size: f64) -> f64 {
    (acc + aff + size).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::institution::{Category, Ownership};

    fn inst(category: Category, tuition: f64, accreditation: f64, population: u64) -> Institution {
        Institution::new(
            "Test Institution",
            category,
            Ownership::State,
            "Ikeja",
            vec![],
            tuition,
            accreditation,
            population,
        )
    }

    #[test]
    fn test_perfect_university_scores_one() {
        let score = rank_score(&inst(Category::University, 0.0, 100.0, 30_000));
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_institution_scores_affordability_only() {
        // Zero tuition gives affordability 1.0; everything else is 0.
        let score = rank_score(&inst(Category::College, 0.0, 0.0, 0));
        assert!((score - 0.40).abs() < 1e-12);
    }

    #[test]
    fn test_polytechnic_mixed_features() {
        // acc 0.8, aff 1/(1+1) = 0.5, size 15k/30k = 0.5
        let score = rank_score(&inst(Category::Polytechnic, 1_000_000.0, 80.0, 15_000));
        let expected = 0.45 * 0.8 + 0.35 * 0.5 + 0.20 * 0.5;
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_accreditation_clamped() {
        let over = rank_score(&inst(Category::University, 0.0, 250.0, 0));
        let at_max = rank_score(&inst(Category::University, 0.0, 100.0, 0));
        assert_eq!(over, at_max);

        let under = rank_score(&inst(Category::University, 0.0, -40.0, 0));
        let at_min = rank_score(&inst(Category::University, 0.0, 0.0, 0));
        assert_eq!(under, at_min);
    }

    #[test]
    fn test_size_saturates() {
        let big = rank_score(&inst(Category::University, 0.0, 50.0, 120_000));
        let cap = rank_score(&inst(Category::University, 0.0, 50.0, 30_000));
        assert_eq!(big, cap);
    }

    #[test]
    fn test_affordability_decreases_with_tuition() {
        let mut previous = f64::MAX;
        for tuition in [0.0, 50_000.0, 500_000.0, 5_000_000.0, 1e12] {
            let score = rank_score(&inst(Category::Polytechnic, tuition, 60.0, 10_000));
            assert!(score < previous);
            previous = score;
        }
    }

    #[test]
    fn test_negative_tuition_does_not_exceed_free() {
        let negative = rank_score(&inst(Category::College, -1_000_000.0, 70.0, 5_000));
        let free = rank_score(&inst(Category::College, 0.0, 70.0, 5_000));
        assert_eq!(negative, free);
    }

    #[test]
    fn test_nan_features_contribute_nothing() {
        let nan_accreditation = inst(Category::University, 0.0, f64::NAN, 30_000);
        let score = rank_score(&nan_accreditation);
        assert!((score - 0.40).abs() < 1e-12);
        assert_eq!(score_breakdown(&nan_accreditation).components[0].value, 0.0);

        // f64::max ignores NaN, so NaN tuition scores as free
        let nan_tuition = inst(Category::College, f64::NAN, 100.0, 3_000);
        let free = inst(Category::College, 0.0, 100.0, 3_000);
        assert_eq!(rank_score(&nan_tuition), rank_score(&free));
    }

    #[test]
    fn test_infinite_features_stay_in_range() {
        let huge = inst(Category::Polytechnic, f64::INFINITY, f64::INFINITY, u64::MAX);
        let score = rank_score(&huge);
        assert!((0.0..=1.0).contains(&score));
        assert!((score - 0.65).abs() < 1e-12);
    }

    #[test]
    fn test_score_always_in_unit_interval() {
        let categories = [Category::University, Category::Polytechnic, Category::College];
        for category in categories {
            for tuition in [0.0, 1.0, 999_999.0, 1e9, -5.0, f64::NAN] {
                for accreditation in [-10.0, 0.0, 55.5, 100.0, 1_000.0, f64::NAN] {
                    for population in [0, 1, 29_999, 30_000, u64::MAX] {
                        let score = rank_score(&inst(category, tuition, accreditation, population));
                        assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
                    }
                }
            }
        }
    }

    #[test]
    fn test_breakdown_matches_rank_score() {
        let institution = inst(Category::Polytechnic, 320_000.0, 74.0, 18_500);
        let breakdown = score_breakdown(&institution);

        assert_eq!(breakdown.components.len(), 3);
        assert_eq!(breakdown.total, rank_score(&institution));
        assert_eq!(breakdown.components[0].label, "Accreditation");
        assert_eq!(breakdown.components[0].weight, 0.45);
        assert!((breakdown.components[0].value - 0.74).abs() < 1e-12);
        assert_eq!(breakdown.components[2].label, "Size");
    }
}
