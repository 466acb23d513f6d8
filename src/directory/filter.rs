use crate::institution::{Category, Institution, Ownership};

/// Optional narrowing predicates, combined with logical AND.
///
/// `None` (or a blank string for the text criteria) imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub category: Option<Category>,
    pub ownership: Option<Ownership>,
    /// Exact LGA match, case-insensitive
    pub lga: Option<String>,
    /// Substring of any offered course, case-insensitive
    pub course_keyword: Option<String>,
    /// Inclusive lower bound
    pub min_accreditation: Option<f64>,
    /// Inclusive upper bound
    pub max_tuition: Option<f64>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.ownership.is_none()
            && non_blank(&self.lga).is_none()
            && non_blank(&self.course_keyword).is_none()
            && self.min_accreditation.is_none()
            && self.max_tuition.is_none()
    }

    /// True when the institution satisfies every present criterion.
    pub fn matches(&self, inst: &Institution) -> bool {
        if let Some(category) = self.category {
            if inst.category() != category {
                return false;
            }
        }

        if let Some(ownership) = self.ownership {
            if inst.ownership() != ownership {
                return false;
            }
        }

        // Blank means unset; otherwise compared as given, untrimmed
        if let Some(lga) = self.lga.as_deref().filter(|s| !s.trim().is_empty()) {
            if inst.lga().to_lowercase() != lga.to_lowercase() {
                return false;
            }
        }

        if let Some(keyword) = non_blank(&self.course_keyword) {
            if !inst.offers_course(keyword) {
                return false;
            }
        }

        // NaN on either side fails the bound
        if let Some(min) = self.min_accreditation {
            let meets = inst.accreditation_score() >= min;
            if !meets {
                return false;
            }
        }

        if let Some(max) = self.max_tuition {
            let meets = inst.tuition_avg() <= max;
            if !meets {
                return false;
            }
        }

        true
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Institutions matching `criteria`, in their original order.
pub fn filter<'a, I>(institutions: I, criteria: &FilterCriteria) -> Vec<&'a Institution>
where
    I: IntoIterator<Item = &'a Institution>,
{
    institutions
        .into_iter()
        .filter(|inst| criteria.matches(inst))
        .collect()
}
