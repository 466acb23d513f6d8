use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::institution::Institution;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Composite rank score
    #[default]
    Rank,
    Tuition,
    Accreditation,
    /// Case-insensitive lexicographic
    Name,
    Population,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Rank,
        SortKey::Tuition,
        SortKey::Accreditation,
        SortKey::Name,
        SortKey::Population,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Rank => "rank",
            SortKey::Tuition => "tuition",
            SortKey::Accreditation => "accreditation",
            SortKey::Name => "name",
            SortKey::Population => "population",
        }
    }

    /// Unknown names fall back to [`SortKey::Rank`] instead of failing.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Ascending comparison of two institutions on this key.
    pub fn compare(self, a: &Institution, b: &Institution) -> Ordering {
        match self {
            SortKey::Rank => a.rank_score().total_cmp(&b.rank_score()),
            SortKey::Tuition => a.tuition_avg().total_cmp(&b.tuition_avg()),
            SortKey::Accreditation => a.accreditation_score().total_cmp(&b.accreditation_score()),
            SortKey::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
            SortKey::Population => a.student_population().cmp(&b.student_population()),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SortKey::ALL
            .into_iter()
            .find(|key| key.label() == wanted)
            .ok_or_else(|| format!("unknown sort key '{}'", s.trim()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stable sort: institutions with equal keys keep their input order in
/// both directions.
pub fn sort_institutions<'a>(
    mut institutions: Vec<&'a Institution>,
    key: SortKey,
    descending: bool,
) -> Vec<&'a Institution> {
    institutions.sort_by(|a, b| {
        if descending {
            key.compare(b, a)
        } else {
            key.compare(a, b)
        }
    });
    institutions
}

/// First `n` entries; `n <= 0` yields nothing, oversized `n` yields everything.
pub fn top_n<'a>(institutions: &[&'a Institution], n: i64) -> Vec<&'a Institution> {
    let take = usize::try_from(n.max(0)).unwrap_or(usize::MAX);
    institutions.iter().take(take).copied().collect()
}
