use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::scoring::{self, RankWeights};

/// Institution category. Fixed at construction and decides the ranking weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    University,
    Polytechnic,
    College,
}

impl Category {
    /// Weight triple used by the rank score. Each row sums to 1.0.
    pub const fn weights(self) -> RankWeights {
        match self {
            Category::University => RankWeights::new(0.60, 0.20, 0.20),
            Category::Polytechnic => RankWeights::new(0.45, 0.35, 0.20),
            Category::College => RankWeights::new(0.50, 0.40, 0.10),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::University => "university",
            Category::Polytechnic => "polytechnic",
            Category::College => "college",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::University => "University",
            Category::Polytechnic => "Polytechnic",
            Category::College => "College",
        }
    }

    /// Loader-side parsing: unrecognized or blank input falls back to university.
    pub fn from_record(s: &str) -> Self {
        s.parse().unwrap_or(Category::University)
    }
}

impl FromStr for Category {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "university" => Ok(Category::University),
            "polytechnic" => Ok(Category::Polytechnic),
            "college" | "college_of_education" | "college of education" => Ok(Category::College),
            other => Err(ParseLabelError::new("category", other)),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Administrative funding category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ownership {
    Federal,
    State,
    Private,
}

impl Ownership {
    pub fn label(self) -> &'static str {
        match self {
            Ownership::Federal => "federal",
            Ownership::State => "state",
            Ownership::Private => "private",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Ownership::Federal => "Federal",
            Ownership::State => "State",
            Ownership::Private => "Private",
        }
    }
}

impl FromStr for Ownership {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "federal" => Ok(Ownership::Federal),
            "state" => Ok(Ownership::State),
            "private" => Ok(Ownership::Private),
            other => Err(ParseLabelError::new("ownership", other)),
        }
    }
}

impl fmt::Display for Ownership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseLabelError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// One tertiary institution. Fields are set once in `new` and only exposed read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Institution {
    name: String,
    category: Category,
    ownership: Ownership,
    lga: String,
    courses: Vec<String>,
    tuition_avg: f64,
    accreditation_score: f64,
    student_population: u64,
}

impl Institution {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        category: Category,
        ownership: Ownership,
        lga: impl Into<String>,
        courses: Vec<String>,
        tuition_avg: f64,
        accreditation_score: f64,
        student_population: u64,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            ownership,
            lga: lga.into(),
            courses,
            tuition_avg,
            accreditation_score,
            student_population,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    /// Local Government Area
    pub fn lga(&self) -> &str {
        &self.lga
    }

    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    pub fn tuition_avg(&self) -> f64 {
        self.tuition_avg
    }

    pub fn accreditation_score(&self) -> f64 {
        self.accreditation_score
    }

    pub fn student_population(&self) -> u64 {
        self.student_population
    }

    pub fn weights(&self) -> RankWeights {
        self.category.weights()
    }

    pub fn rank_score(&self) -> f64 {
        scoring::rank_score(self)
    }

    /// Case-insensitive substring match against any offered course.
    /// A blank keyword matches every institution, even one with no courses.
    pub fn offers_course(&self, keyword: &str) -> bool {
        let kw = keyword.trim().to_lowercase();
        if kw.is_empty() {
            return true;
        }
        self.courses.iter().any(|c| c.to_lowercase().contains(&kw))
    }
}
