use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::institution::{Category, Institution, Ownership};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open dataset at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: invalid {field} '{value}' ({reason})")]
    InvalidField {
        line: u64,
        field: &'static str,
        value: String,
        reason: String,
    },
}

/// One CSV row as it appears on disk. Every column except `name` may be absent.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    category: String,
    name: String,
    #[serde(default)]
    ownership: String,
    #[serde(default)]
    lga: String,
    #[serde(default)]
    courses: String,
    #[serde(default)]
    tuition_avg: String,
    #[serde(default)]
    accreditation_score: String,
    #[serde(default)]
    student_population: String,
}

/// Load institutions from a CSV file with a header row.
pub fn load_csv(path: &Path) -> Result<Vec<Institution>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let institutions = from_reader(file)?;
    tracing::info!(
        count = institutions.len(),
        path = %path.display(),
        "loaded institutions"
    );
    Ok(institutions)
}

/// Parse institutions from any CSV source.
///
/// Columns: `category, name, ownership, lga, courses, tuition_avg,
/// accreditation_score, student_population`. Courses are `|`-separated.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Institution>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut institutions = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let raw: RawRecord = record.deserialize(Some(&headers))?;
        let institution = build_institution(line, raw)?;
        tracing::debug!(
            line,
            name = institution.name(),
            category = %institution.category(),
            "parsed institution"
        );
        institutions.push(institution);
    }

    Ok(institutions)
}

fn build_institution(line: u64, raw: RawRecord) -> Result<Institution, LoadError> {
    let name = raw.name.trim();
    if name.is_empty() {
        return Err(LoadError::InvalidField {
            line,
            field: "name",
            value: raw.name.clone(),
            reason: "must not be blank".to_string(),
        });
    }

    let ownership: Ownership = raw.ownership.parse().map_err(|e| LoadError::InvalidField {
        line,
        field: "ownership",
        value: raw.ownership.clone(),
        reason: format!("{}; expected federal, state or private", e),
    })?;

    Ok(Institution::new(
        name,
        Category::from_record(&raw.category),
        ownership,
        raw.lga.trim(),
        split_courses(&raw.courses),
        parse_real(line, "tuition_avg", &raw.tuition_avg)?,
        parse_real(line, "accreditation_score", &raw.accreditation_score)?,
        parse_number(line, "student_population", &raw.student_population)?,
    ))
}

fn split_courses(field: &str) -> Vec<String> {
    field
        .split('|')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

/// Blank numeric fields default to zero.
fn parse_number<T>(line: u64, field: &'static str, value: &str) -> Result<T, LoadError>
where
    T: FromStr + Default,
    T::Err: std::fmt::Display,
{
    let value = value.trim();
    if value.is_empty() {
        return Ok(T::default());
    }
    value.parse().map_err(|e: T::Err| LoadError::InvalidField {
        line,
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Like [`parse_number`], but NaN and infinities are rejected.
fn parse_real(line: u64, field: &'static str, value: &str) -> Result<f64, LoadError> {
    let parsed: f64 = parse_number(line, field, value)?;
    if !parsed.is_finite() {
        return Err(LoadError::InvalidField {
            line,
            field,
            value: value.trim().to_string(),
            reason: "must be a finite number".to_string(),
        });
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str =
        "category,name,ownership,lga,courses,tuition_avg,accreditation_score,student_population\n";

    fn load(rows: &str) -> Result<Vec<Institution>, LoadError> {
        from_reader(format!("{}{}", HEADER, rows).as_bytes())
    }

    #[test]
    fn test_parse_full_record() {
        let rows = load("university,University of Lagos,federal,Yaba,Computer Science|Law|Medicine,150000,88,57000\n").unwrap();
        assert_eq!(rows.len(), 1);
        let inst = &rows[0];
        assert_eq!(inst.name(), "University of Lagos");
        assert_eq!(inst.category(), Category::University);
        assert_eq!(inst.ownership(), Ownership::Federal);
        assert_eq!(inst.lga(), "Yaba");
        assert_eq!(inst.courses(), &["Computer Science", "Law", "Medicine"]);
        assert_eq!(inst.tuition_avg(), 150_000.0);
        assert_eq!(inst.accreditation_score(), 88.0);
        assert_eq!(inst.student_population(), 57_000);
    }

    #[test]
    fn test_unknown_or_blank_category_defaults_to_university() {
        let rows = load(
            "monotechnic,A,state,Ikeja,,,,\n\
             ,B,state,Ikeja,,,,\n\
             College of Education,C,state,Ikeja,,,,\n",
        )
        .unwrap();
        assert_eq!(rows[0].category(), Category::University);
        assert_eq!(rows[1].category(), Category::University);
        assert_eq!(rows[2].category(), Category::College);
    }

    #[test]
    fn test_blank_numerics_default_to_zero() {
        let rows = load("polytechnic,YABATECH,Federal,Yaba,Engineering,,,\n").unwrap();
        assert_eq!(rows[0].tuition_avg(), 0.0);
        assert_eq!(rows[0].accreditation_score(), 0.0);
        assert_eq!(rows[0].student_population(), 0);
        assert_eq!(rows[0].ownership(), Ownership::Federal);
    }

    #[test]
    fn test_courses_drop_empty_entries() {
        let rows = load("college,AOCOED,state,Ojo, Education || Arts | ,1,2,3\n").unwrap();
        assert_eq!(rows[0].courses(), &["Education", "Arts"]);
    }

    #[test]
    fn test_quoted_fields() {
        let rows = load("university,\"Lagos State University, Ojo\",state,Ojo,\"Law|Medicine\",\"200000\",82,60000\n").unwrap();
        assert_eq!(rows[0].name(), "Lagos State University, Ojo");
        assert_eq!(rows[0].courses().len(), 2);
    }

    #[test]
    fn test_invalid_number_reports_line() {
        let err = load(
            "university,A,federal,Yaba,,100,90,1000\n\
             university,B,federal,Yaba,,lots,90,1000\n",
        )
        .unwrap_err();
        match err {
            LoadError::InvalidField { line, field, value, .. } => {
                assert_eq!(line, 3);
                assert_eq!(field, "tuition_avg");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_finite_numbers_rejected() {
        for value in ["NaN", "nan", "inf", "-infinity"] {
            let err = load(&format!("university,Odd,federal,Yaba,,100000,{},1000\n", value)).unwrap_err();
            match err {
                LoadError::InvalidField { field, reason, .. } => {
                    assert_eq!(field, "accreditation_score");
                    assert_eq!(reason, "must be a finite number");
                }
                other => panic!("unexpected error: {other}"),
            }
        }

        let err = load("university,Odd,federal,Yaba,,NaN,90,1000\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidField { field: "tuition_avg", line: 2, .. }));
    }

    #[test]
    fn test_negative_population_rejected() {
        let err = load("university,A,federal,Yaba,,100,90,-5\n").unwrap_err();
        assert!(err.to_string().contains("student_population"));
    }

    #[test]
    fn test_unknown_ownership_rejected() {
        let err = load("university,A,mission,Yaba,,100,90,5\n").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("ownership"));
        assert!(message.contains("mission"));
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = load("university,  ,federal,Yaba,,100,90,5\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidField { field: "name", .. }));
    }

    #[test]
    fn test_missing_optional_columns() {
        let csv = "name,ownership\nPan-Atlantic University,private\n";
        let rows = from_reader(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].category(), Category::University);
        assert!(rows[0].courses().is_empty());
        assert_eq!(rows[0].lga(), "");
    }

    #[test]
    fn test_header_only_yields_empty() {
        assert!(load("").unwrap().is_empty());
    }

    #[test]
    fn test_load_csv_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}university,UNILAG,federal,Yaba,Law,1,2,3", HEADER).unwrap();
        let rows = load_csv(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name(), "UNILAG");
    }

    #[test]
    fn test_load_csv_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_csv(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("nope.csv"));
    }
}
