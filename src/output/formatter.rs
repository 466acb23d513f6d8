use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::institution::Institution;
use crate::scoring::score_breakdown;

pub const NO_MATCHES: &str = "No institutions matched your criteria.";

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Group digits in threes: 1234567 -> "1,234,567"
pub fn group_thousands(value: u64) -> String {
    group_digits(&value.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-naira amount with grouping: 150000.4 -> "₦150,000"
pub fn format_naira(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let magnitude = rounded.abs();
    if !magnitude.is_finite() {
        return format!("{}₦{}", sign, magnitude);
    }
    // Past u64 range an `as` cast would saturate
    let digits = if magnitude < u64::MAX as f64 {
        (magnitude as u64).to_string()
    } else {
        format!("{:.0}", magnitude)
    };
    format!("{}₦{}", sign, group_digits(&digits))
}

/// One-line description without index or score:
/// "{name} [{Category} | {Ownership} | {lga}] Accr 88/100 • Tuition ₦150,000 • Students 57,000"
pub fn format_institution_line(inst: &Institution) -> String {
    format!(
        "{} [{} | {} | {}] {}",
        inst.name(),
        inst.category().title(),
        inst.ownership().title(),
        inst.lga(),
        metrics(inst)
    )
}

fn metrics(inst: &Institution) -> String {
    format!(
        "Accr {:.0}/100 • Tuition {} • Students {}",
        inst.accreditation_score(),
        format_naira(inst.tuition_avg()),
        group_thousands(inst.student_population())
    )
}

/// Numbered plain-text report, one line per institution.
pub fn summarize(institutions: &[&Institution]) -> String {
    if institutions.is_empty() {
        return NO_MATCHES.to_string();
    }

    institutions
        .iter()
        .enumerate()
        .map(|(idx, inst)| {
            format!(
                "{:>2}. {} • RankScore {:.3}",
                idx + 1,
                format_institution_line(inst),
                inst.rank_score()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Summary layout for the terminal. With colors on, names are shortened so
/// each row fits the terminal width.
pub fn format_table(institutions: &[&Institution], use_colors: bool) -> String {
    if institutions.is_empty() {
        return NO_MATCHES.to_string();
    }

    let term_width = if use_colors { get_terminal_width() } else { None };

    institutions
        .iter()
        .enumerate()
        .map(|(idx, inst)| {
            let index_str = format!("{:>2}.", idx + 1);
            let tags = format!(
                "[{} | {} | {}]",
                inst.category().title(),
                inst.ownership().title(),
                inst.lga()
            );
            let metrics = metrics(inst);
            let score = format!("RankScore {:.3}", inst.rank_score());

            // Separators: ". " after index, two single spaces, " • " before score
            let fixed_width = index_str.chars().count()
                + tags.chars().count()
                + metrics.chars().count()
                + score.chars().count()
                + 6;
            let name = match term_width {
                Some(width) if width > fixed_width + 10 => truncate_name(inst.name(), width - fixed_width),
                Some(_) => truncate_name(inst.name(), 20),
                None => inst.name().to_string(),
            };

            if use_colors {
                format!(
                    "{} {} {} {} • {}",
                    index_str.dimmed(),
                    name.bold(),
                    tags.cyan(),
                    metrics,
                    score.yellow()
                )
            } else {
                format!("{} {} {} {} • {}", index_str, name, tags, metrics, score)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Multi-line view with the per-component score breakdown (verbose mode)
pub fn format_detail(inst: &Institution, use_colors: bool) -> String {
    let breakdown = score_breakdown(inst);
    let courses = if inst.courses().is_empty() {
        "(none)".to_string()
    } else {
        inst.courses().join(", ")
    };

    let mut lines = Vec::new();
    if use_colors {
        lines.push(format!("{}", inst.name().bold()));
    } else {
        lines.push(inst.name().to_string());
    }
    lines.push(format!("  Category: {}", inst.category().title()));
    lines.push(format!("  Ownership: {}", inst.ownership().title()));
    lines.push(format!("  LGA: {}", inst.lga()));
    lines.push(format!("  Courses: {}", courses));
    lines.push(format!("  Accreditation: {:.0}/100", inst.accreditation_score()));
    lines.push(format!("  Tuition: {}", format_naira(inst.tuition_avg())));
    lines.push(format!("  Students: {}", group_thousands(inst.student_population())));
    for component in &breakdown.components {
        lines.push(format!(
            "  {}: {:.3} x {:.2} = {:.3}",
            component.label, component.value, component.weight, component.contribution
        ));
    }
    let total = format!("{:.3}", breakdown.total);
    if use_colors {
        lines.push(format!("  RankScore: {}", total.yellow()));
    } else {
        lines.push(format!("  RankScore: {}", total));
    }
    lines.join("\n")
}

/// Format institutions as tab-separated values for scripting
/// Columns: rank_score, name, category, ownership, lga, accreditation, tuition, population
/// (no headers, no colors)
pub fn format_tsv(institutions: &[&Institution]) -> String {
    institutions
        .iter()
        .map(|inst| {
            format!(
                "{:.3}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                inst.rank_score(),
                inst.name(),
                inst.category(),
                inst.ownership(),
                inst.lga(),
                inst.accreditation_score(),
                inst.tuition_avg(),
                inst.student_population()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
struct RankedEntry<'a> {
    rank: usize,
    #[serde(flatten)]
    institution: &'a Institution,
    rank_score: f64,
}

/// Pretty JSON array, each entry carrying its 1-based rank and score.
pub fn format_json(institutions: &[&Institution]) -> serde_json::Result<String> {
    let entries: Vec<RankedEntry> = institutions
        .iter()
        .enumerate()
        .map(|(idx, inst)| RankedEntry {
            rank: idx + 1,
            institution: *inst,
            rank_score: inst.rank_score(),
        })
        .collect();
    serde_json::to_string_pretty(&entries)
}
