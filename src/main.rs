use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use lagos_directory::config;
use lagos_directory::output::{self, OutputFormat};
use lagos_directory::{Category, Directory, FilterCriteria, Ownership, Query};

const EXIT_DATA: i32 = 2;
const EXIT_CONFIG: i32 = 4;

const TIP: &str = "Tip: adjust filters, e.g., --category university --course Computer \
                   --max-tuition 400000 --sort-by accreditation --top 10";

#[derive(Parser, Debug)]
#[command(name = "lagos-directory")]
#[command(about = "Lagos Tertiary Institution Directory (Search & Rank)", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to CSV dataset (default: institutions_sample.csv)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Filter by category (university, polytechnic, college)
    #[arg(long)]
    category: Option<Category>,

    /// Filter by ownership (federal, state, private)
    #[arg(long)]
    ownership: Option<Ownership>,

    /// Filter by LGA (e.g., Ojo, Yaba, Ikeja)
    #[arg(long)]
    lga: Option<String>,

    /// Keyword in course name (e.g., 'Computer')
    #[arg(long)]
    course: Option<String>,

    /// Minimum accreditation score (0-100)
    #[arg(long = "min-accr", value_parser = parse_finite)]
    min_accr: Option<f64>,

    /// Maximum average tuition (naira)
    #[arg(long = "max-tuition", value_parser = parse_finite)]
    max_tuition: Option<f64>,

    /// Sort key: rank, tuition, accreditation, name, population (unknown keys sort by rank)
    #[arg(long = "sort-by")]
    sort_by: Option<String>,

    /// Sort ascending (default: descending)
    #[arg(long)]
    asc: bool,

    /// Show top N results (default: 5)
    #[arg(long, allow_negative_numbers = true)]
    top: Option<i64>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Path to config file (defaults to ~/.config/lagos-directory/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging and per-institution score breakdowns
    #[arg(short, long)]
    verbose: bool,
}

fn parse_finite(value: &str) -> Result<f64, String> {
    let parsed: f64 = value.parse().map_err(|e| format!("{}", e))?;
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err("must be a finite number".to_string())
    }
}

fn main() {
    let cli = Cli::parse();
    lagos_directory::logging::init_cli_logger(cli.verbose);
    let start_time = Instant::now();

    let config = match config::load_config(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let dataset = cli.csv.clone().unwrap_or_else(|| config.dataset());
    let directory = match Directory::from_csv(&dataset) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Failed to load dataset: {}", e);
            std::process::exit(EXIT_DATA);
        }
    };

    let query = Query {
        criteria: FilterCriteria {
            category: cli.category,
            ownership: cli.ownership,
            lga: cli.lga,
            course_keyword: cli.course,
            min_accreditation: cli.min_accr,
            max_tuition: cli.max_tuition,
        },
        sort_by: config::resolve_sort_key(cli.sort_by.as_deref().or(config.sort_by())),
        descending: !(cli.asc || config.ascending()),
        limit: cli.top.unwrap_or_else(|| config.top()),
    };
    tracing::debug!(?query, "running query");

    let results = directory.query(&query);
    let format = cli.format.unwrap_or_else(|| config.format());

    match format {
        OutputFormat::Table => {
            let use_colors = output::should_use_colors();
            println!("\n=== Lagos Tertiary Institution Directory — Results ===\n");
            println!("{}", output::format_table(&results, use_colors));
            if cli.verbose && !results.is_empty() {
                println!();
                for inst in &results {
                    println!("{}", output::format_detail(inst, use_colors));
                    println!();
                }
            }
            println!("\n{}\n", TIP);
        }
        OutputFormat::Tsv => {
            let tsv = output::format_tsv(&results);
            if !tsv.is_empty() {
                println!("{}", tsv);
            }
        }
        OutputFormat::Json => match output::format_json(&results) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize results: {}", e);
                std::process::exit(EXIT_DATA);
            }
        },
    }

    tracing::debug!(
        shown = results.len(),
        total = directory.len(),
        elapsed = ?start_time.elapsed(),
        "done"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_reject_non_finite() {
        assert_eq!(parse_finite("82.5"), Ok(82.5));
        assert!(parse_finite("NaN").is_err());
        assert!(parse_finite("inf").is_err());
        assert!(Cli::try_parse_from(["lagos-directory", "--min-accr", "nan"]).is_err());
        assert!(Cli::try_parse_from(["lagos-directory", "--max-tuition", "-inf"]).is_err());

        let cli = Cli::try_parse_from(["lagos-directory", "--max-tuition", "400000"]).unwrap();
        assert_eq!(cli.max_tuition, Some(400_000.0));
    }
}
