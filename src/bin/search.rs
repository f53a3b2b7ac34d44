// Shortcut Finder Search CLI Tool
// Command-line interface for natural-language shortcut lookup

use clap::Parser;
use shortcut_finder::normalize::is_informational_query;
use shortcut_finder::{SearchConfig, SearchOutcome, ShortcutRecord, ShortcutSearch};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Shortcut Search Tool - Find keyboard shortcuts by describing what you want
#[derive(Parser, Debug)]
#[command(name = "shortcut-search")]
#[command(about = "Find keyboard shortcuts with natural-language queries", long_about = None)]
#[command(version)]
struct Args {
    /// What you are looking for, e.g. "how do i add a cube" or "x"
    #[arg(value_name = "QUERY", num_args = 1.., required = true)]
    query: Vec<String>,

    /// Shortcut sheet to search instead of the built-in Blender sheet
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Maximum number of results to display
    #[arg(short, long, default_value = "10")]
    limit: usize,

    /// Show relevance scores
    #[arg(short, long)]
    scores: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Do not fall back to partial matches when nothing ranks
    #[arg(long)]
    no_fallback: bool,

    /// Show detailed information (debug logging)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let query = args.query.join(" ");

    let search = match &args.file {
        Some(path) => ShortcutSearch::from_path(path)?,
        None => ShortcutSearch::new()?,
    }
    .with_config(SearchConfig {
        partial_fallback: !args.no_fallback,
        ..SearchConfig::default()
    });

    if args.verbose {
        let (records, categories) = search.stats();
        eprintln!("Loaded {} shortcuts in {} categories", records, categories);
    }

    let outcome = search.search_outcome(&query);

    if args.json {
        let mut records = outcome.records().to_vec();
        records.truncate(args.limit);
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let records = match &outcome {
        SearchOutcome::NoQuery => {
            println!("Please enter a search query.");
            return Ok(());
        }
        SearchOutcome::NoMatches => {
            println!("No shortcuts found for \"{}\"", query);
            if is_informational_query(&query) {
                println!("Try naming the action directly, e.g. \"extrude\" or \"add cube\".");
            }
            return Ok(());
        }
        SearchOutcome::Partial(records) => {
            println!("Showing partial matches for your search.\n");
            records
        }
        SearchOutcome::Ranked(records) => records,
    };

    println!("Found {} matches:\n", records.len().min(args.limit));

    for (idx, record) in records.iter().take(args.limit).enumerate() {
        print_record(idx + 1, record);

        if args.scores {
            let score = search.explain(record, &query);
            println!(
                "      Score: {} (keywords {}/{})",
                score.total(),
                score.keywords_matched,
                score.keywords_total
            );
        }
        println!();
    }

    Ok(())
}

/// Install a stderr subscriber; `RUST_LOG` wins over the default level
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_record(position: usize, record: &ShortcutRecord) {
    println!("{}. {:<24} {}", position, record.keys, record.action);
    if !record.category.is_empty() {
        println!("      {}", category_label(&record.category));
    }
}

/// "Part of <category> shortcuts."
fn category_label(category: &str) -> String {
    format!("Part of {} shortcuts.", category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("View"), "Part of View shortcuts.");
    }

    #[test]
    fn test_args_parse_multi_word_query() {
        let args = Args::try_parse_from(["shortcut-search", "add", "a", "cube", "-l", "3"]).unwrap();
        assert_eq!(args.query.join(" "), "add a cube");
        assert_eq!(args.limit, 3);
        assert!(!args.json);
    }

    #[test]
    fn test_args_require_query() {
        assert!(Args::try_parse_from(["shortcut-search"]).is_err());
    }
}
