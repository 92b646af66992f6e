use std::env;
use std::path::{Path, PathBuf};

use crate::batch::grouping::group_by_day;
use crate::batch::runner::{run_season_batch, BatchOptions};
use crate::data::export::write_lineups_csv;
use crate::data::store::JsonFileStore;
use crate::data::validate::{load_records_file, validate_record_file};
use crate::data::xlsx::import_spreadsheet;
use crate::lineup::candidate::Candidate;
use crate::lineup::optimize::optimize_lineups;
use crate::lineup::solver::SearchBudget;
use crate::parallel::pool::WorkerPool;
use crate::server;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Optimize,
    Batch,
    Import,
    Validate,
    Export,
    Serve,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("optimize") => Some(Command::Optimize),
        Some("batch") => Some(Command::Batch),
        Some("import") => Some(Command::Import),
        Some("validate") => Some(Command::Validate),
        Some("export") => Some(Command::Export),
        Some("serve") => Some(Command::Serve),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Optimize) => handle_optimize(args),
        Some(Command::Batch) => handle_batch(args),
        Some(Command::Import) => handle_import(args),
        Some(Command::Validate) => handle_validate(args),
        Some(Command::Export) => handle_export(args),
        Some(Command::Serve) => handle_serve(),
        None => {
            eprintln!("usage: linesman <optimize|batch|import|validate|export|serve>");
            2
        }
    }
}

/// Optimize one roster-day: every record in the file competes for the
/// same day's slots.
fn handle_optimize(args: &[String]) -> i32 {
    let Some(path) = args.get(2) else {
        eprintln!("usage: linesman optimize <roster.json>");
        return 2;
    };

    let records = match load_records_file(Path::new(path)) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("optimize failed: {err}");
            return 1;
        }
    };
    let candidates: Vec<Candidate> = records.iter().map(Candidate::from_record).collect();
    let outcome = optimize_lineups(&candidates);

    match serde_json::to_string_pretty(&outcome) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize lineup result: {err}");
            1
        }
    }
}

fn handle_batch(args: &[String]) -> i32 {
    let Some(season) = args.get(2).filter(|arg| !arg.starts_with("--")) else {
        eprintln!("usage: linesman batch <season> [--store <dir>] [--weeks 1,2] [--dry-run] [--workers n]");
        return 2;
    };

    let mut store_dir = PathBuf::from("data");
    let mut options = BatchOptions::default();
    let mut rest = args[3..].iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--store" => match rest.next() {
                Some(dir) => store_dir = PathBuf::from(dir),
                None => {
                    eprintln!("--store requires a directory");
                    return 2;
                }
            },
            "--weeks" => match rest.next().map(|raw| parse_weeks(raw)) {
                Some(Some(weeks)) => options.weeks = Some(weeks),
                _ => {
                    eprintln!("--weeks requires a comma-separated list of week numbers");
                    return 2;
                }
            },
            "--dry-run" => options.dry_run = true,
            "--workers" => match rest.next().and_then(|raw| raw.parse::<usize>().ok()) {
                Some(workers) => options.workers = WorkerPool::with_workers(workers),
                None => {
                    eprintln!("--workers requires a number");
                    return 2;
                }
            },
            "--max-nodes" => match rest.next().and_then(|raw| raw.parse::<u64>().ok()) {
                Some(max_nodes) => options.budget = SearchBudget { max_nodes },
                None => {
                    eprintln!("--max-nodes requires a number");
                    return 2;
                }
            },
            other => {
                eprintln!("unknown batch option '{other}'");
                return 2;
            }
        }
    }

    let mut store = JsonFileStore::new(&store_dir);
    match run_season_batch(&mut store, season, &options) {
        Ok(summary) => match serde_json::to_string_pretty(&summary) {
            Ok(payload) => {
                println!("{payload}");
                0
            }
            Err(err) => {
                eprintln!("failed to serialize batch summary: {err}");
                1
            }
        },
        Err(err) => {
            eprintln!("batch failed: {err}");
            1
        }
    }
}

fn parse_weeks(raw: &str) -> Option<Vec<u32>> {
    raw.split(',')
        .map(|token| token.trim().parse::<u32>().ok())
        .collect()
}

fn handle_import(args: &[String]) -> i32 {
    let Some(source) = args.get(2) else {
        eprintln!("usage: linesman import <path-to-export.xlsx> [output.json]");
        return 2;
    };
    let output = args
        .get(3)
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(source).with_extension("json"));

    match import_spreadsheet(Path::new(source), &output) {
        Ok(report) => {
            println!(
                "import complete: rows={}, skipped={}, output='{}'",
                report.imported_rows, report.skipped_rows, report.output_path
            );
            0
        }
        Err(err) => {
            eprintln!("import failed: {err}");
            1
        }
    }
}

fn handle_validate(args: &[String]) -> i32 {
    let path = args.get(2).map(String::as_str).unwrap_or("data/records.json");

    match validate_record_file(Path::new(path)) {
        Ok(report) if report.has_errors() => {
            eprintln!("validation failed: {} issue(s)", report.diagnostics.len());
            for diagnostic in &report.diagnostics {
                eprintln!("- {diagnostic}");
            }
            1
        }
        Ok(report) => {
            for diagnostic in &report.diagnostics {
                eprintln!("- {diagnostic}");
            }
            println!("validation passed: {path}");
            0
        }
        Err(err) => {
            eprintln!("validation failed: {err}");
            1
        }
    }
}

/// Run the optimizer over every roster-day in a records file and write the
/// combined results as CSV.
fn handle_export(args: &[String]) -> i32 {
    let (Some(source), Some(output)) = (args.get(2), args.get(3)) else {
        eprintln!("usage: linesman export <records.json> <lineups.csv>");
        return 2;
    };

    let records = match load_records_file(Path::new(source)) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("export failed: {err}");
            return 1;
        }
    };
    let grouping = group_by_day(&records);

    let mut rows = Vec::new();
    for group in &grouping.groups {
        let candidates: Vec<Candidate> = group
            .record_indices
            .iter()
            .map(|&index| Candidate::from_record(&records[index]))
            .collect();
        let outcome = optimize_lineups(&candidates);
        for result in outcome.results {
            rows.push((group.key.date.to_string(), group.key.team.clone(), result));
        }
    }

    match write_lineups_csv(Path::new(output), &rows) {
        Ok(()) => {
            println!(
                "export complete: rows={}, groups={}, skipped={}",
                rows.len(),
                grouping.groups.len(),
                grouping.skipped
            );
            0
        }
        Err(err) => {
            eprintln!("export failed: {err}");
            1
        }
    }
}

fn handle_serve() -> i32 {
    let bind_addr = env::var("LINESMAN_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    match server::run_server(&bind_addr) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_commands_parse() {
        let args = |cmd: &str| vec!["linesman".to_string(), cmd.to_string()];
        assert_eq!(parse_command(&args("optimize")), Some(Command::Optimize));
        assert_eq!(parse_command(&args("batch")), Some(Command::Batch));
        assert_eq!(parse_command(&args("serve")), Some(Command::Serve));
        assert_eq!(parse_command(&args("nonsense")), None);
        assert_eq!(parse_command(&["linesman".to_string()]), None);
    }

    #[test]
    fn week_lists_parse_or_reject() {
        assert_eq!(parse_weeks("1,2,3"), Some(vec![1, 2, 3]));
        assert_eq!(parse_weeks(" 7 "), Some(vec![7]));
        assert_eq!(parse_weeks("1,x"), None);
    }
}
