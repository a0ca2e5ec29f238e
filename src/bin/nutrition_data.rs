//! Command-line entry point for the Record Formatter.
//!
//! Converts a nutrition CSV into declaration lines on stdout, or writes a
//! sample CSV to start from. Exits 1 on any input error.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use nutrigen::{CsvImporter, ImportError, RecordKind};

const SEPARATOR: &str = "============================================================";

#[derive(Parser)]
#[command(
    name = "nutrition-data",
    about = "Batch-convert nutrition CSV files into data-table declarations",
    after_help = "CSV format:\n  \
        foods:  name, carbohydrates, protein, calories, category\n  \
        drinks: name, carbohydrates, protein, calories, category, is_alcoholic\n\n\
        Examples:\n  \
        nutrition-data foods.csv --type food\n  \
        nutrition-data drinks.csv --type drink\n  \
        nutrition-data --sample food"
)]
struct Cli {
    /// Path to the CSV file to convert
    csv_file: Option<PathBuf>,

    /// Kind of records the file contains
    #[arg(long = "type", value_enum, value_name = "KIND")]
    kind: Option<RecordKind>,

    /// Write a sample CSV for the given kind and exit
    #[arg(long, value_enum, value_name = "KIND")]
    sample: Option<RecordKind>,
}

fn main() -> ExitCode {
    let _logger = nutrigen::logging::init_logging();
    let cli = Cli::parse();

    if let Some(kind) = cli.sample {
        return match write_sample(kind) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("Error: {err}");
                ExitCode::FAILURE
            }
        };
    }

    match (&cli.csv_file, cli.kind) {
        (Some(path), Some(kind)) => match convert(path, kind) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                report(&err);
                ExitCode::FAILURE
            }
        },
        _ => {
            // Neither a conversion nor a sample request: show usage and fail.
            let _ = Cli::command().print_help();
            ExitCode::FAILURE
        }
    }
}

/// Runs the importer with the banner and final count around the stream.
fn convert(path: &Path, kind: RecordKind) -> Result<(), ImportError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "\nProcessing {} as {}...", path.display(), kind)?;
    writeln!(out, "\n{SEPARATOR}")?;
    writeln!(out, "Add the following to NutritionDatabase.swift:")?;
    writeln!(out, "{SEPARATOR}\n")?;

    let count = CsvImporter::swift(kind).import_file(path, &mut out)?;

    writeln!(out, "\n{SEPARATOR}")?;
    writeln!(out, "Processed {count} items successfully!")?;
    writeln!(out, "{SEPARATOR}")?;
    Ok(())
}

fn write_sample(kind: RecordKind) -> io::Result<()> {
    let path = nutrigen::write_sample(kind)?;
    println!("Created sample file: {}", path.display());
    println!("\nEdit this file and run:");
    println!("  nutrition-data {} --type {}", path.display(), kind);
    Ok(())
}

fn report(err: &ImportError) {
    eprintln!("Error: {err}");
    if let ImportError::MissingColumn { kind, .. } = err {
        eprintln!("\nRequired columns for {kind}:");
        eprintln!("  {}", kind.declared_columns().join(", "));
    }
}
