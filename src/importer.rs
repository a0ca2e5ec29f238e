//! CSV import: reads tabular nutrition data and streams declaration lines.
//!
//! One pass, input order, fail-fast: the first bad row aborts the whole run.
//! Lines written before the failure stay written.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};

use crate::error::ImportError;
use crate::formatter::{DeclarationFormatter, SwiftTemplateFormatter};
use crate::record::{parse_flag, NutritionRecord, NutritionValue, RecordKind};

// ============================================================================
// CsvImporter
// ============================================================================

/// Converts a delimited tabular file into one declaration line per row.
///
/// The importer is parameterized over the output schema; see
/// [`DeclarationFormatter`]. Use [`CsvImporter::swift`] for the default
/// Swift data-table schema.
pub struct CsvImporter<F: DeclarationFormatter> {
    kind: RecordKind,
    formatter: F,
}

impl CsvImporter<SwiftTemplateFormatter> {
    /// Creates an importer emitting Swift template declarations.
    pub fn swift(kind: RecordKind) -> Self {
        Self::new(kind, SwiftTemplateFormatter)
    }
}

impl<F: DeclarationFormatter> CsvImporter<F> {
    /// Creates an importer with a custom output formatter.
    pub fn new(kind: RecordKind, formatter: F) -> Self {
        Self { kind, formatter }
    }

    /// The record kind this importer validates against.
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Imports a CSV file, writing declaration lines to `out`.
    ///
    /// Returns the number of rows converted. A missing file maps to
    /// [`ImportError::FileNotFound`]; any other failure aborts mid-stream.
    pub fn import_file<W: Write>(&self, path: &Path, out: &mut W) -> Result<usize, ImportError> {
        let file = File::open(path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                ImportError::FileNotFound(path.to_path_buf())
            } else {
                ImportError::Io(err)
            }
        })?;
        info!("processing {} as {}", path.display(), self.kind);
        self.import_reader(file, out)
    }

    /// Imports CSV data from any reader, writing declaration lines to `out`.
    ///
    /// The first line must be a header row naming the columns for this
    /// importer's [`RecordKind`].
    pub fn import_reader<R: Read, W: Write>(
        &self,
        input: R,
        out: &mut W,
    ) -> Result<usize, ImportError> {
        // Flexible so that a short row surfaces as a missing column rather
        // than an opaque length error.
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);
        let headers = reader.headers()?.clone();
        let columns = ColumnIndex::resolve(&headers, self.kind)?;

        let mut count = 0;
        for row in reader.records() {
            let row = row?;
            let record = columns.parse_row(&row, self.kind)?;
            writeln!(out, "{}", self.formatter.declaration(&record))?;
            count += 1;
        }
        debug!("emitted {count} declaration lines");
        Ok(count)
    }
}

// ============================================================================
// Column resolution
// ============================================================================

/// Header positions of the columns a kind requires.
struct ColumnIndex {
    name: usize,
    carbohydrates: usize,
    protein: usize,
    calories: usize,
    category: usize,
    /// Present only when the header declares it; absence means every drink
    /// row defaults to non-alcoholic.
    is_alcoholic: Option<usize>,
}

impl ColumnIndex {
    /// Resolves required columns against the header row.
    fn resolve(headers: &StringRecord, kind: RecordKind) -> Result<Self, ImportError> {
        Ok(Self {
            name: find_column(headers, "name", kind)?,
            carbohydrates: find_column(headers, "carbohydrates", kind)?,
            protein: find_column(headers, "protein", kind)?,
            calories: find_column(headers, "calories", kind)?,
            category: find_column(headers, "category", kind)?,
            is_alcoholic: match kind {
                RecordKind::Food => None,
                RecordKind::Drink => headers.iter().position(|h| h.trim() == "is_alcoholic"),
            },
        })
    }

    /// Parses one data row into a record.
    fn parse_row(&self, row: &StringRecord, kind: RecordKind) -> Result<NutritionRecord, ImportError> {
        let name = string_field(row, self.name, "name", kind)?;
        let carbohydrates = numeric_field(row, self.carbohydrates, "carbohydrates", kind)?;
        let protein = numeric_field(row, self.protein, "protein", kind)?;
        let calories = numeric_field(row, self.calories, "calories", kind)?;
        let category = string_field(row, self.category, "category", kind)?;

        Ok(match kind {
            RecordKind::Food => {
                NutritionRecord::food(name, carbohydrates, protein, calories, category)
            }
            RecordKind::Drink => {
                let flag = self
                    .is_alcoholic
                    .and_then(|idx| row.get(idx))
                    .map(parse_flag)
                    .unwrap_or(false);
                NutritionRecord::drink(name, carbohydrates, protein, calories, category, flag)
            }
        })
    }
}

fn find_column(headers: &StringRecord, column: &str, kind: RecordKind) -> Result<usize, ImportError> {
    headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| ImportError::MissingColumn {
            column: column.to_string(),
            kind,
        })
}

fn raw_field<'a>(
    row: &'a StringRecord,
    idx: usize,
    column: &str,
    kind: RecordKind,
) -> Result<&'a str, ImportError> {
    row.get(idx).ok_or_else(|| ImportError::MissingColumn {
        column: column.to_string(),
        kind,
    })
}

fn string_field(
    row: &StringRecord,
    idx: usize,
    column: &str,
    kind: RecordKind,
) -> Result<String, ImportError> {
    Ok(raw_field(row, idx, column, kind)?.trim().to_string())
}

fn numeric_field(
    row: &StringRecord,
    idx: usize,
    column: &str,
    kind: RecordKind,
) -> Result<NutritionValue, ImportError> {
    let raw = raw_field(row, idx, column, kind)?;
    NutritionValue::parse(raw).map_err(|_| ImportError::InvalidNumber {
        column: column.to_string(),
        value: raw.trim().to_string(),
    })
}

// ============================================================================
// Tests
// ============================================================================
