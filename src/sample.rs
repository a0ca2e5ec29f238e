//! Fixed sample CSV files for first-time users of the Record Formatter.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;

use crate::record::RecordKind;

/// Sample food rows, one per common category.
pub const SAMPLE_FOODS: &str = "name,carbohydrates,protein,calories,category
Shrimp,0.2,24.0,99,Protein
Lamb Chop,0,25.0,294,Protein
Green Peas,14.0,5.4,81,Vegetables
Mushrooms,3.3,3.1,22,Vegetables
Couscous,23.0,3.8,112,Carbs
";

/// Sample drink rows covering both alcoholic flag states.
pub const SAMPLE_DRINKS: &str = "name,carbohydrates,protein,calories,category,is_alcoholic
Champagne,1.4,0.2,83,Wine,true
IPA Beer,5.0,0.7,60,Beer,true
Lemonade,12.0,0,48,Juice,false
Coconut Water,3.7,0.7,19,Water,false
Espresso,0,0.1,2,Coffee,false
";

/// The conventional file name for a kind's sample.
pub fn sample_file_name(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Food => "sample_foods.csv",
        RecordKind::Drink => "sample_drinks.csv",
    }
}

/// The fixed sample content for a kind.
pub fn sample_content(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Food => SAMPLE_FOODS,
        RecordKind::Drink => SAMPLE_DRINKS,
    }
}

/// Writes the sample file into `dir`, returning the path written.
///
/// Overwrites any existing file of the same name.
pub fn write_sample_in(dir: &Path, kind: RecordKind) -> io::Result<PathBuf> {
    let path = dir.join(sample_file_name(kind));
    fs::write(&path, sample_content(kind))?;
    info!("created sample file {}", path.display());
    Ok(path)
}

/// Writes the sample file into the current working directory.
pub fn write_sample(kind: RecordKind) -> io::Result<PathBuf> {
    write_sample_in(Path::new("."), kind)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::CsvImporter;

    #[test]
    fn sample_files_land_in_the_given_directory() {
        let dir = tempfile::tempdir().unwrap();

        let food = write_sample_in(dir.path(), RecordKind::Food).unwrap();
        let drink = write_sample_in(dir.path(), RecordKind::Drink).unwrap();

        assert_eq!(food.file_name().unwrap(), "sample_foods.csv");
        assert_eq!(drink.file_name().unwrap(), "sample_drinks.csv");
        assert!(food.exists());
        assert!(drink.exists());
    }

    #[test]
    fn food_sample_rounds_through_the_importer() {
        let importer = CsvImporter::swift(RecordKind::Food);
        let mut out = Vec::new();
        let count = importer
            .import_reader(SAMPLE_FOODS.as_bytes(), &mut out)
            .unwrap();

        assert_eq!(count, 5);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"Shrimp\""));
        assert!(text.contains("\"Couscous\""));
    }

    #[test]
    fn drink_sample_rounds_through_the_importer() {
        let importer = CsvImporter::swift(RecordKind::Drink);
        let mut out = Vec::new();
        let count = importer
            .import_reader(SAMPLE_DRINKS.as_bytes(), &mut out)
            .unwrap();

        assert_eq!(count, 5);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("isAlcoholic: true").count(), 2);
        assert_eq!(text.matches("isAlcoholic: false").count(), 3);
    }
}
