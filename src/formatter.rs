//! Declaration formatting for parsed records.
//!
//! The output schema is isolated behind [`DeclarationFormatter`] so other
//! target schemas can be supported without touching parsing or validation.

use crate::record::{NutritionRecord, RecordKind};

// ============================================================================
// DeclarationFormatter
// ============================================================================

/// Formats one parsed record as a single declaration line.
///
/// The returned string carries no trailing newline; callers own line
/// termination.
pub trait DeclarationFormatter {
    fn declaration(&self, record: &NutritionRecord) -> String;
}

// ============================================================================
// SwiftTemplateFormatter
// ============================================================================

/// Emits Swift literal entries for the app's `NutritionDatabase.swift` table.
///
/// Each line ends with a trailing comma so it can be pasted directly into the
/// template array:
///
/// ```text
/// FoodTemplate(name: "Shrimp", nutritionPer100g: NutritionInfo(carbohydrates: 0.2, protein: 24.0, calories: 99), category: "Protein"),
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SwiftTemplateFormatter;

impl DeclarationFormatter for SwiftTemplateFormatter {
    fn declaration(&self, record: &NutritionRecord) -> String {
        match record.kind {
            RecordKind::Food => format!(
                "FoodTemplate(name: \"{}\", nutritionPer100g: \
                 NutritionInfo(carbohydrates: {}, protein: {}, calories: {}), \
                 category: \"{}\"),",
                record.name,
                record.carbohydrates,
                record.protein,
                record.calories,
                record.category,
            ),
            RecordKind::Drink => format!(
                "DrinkTemplate(name: \"{}\", nutritionPer100ml: \
                 NutritionInfo(carbohydrates: {}, protein: {}, calories: {}), \
                 category: \"{}\", isAlcoholic: {}),",
                record.name,
                record.carbohydrates,
                record.protein,
                record.calories,
                record.category,
                record.is_alcoholic.unwrap_or(false),
            ),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
