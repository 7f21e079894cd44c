//! Keyword classifier that maps a free-text industry name to a business category.
//!
//! Categories are checked in declared order and the first hit wins, so
//! "retail poultry shop" is Retail, not Poultry.

use crate::errors::AppError;
use crate::models::table::Table;

/// Column holding the free-text industry name after header normalization.
pub const INDUSTRY_TEXT_COLUMN: &str = "NIC_Name";
/// Derived column attached to the table once.
pub const CATEGORY_COLUMN: &str = "Business_Category";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Retail,
    Poultry,
    Agriculture,
    Manufacturing,
    Mining,
    Other,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Retail => "Retail",
            Category::Poultry => "Poultry",
            Category::Agriculture => "Agriculture",
            Category::Manufacturing => "Manufacturing",
            Category::Mining => "Mining",
            Category::Other => "Other",
        }
    }
}

/// Order matters: it is the tie-break when several categories match.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Retail, &["retail", "trade"]),
    (Category::Poultry, &["poultry", "chicken"]),
    (
        Category::Agriculture,
        &[
            "crop",
            "agriculture",
            "farming",
            "plant",
            "animal",
            "forestry",
            "aquaculture",
            "fish",
            "hunting",
        ],
    ),
    (
        Category::Manufacturing,
        &[
            "manufacturing",
            "fabrication",
            "production",
            "assembly",
            "processing",
        ],
    ),
    (
        Category::Mining,
        &[
            "mining",
            "quarrying",
            "extraction",
            "petroleum",
            "coal",
            "ore",
            "logging",
        ],
    ),
];

pub fn classify(text: &str) -> Category {
    let lowered = text.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}

/// Attaches the category column when it is absent. An existing column is left
/// untouched so a reload never reclassifies.
pub fn ensure_category_column(table: &mut Table) -> Result<(), AppError> {
    if table.has_column(CATEGORY_COLUMN) {
        return Ok(());
    }
    let source = table.column_index(INDUSTRY_TEXT_COLUMN).ok_or_else(|| {
        AppError::UnprocessableEntity(format!(
            "Could not classify industries: column '{INDUSTRY_TEXT_COLUMN}' is missing."
        ))
    })?;
    table.push_column(CATEGORY_COLUMN, |row| {
        let text = row.get(source).map(String::as_str).unwrap_or("");
        classify(text).as_str().to_string()
    });
    Ok(())
}
