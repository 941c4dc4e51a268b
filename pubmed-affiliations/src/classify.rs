//! Affiliation classification
//!
//! An affiliation belongs to a category when any of the category's keywords
//! appears in it as a whole word, ignoring case.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

const ACADEMIC_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "institute",
    "school",
    "department",
    "research center",
    "lab",
    "faculty",
    "hospital",
];

const INDUSTRY_KEYWORDS: &[&str] = &[
    "pharmaceutical",
    "biotech",
    "biosciences",
    "therapeutics",
    "pharma",
    "laboratories",
    "inc",
    "ltd",
    "corp",
    "gmbh",
    "sa",
    "llc",
];

/// Kind of author affiliation the report selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AffiliationCategory {
    /// Universities, hospitals, research institutes
    Academic,
    /// Pharmaceutical and biotech companies
    #[default]
    Industry,
}

impl AffiliationCategory {
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            AffiliationCategory::Academic => ACADEMIC_KEYWORDS,
            AffiliationCategory::Industry => INDUSTRY_KEYWORDS,
        }
    }

    /// Whether `affiliation` contains one of this category's keywords as a whole word
    ///
    /// ```
    /// use pubmed_affiliations::AffiliationCategory;
    ///
    /// assert!(AffiliationCategory::Academic.matches("Department of Oncology, Stanford University"));
    /// assert!(AffiliationCategory::Industry.matches("XYZ Pharmaceutical Inc."));
    /// assert!(!AffiliationCategory::Industry.matches("Independent Researcher"));
    /// ```
    pub fn matches(&self, affiliation: &str) -> bool {
        !affiliation.is_empty() && self.regex().is_match(affiliation)
    }

    /// Label used in the report's author column header
    pub fn author_label(&self) -> &'static str {
        match self {
            AffiliationCategory::Academic => "Academic",
            AffiliationCategory::Industry => "Non-Academic",
        }
    }

    fn regex(&self) -> &'static Regex {
        static ACADEMIC: OnceLock<Regex> = OnceLock::new();
        static INDUSTRY: OnceLock<Regex> = OnceLock::new();

        let cell = match self {
            AffiliationCategory::Academic => &ACADEMIC,
            AffiliationCategory::Industry => &INDUSTRY,
        };
        cell.get_or_init(|| build_keyword_regex(self.keywords()))
    }
}

impl fmt::Display for AffiliationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AffiliationCategory::Academic => write!(f, "academic"),
            AffiliationCategory::Industry => write!(f, "industry"),
        }
    }
}

fn build_keyword_regex(keywords: &[&str]) -> Regex {
    let alternation = keywords
        .iter()
        .map(|keyword| regex::escape(keyword))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).expect("keyword regex is valid")
}

/// Shorthand for [`AffiliationCategory::Academic`] matching
pub fn is_academic_affiliation(affiliation: &str) -> bool {
    AffiliationCategory::Academic.matches(affiliation)
}

/// Shorthand for [`AffiliationCategory::Industry`] matching
pub fn is_industry_affiliation(affiliation: &str) -> bool {
    AffiliationCategory::Industry.matches(affiliation)
}
