//! Turn parsed articles into report records
//!
//! A record keeps only the authors whose primary affiliation matches the
//! active [`AffiliationCategory`]; articles without any such author produce
//! no record at all.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::{debug, instrument};

use crate::classify::AffiliationCategory;
use crate::error::Result;
use crate::pubmed::models::{Author, PubMedArticle};
use crate::pubmed::parser::parse_articles_from_xml;

/// Placeholder for missing identifier, title, or year
pub const UNKNOWN: &str = "Unknown";

/// Placeholder when no corresponding-author contact could be derived
pub const NOT_AVAILABLE: &str = "N/A";

/// One report row: an article with its matching authors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub pmid: String,
    pub title: String,
    pub publication_date: String,
    /// Matching author names, aligned with `affiliations`
    pub authors: Vec<String>,
    /// Affiliation of each matching author
    pub affiliations: Vec<String>,
    /// Best-effort corresponding-author contact
    pub corresponding_contact: String,
}

impl ArticleRecord {
    /// The six report fields, multi-valued ones joined with `", "`
    pub fn to_row(&self) -> [String; 6] {
        [
            self.pmid.clone(),
            self.title.clone(),
            self.publication_date.clone(),
            self.authors.join(", "),
            self.affiliations.join(", "),
            self.corresponding_contact.clone(),
        ]
    }
}

/// Build records for every article with at least one author in `category`
pub fn extract_records(
    articles: &[PubMedArticle],
    category: AffiliationCategory,
) -> Vec<ArticleRecord> {
    articles
        .iter()
        .filter_map(|article| extract_record(article, category))
        .collect()
}

/// Parse EFetch XML and extract records in one step
///
/// Blank XML yields no records. Malformed XML is an error.
#[instrument(skip(xml), fields(xml_size = xml.len(), category = %category))]
pub fn extract_records_from_xml(
    xml: &str,
    category: AffiliationCategory,
) -> Result<Vec<ArticleRecord>> {
    let articles = parse_articles_from_xml(xml)?;
    let records = extract_records(&articles, category);

    debug!(
        articles = articles.len(),
        records = records.len(),
        "Extracted matching records"
    );
    Ok(records)
}

/// Record for a single article, `None` when no author matches
pub fn extract_record(
    article: &PubMedArticle,
    category: AffiliationCategory,
) -> Option<ArticleRecord> {
    let (authors, affiliations): (Vec<String>, Vec<String>) = article
        .authors
        .iter()
        .filter(|author| category.matches(author.primary_affiliation()))
        .map(|author| {
            (
                author.full_name.clone(),
                author.primary_affiliation().to_string(),
            )
        })
        .unzip();

    if authors.is_empty() {
        return None;
    }

    Some(ArticleRecord {
        pmid: article.pmid.clone().unwrap_or_else(|| UNKNOWN.to_string()),
        title: article.title.clone().unwrap_or_else(|| UNKNOWN.to_string()),
        publication_date: article
            .pub_year
            .clone()
            .unwrap_or_else(|| UNKNOWN.to_string()),
        authors,
        affiliations,
        corresponding_contact: corresponding_contact(&article.authors),
    })
}

/// Contact for the corresponding author
///
/// PubMed XML does not mark corresponding authors, so this takes the first
/// listed author when it is flagged valid and uses its affiliation: an e-mail
/// address found in it if there is one, the affiliation text otherwise.
pub fn corresponding_contact(authors: &[Author]) -> String {
    authors
        .first()
        .filter(|author| author.valid)
        .map(Author::primary_affiliation)
        .filter(|affiliation| !affiliation.is_empty())
        .map(|affiliation| {
            extract_email_from_text(affiliation).unwrap_or_else(|| affiliation.to_string())
        })
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// First e-mail address in free text, trailing punctuation removed
pub fn extract_email_from_text(text: &str) -> Option<String> {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}")
            .expect("email regex is valid")
    });

    re.find(text).map(|m| m.as_str().to_string())
}
