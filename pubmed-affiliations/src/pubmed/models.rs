use serde::{Deserialize, Serialize};

/// Author of a PubMed article
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Author {
    /// Family name (`LastName`)
    pub last_name: Option<String>,
    /// Given name (`ForeName`)
    pub fore_name: Option<String>,
    /// Group authorship (`CollectiveName`)
    pub collective_name: Option<String>,
    /// Display name: given and family name, skipping absent parts
    pub full_name: String,
    /// Affiliation strings in document order
    pub affiliations: Vec<String>,
    /// `ValidYN="Y"` on the author element
    pub valid: bool,
}

impl Author {
    /// First affiliation, or an empty string if the author has none
    pub fn primary_affiliation(&self) -> &str {
        self.affiliations.first().map(String::as_str).unwrap_or("")
    }
}

/// Build an author display name from its parts
///
/// Absent or blank parts are skipped; a collective name is used only when
/// both personal name parts are missing.
///
/// ```
/// use pubmed_affiliations::pubmed::format_author_name;
///
/// assert_eq!(format_author_name(Some("Jane"), Some("Doe"), None), "Jane Doe");
/// assert_eq!(format_author_name(None, Some("Doe"), None), "Doe");
/// assert_eq!(format_author_name(None, None, Some("COVID Study Group")), "COVID Study Group");
/// ```
pub fn format_author_name(
    fore_name: Option<&str>,
    last_name: Option<&str>,
    collective_name: Option<&str>,
) -> String {
    let personal = [fore_name, last_name]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if personal.is_empty() {
        collective_name
            .map(str::trim)
            .unwrap_or_default()
            .to_string()
    } else {
        personal
    }
}

/// A PubMed article as parsed from EFetch XML
///
/// Only the bibliographic fields the affiliation report needs are kept.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PubMedArticle {
    /// PubMed ID
    pub pmid: Option<String>,
    /// Article title
    pub title: Option<String>,
    /// Publication year from the journal issue date
    pub pub_year: Option<String>,
    /// Authors in list order
    pub authors: Vec<Author>,
}
