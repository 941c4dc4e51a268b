//! Internal serde mirror of the EFetch `PubmedArticleSet` schema
//!
//! Only the elements the affiliation report reads are declared; everything
//! else in the document is skipped by the deserializer.

use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

use super::deserializers::{MixedText, deserialize_bool_yn};
use crate::pubmed::models::{Author, PubMedArticle, format_author_name};

#[derive(Debug, Deserialize)]
pub(super) struct PubmedArticleSet {
    #[serde(rename = "PubmedArticle", default)]
    pub articles: Vec<PubmedArticleXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PubmedArticleXml {
    #[serde(rename = "MedlineCitation")]
    pub medline_citation: MedlineCitation,
}

#[derive(Debug, Deserialize)]
pub(super) struct MedlineCitation {
    #[serde(rename = "PMID")]
    pub pmid: Option<MixedText>,
    #[serde(rename = "Article")]
    pub article: Option<ArticleXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ArticleXml {
    #[serde(rename = "Journal")]
    pub journal: Option<JournalXml>,
    #[serde(rename = "ArticleTitle")]
    pub title: Option<MixedText>,
    #[serde(rename = "AuthorList")]
    pub author_list: Option<AuthorListXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct JournalXml {
    #[serde(rename = "JournalIssue")]
    pub journal_issue: Option<JournalIssueXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct JournalIssueXml {
    #[serde(rename = "PubDate")]
    pub pub_date: Option<PubDateXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PubDateXml {
    #[serde(rename = "Year")]
    pub year: Option<MixedText>,
    #[serde(rename = "MedlineDate")]
    pub medline_date: Option<MixedText>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AuthorListXml {
    #[serde(rename = "Author", default)]
    pub authors: Vec<AuthorXml>,
}

// The DTD declares ValidYN with a default of "Y"
fn valid_by_default() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub(super) struct AuthorXml {
    #[serde(
        rename = "@ValidYN",
        default = "valid_by_default",
        deserialize_with = "deserialize_bool_yn"
    )]
    pub valid: bool,
    #[serde(rename = "LastName")]
    pub last_name: Option<MixedText>,
    #[serde(rename = "ForeName")]
    pub fore_name: Option<MixedText>,
    #[serde(rename = "CollectiveName")]
    pub collective_name: Option<MixedText>,
    #[serde(rename = "AffiliationInfo", default)]
    pub affiliation_info: Vec<AffiliationInfoXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AffiliationInfoXml {
    #[serde(rename = "Affiliation")]
    pub affiliation: Option<MixedText>,
}

impl PubmedArticleXml {
    pub fn into_article(self) -> PubMedArticle {
        let citation = self.medline_citation;
        let pmid = citation.pmid.and_then(MixedText::into_non_empty);

        let Some(article) = citation.article else {
            return PubMedArticle {
                pmid,
                title: None,
                pub_year: None,
                authors: Vec::new(),
            };
        };

        let pub_year = article
            .journal
            .and_then(|j| j.journal_issue)
            .and_then(|issue| issue.pub_date)
            .and_then(PubDateXml::into_year);

        let authors = article
            .author_list
            .map(|list| list.authors.into_iter().map(AuthorXml::into_author).collect())
            .unwrap_or_default();

        PubMedArticle {
            pmid,
            title: article.title.and_then(MixedText::into_non_empty),
            pub_year,
            authors,
        }
    }
}

impl PubDateXml {
    /// `Year` when present, else the first four-digit year inside `MedlineDate`
    fn into_year(self) -> Option<String> {
        static YEAR_REGEX: OnceLock<Regex> = OnceLock::new();

        if let Some(year) = self.year.and_then(MixedText::into_non_empty) {
            return Some(year);
        }

        let medline_date = self.medline_date.and_then(MixedText::into_non_empty)?;
        let re = YEAR_REGEX.get_or_init(|| Regex::new(r"\b\d{4}\b").expect("year regex is valid"));
        re.find(&medline_date).map(|m| m.as_str().to_string())
    }
}

impl AuthorXml {
    fn into_author(self) -> Author {
        let last_name = self.last_name.and_then(MixedText::into_non_empty);
        let fore_name = self.fore_name.and_then(MixedText::into_non_empty);
        let collective_name = self.collective_name.and_then(MixedText::into_non_empty);

        let full_name = format_author_name(
            fore_name.as_deref(),
            last_name.as_deref(),
            collective_name.as_deref(),
        );

        let affiliations = self
            .affiliation_info
            .into_iter()
            .filter_map(|info| info.affiliation.and_then(MixedText::into_non_empty))
            .collect();

        Author {
            last_name,
            fore_name,
            collective_name,
            full_name,
            affiliations,
            valid: self.valid,
        }
    }
}
