//! PubMed EFetch XML parser
//!
//! Turns the raw `PubmedArticleSet` document returned by EFetch into
//! [`PubMedArticle`] values. The pipeline is:
//!
//! - `preprocessing` strips inline formatting tags
//! - `xml_types` deserializes the document with `quick_xml::de`
//! - `xml_types` converts the XML mirror into public models

mod deserializers;
mod preprocessing;
mod xml_types;

use crate::error::{PubMedError, Result};
use crate::pubmed::models::PubMedArticle;
use preprocessing::strip_inline_html_tags;
use quick_xml::de::from_str;
use tracing::{debug, instrument};
use xml_types::PubmedArticleSet;

/// Parse every `<PubmedArticle>` in an EFetch XML response
///
/// Blank input (the detail retriever's "nothing fetched" value) yields no
/// articles. Malformed XML is an error.
///
/// ```
/// use pubmed_affiliations::pubmed::parse_articles_from_xml;
///
/// let xml = r#"<PubmedArticleSet>
///   <PubmedArticle>
///     <MedlineCitation>
///       <PMID>12345678</PMID>
///       <Article><ArticleTitle>Example Article</ArticleTitle></Article>
///     </MedlineCitation>
///   </PubmedArticle>
/// </PubmedArticleSet>"#;
///
/// let articles = parse_articles_from_xml(xml)?;
/// assert_eq!(articles[0].title.as_deref(), Some("Example Article"));
/// # Ok::<(), pubmed_affiliations::PubMedError>(())
/// ```
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_articles_from_xml(xml: &str) -> Result<Vec<PubMedArticle>> {
    if xml.trim().is_empty() {
        debug!("Empty EFetch response, nothing to parse");
        return Ok(Vec::new());
    }

    let cleaned_xml = strip_inline_html_tags(xml);

    let article_set: PubmedArticleSet = from_str(&cleaned_xml)
        .map_err(|e| PubMedError::XmlError(format!("Failed to deserialize XML: {}", e)))?;

    let articles: Vec<PubMedArticle> = article_set
        .articles
        .into_iter()
        .map(|article| article.into_article())
        .collect();

    debug!(articles = articles.len(), "Parsed EFetch response");
    Ok(articles)
}
