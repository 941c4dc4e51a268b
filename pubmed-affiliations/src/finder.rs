//! Search, fetch, and extract in one pass
//!
//! Network failures in either stage are logged and treated as "no data", so
//! a flaky connection produces an empty report rather than an error. Only a
//! response that arrives but cannot be parsed is surfaced to the caller.

use tracing::{debug, instrument, warn};

use crate::classify::AffiliationCategory;
use crate::error::Result;
use crate::extract::{ArticleRecord, extract_records_from_xml};
use crate::pubmed::{MAX_SEARCH_RESULTS, PubMedClient};

/// Finds papers with at least one author in a given affiliation category
#[derive(Clone)]
pub struct PaperFinder {
    client: PubMedClient,
    category: AffiliationCategory,
    limit: usize,
}

impl PaperFinder {
    /// Finder selecting `category` authors, searching up to
    /// [`MAX_SEARCH_RESULTS`] PMIDs
    pub fn new(client: PubMedClient, category: AffiliationCategory) -> Self {
        Self {
            client,
            category,
            limit: MAX_SEARCH_RESULTS,
        }
    }

    /// Set the number of PMIDs to search for, clamped to `1..=MAX_SEARCH_RESULTS`
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.clamp(1, MAX_SEARCH_RESULTS);
        self
    }

    pub fn category(&self) -> AffiliationCategory {
        self.category
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// PMIDs matching `query`, or none if the search failed
    #[instrument(skip(self), fields(query = %query))]
    pub async fn fetch_pmids(&self, query: &str) -> Vec<String> {
        match self.client.search_articles(query, self.limit).await {
            Ok(pmids) => pmids,
            Err(e) => {
                warn!(error = %e, "Error fetching PubMed IDs");
                Vec::new()
            }
        }
    }

    /// EFetch XML for `pmids`, or an empty string if there is nothing to
    /// fetch or the request failed
    #[instrument(skip(self, pmids), fields(pmids_count = pmids.len()))]
    pub async fn fetch_details(&self, pmids: &[String]) -> String {
        if pmids.is_empty() {
            return String::new();
        }

        let ids: Vec<&str> = pmids.iter().map(String::as_str).collect();
        match self.client.fetch_xml(&ids).await {
            Ok(xml) => xml,
            Err(e) => {
                warn!(error = %e, "Error fetching paper details");
                String::new()
            }
        }
    }

    /// Run the whole pipeline for `query`
    ///
    /// # Errors
    ///
    /// Returns `PubMedError::XmlError` when the fetched XML is malformed.
    /// Search and fetch failures yield `Ok` with no records.
    ///
    /// ```no_run
    /// use pubmed_affiliations::{AffiliationCategory, PaperFinder, PubMedClient};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let finder = PaperFinder::new(PubMedClient::new(), AffiliationCategory::Industry);
    ///     let records = finder.find("cancer immunotherapy").await?;
    ///     for record in &records {
    ///         println!("{}: {}", record.pmid, record.authors.join(", "));
    ///     }
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(query = %query, category = %self.category))]
    pub async fn find(&self, query: &str) -> Result<Vec<ArticleRecord>> {
        let pmids = self.fetch_pmids(query).await;
        if pmids.is_empty() {
            debug!("No matching PubMed IDs");
            return Ok(Vec::new());
        }

        let xml = self.fetch_details(&pmids).await;
        let records = extract_records_from_xml(&xml, self.category)?;

        debug!(
            pmids = pmids.len(),
            records = records.len(),
            "Finished paper search"
        );
        Ok(records)
    }
}
