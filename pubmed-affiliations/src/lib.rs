//! # PubMed Affiliations
//!
//! Find PubMed papers with authors from a given kind of institution.
//! A query runs through four stages:
//!
//! 1. ESearch returns up to 50 PMIDs for the query
//! 2. EFetch returns the article XML for those PMIDs in one request
//! 3. Each author's first affiliation is classified as academic or industry
//! 4. Articles with at least one matching author become report records
//!
//! ## Features
//!
//! - **Keyword classification**: whole-word, case-insensitive affiliation matching
//! - **Forgiving pipeline**: network failures yield an empty report, not an error
//! - **Reports**: CSV files with a header row, or tab-separated standard output
//! - **NCBI etiquette**: client-side rate limiting and `api_key`/`email`/`tool` parameters
//!
//! ## Quick Start
//!
//! ```no_run
//! use pubmed_affiliations::{AffiliationCategory, PaperFinder, PubMedClient, ReportSink};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let finder = PaperFinder::new(PubMedClient::new(), AffiliationCategory::Industry);
//!     let records = finder.find("cancer immunotherapy").await?;
//!
//!     ReportSink::Csv("papers.csv".into()).emit(&records, finder.category())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Classifying a single affiliation
//!
//! ```
//! use pubmed_affiliations::AffiliationCategory;
//!
//! assert!(AffiliationCategory::Industry.matches("Genentech, Inc., South San Francisco"));
//! assert!(!AffiliationCategory::Academic.matches("Genentech, Inc., South San Francisco"));
//! ```

pub mod classify;
pub mod common;
pub mod config;
pub mod error;
pub mod extract;
pub mod finder;
pub mod pubmed;
pub mod rate_limit;
pub mod report;

// Re-export main types for convenience
pub use classify::{AffiliationCategory, is_academic_affiliation, is_industry_affiliation};
pub use common::PubMedId;
pub use config::ClientConfig;
pub use error::{PubMedError, Result};
pub use extract::{
    ArticleRecord, NOT_AVAILABLE, UNKNOWN, corresponding_contact, extract_record, extract_records,
    extract_records_from_xml,
};
pub use finder::PaperFinder;
pub use pubmed::{
    Author, MAX_SEARCH_RESULTS, PubMedArticle, PubMedClient, parse_articles_from_xml,
};
pub use rate_limit::RateLimiter;
pub use report::{EMPTY_REPORT_NOTICE, ReportSink, report_header, write_csv, write_tsv};
