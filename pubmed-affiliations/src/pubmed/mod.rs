//! PubMed E-utilities access: search, fetch, and EFetch XML parsing

pub mod client;
pub mod models;
pub mod parser;
mod responses;

pub use client::{MAX_SEARCH_RESULTS, PubMedClient};
pub use models::{Author, PubMedArticle, format_author_name};
pub use parser::parse_articles_from_xml;
