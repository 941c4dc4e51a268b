//! Shared fixtures and helpers for the integration tests

#![allow(dead_code)]

use pubmed_affiliations::{ClientConfig, PubMedClient};
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// EFetch response with one industry-only article, one mixed article, and
/// one article with no classifiable affiliations
pub const MIXED_EFETCH_RESPONSE: &str = r#"<?xml version="1.0" ?>
<!DOCTYPE PubmedArticleSet PUBLIC "-//NLM//DTD PubMedArticle, 1st January 2025//EN" "https://dtd.nlm.nih.gov/ncbi/pubmed/out/pubmed_250101.dtd">
<PubmedArticleSet>
    <PubmedArticle>
        <MedlineCitation Status="MEDLINE" Owner="NLM">
            <PMID Version="1">38000001</PMID>
            <Article PubModel="Print">
                <Journal>
                    <JournalIssue CitedMedium="Internet">
                        <PubDate><Year>2023</Year><Month>Oct</Month></PubDate>
                    </JournalIssue>
                </Journal>
                <ArticleTitle>Bispecific antibodies in solid tumours.</ArticleTitle>
                <AuthorList CompleteYN="Y">
                    <Author ValidYN="Y">
                        <LastName>Lee</LastName>
                        <ForeName>Ana</ForeName>
                        <AffiliationInfo>
                            <Affiliation>Genentech, Inc., South San Francisco, CA, USA. lee.ana@gene.com.</Affiliation>
                        </AffiliationInfo>
                    </Author>
                    <Author ValidYN="Y">
                        <LastName>Chen</LastName>
                        <ForeName>Bo</ForeName>
                        <AffiliationInfo>
                            <Affiliation>Amgen Biosciences LLC, Thousand Oaks, CA, USA.</Affiliation>
                        </AffiliationInfo>
                    </Author>
                </AuthorList>
            </Article>
        </MedlineCitation>
    </PubmedArticle>
    <PubmedArticle>
        <MedlineCitation Status="MEDLINE" Owner="NLM">
            <PMID Version="1">38000002</PMID>
            <Article PubModel="Print">
                <Journal>
                    <JournalIssue CitedMedium="Internet">
                        <PubDate><MedlineDate>2022 Nov-Dec</MedlineDate></PubDate>
                    </JournalIssue>
                </Journal>
                <ArticleTitle>Checkpoint inhibitors and <i>KRAS</i> mutant tumours.</ArticleTitle>
                <AuthorList CompleteYN="Y">
                    <Author ValidYN="Y">
                        <LastName>Okafor</LastName>
                        <ForeName>Chidi</ForeName>
                        <AffiliationInfo>
                            <Affiliation>Department of Oncology, Stanford University, Stanford, CA, USA.</Affiliation>
                        </AffiliationInfo>
                    </Author>
                    <Author ValidYN="Y">
                        <LastName>Novak</LastName>
                        <ForeName>Petra</ForeName>
                        <AffiliationInfo>
                            <Affiliation>Novartis Pharma AG, Basel, Switzerland.</Affiliation>
                        </AffiliationInfo>
                    </Author>
                </AuthorList>
            </Article>
        </MedlineCitation>
    </PubmedArticle>
    <PubmedArticle>
        <MedlineCitation Status="MEDLINE" Owner="NLM">
            <PMID Version="1">38000003</PMID>
            <Article PubModel="Print">
                <ArticleTitle>Notes from an independent researcher.</ArticleTitle>
                <AuthorList CompleteYN="Y">
                    <Author ValidYN="Y">
                        <LastName>Moreau</LastName>
                        <ForeName>Luc</ForeName>
                        <AffiliationInfo>
                            <Affiliation>Independent Researcher, Lyon, France.</Affiliation>
                        </AffiliationInfo>
                    </Author>
                    <Author ValidYN="Y">
                        <LastName>Silva</LastName>
                        <ForeName>Rita</ForeName>
                    </Author>
                </AuthorList>
            </Article>
        </MedlineCitation>
    </PubmedArticle>
</PubmedArticleSet>"#;

/// PMIDs contained in [`MIXED_EFETCH_RESPONSE`], in document order
pub const MIXED_PMIDS: &[&str] = &["38000001", "38000002", "38000003"];

/// ESearch JSON body returning `pmids`
pub fn esearch_body(pmids: &[&str]) -> String {
    serde_json::json!({
        "header": {"type": "esearch", "version": "0.3"},
        "esearchresult": {
            "count": pmids.len().to_string(),
            "retmax": pmids.len().to_string(),
            "retstart": "0",
            "idlist": pmids,
            "translationset": [],
            "querytranslation": "test[All Fields]"
        }
    })
    .to_string()
}

/// Mount an ESearch mock answering with `pmids`
pub async fn mount_esearch(mock_server: &MockServer, pmids: &[&str]) {
    Mock::given(method("GET"))
        .and(path_regex(r"/esearch\.fcgi.*"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(esearch_body(pmids))
                .insert_header("content-type", "application/json"),
        )
        .mount(mock_server)
        .await;
}

/// Mount an EFetch mock answering with `body`
pub async fn mount_efetch(mock_server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path_regex(r"/efetch\.fcgi.*"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body.to_string())
                .insert_header("content-type", "application/xml"),
        )
        .mount(mock_server)
        .await;
}

/// Client pointing at a mock server
pub fn create_mock_client(mock_server: &MockServer) -> PubMedClient {
    let config = ClientConfig::new()
        .with_base_url(mock_server.uri())
        .with_rate_limit(100.0); // High rate limit for tests

    PubMedClient::with_config(config)
}

// Real API test configuration
#[cfg(feature = "integration-tests")]
pub const INTEGRATION_ENABLED: bool = true;

#[cfg(not(feature = "integration-tests"))]
pub const INTEGRATION_ENABLED: bool = false;

/// Real API tests need both the `integration-tests` feature and the
/// `PUBMED_REAL_API_TESTS` environment variable
pub fn should_run_real_api_tests() -> bool {
    INTEGRATION_ENABLED && std::env::var("PUBMED_REAL_API_TESTS").is_ok()
}

/// Client for real API tests, using `NCBI_API_KEY` when set
pub fn create_test_pubmed_client() -> PubMedClient {
    let mut config = ClientConfig::new()
        .with_email("test@example.com")
        .with_tool("pubmed-affiliations-integration-tests")
        .with_rate_limit(2.0);

    if let Ok(api_key) = std::env::var("NCBI_API_KEY") {
        config = config.with_api_key(api_key).with_rate_limit(8.0);
    }

    PubMedClient::with_config(config)
}

/// Broad queries that reliably return results
pub const TEST_SEARCH_QUERIES: &[&str] = &[
    "cancer immunotherapy",
    "monoclonal antibody[Title]",
    "CRISPR[Title]",
];
