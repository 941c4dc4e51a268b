use crate::common::PubMedId;
use crate::config::ClientConfig;
use crate::error::{PubMedError, Result};
use crate::pubmed::models::PubMedArticle;
use crate::pubmed::parser::parse_articles_from_xml;
use crate::pubmed::responses::ESearchResult;
use crate::rate_limit::RateLimiter;
use reqwest::{Client, Response};
use tracing::{debug, instrument, warn};

/// Largest number of PMIDs a single search may return
pub const MAX_SEARCH_RESULTS: usize = 50;

/// Client for the PubMed ESearch and EFetch endpoints
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
    rate_limiter: RateLimiter,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a new PubMed client with default configuration
    ///
    /// Uses the NCBI default rate limit (3 requests/second) and a 5 second
    /// per-request timeout.
    ///
    /// ```
    /// use pubmed_affiliations::PubMedClient;
    ///
    /// let client = PubMedClient::new();
    /// ```
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new PubMed client with custom configuration
    ///
    /// ```
    /// use pubmed_affiliations::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_api_key("your_api_key_here")
    ///     .with_email("researcher@university.edu");
    ///
    /// let client = PubMedClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self::with_client_and_config(client, config)
    }

    /// Create a client around an existing `reqwest::Client`
    ///
    /// The HTTP client's own timeout and user agent are used as-is.
    pub fn with_client_and_config(client: Client, config: ClientConfig) -> Self {
        let rate_limiter = config.create_rate_limiter();
        let base_url = config.effective_base_url().to_string();

        Self {
            client,
            base_url,
            rate_limiter,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Search PubMed and return matching PMIDs in relevance order
    ///
    /// # Errors
    ///
    /// * `PubMedError::SearchLimitExceeded` - `limit` is 0 or above [`MAX_SEARCH_RESULTS`]
    /// * `PubMedError::RequestError` - the HTTP request failed
    /// * `PubMedError::ApiError` - non-success status, or an `ERROR` in the body
    /// * `PubMedError::JsonError` - the body is not an ESearch result
    ///
    /// ```no_run
    /// use pubmed_affiliations::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     let pmids = client.search_articles("cancer immunotherapy", 50).await?;
    ///     println!("Found {} articles", pmids.len());
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(query = %query, limit = limit))]
    pub async fn search_articles(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        if limit == 0 || limit > MAX_SEARCH_RESULTS {
            return Err(PubMedError::SearchLimitExceeded {
                requested: limit,
                maximum: MAX_SEARCH_RESULTS,
            });
        }

        if query.trim().is_empty() {
            debug!("Empty query provided, returning empty results");
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmax={}&retmode=json",
            self.base_url,
            urlencoding::encode(query),
            limit
        );

        debug!("Making ESearch API request");
        let response = self.make_request(&url).await?;
        let search_result: ESearchResult = response.json().await?;

        // NCBI reports some failures as 200 OK with an ERROR field
        if let Some(error_msg) = search_result.esearchresult.error {
            return Err(PubMedError::ApiError {
                status: 200,
                message: format!("NCBI ESearch API error: {}", error_msg),
            });
        }

        let pmids = search_result.esearchresult.idlist;
        debug!(
            results_found = pmids.len(),
            total_count = search_result.esearchresult.count.as_deref().unwrap_or("0"),
            "Search completed"
        );

        Ok(pmids)
    }

    /// Fetch the raw EFetch XML for a batch of PMIDs in one request
    ///
    /// An empty slice returns an empty string without touching the network.
    /// Every PMID is validated before the request is made.
    #[instrument(skip(self), fields(pmids_count = pmids.len()))]
    pub async fn fetch_xml(&self, pmids: &[&str]) -> Result<String> {
        if pmids.is_empty() {
            debug!("No PMIDs to fetch");
            return Ok(String::new());
        }

        let id_list = pmids
            .iter()
            .map(|pmid| PubMedId::parse(pmid).map(|id| id.to_string()))
            .collect::<Result<Vec<_>>>()?
            .join(",");

        let url = format!(
            "{}/efetch.fcgi?db=pubmed&id={}&retmode=xml",
            self.base_url, id_list
        );

        debug!("Making EFetch API request");
        let response = self.make_request(&url).await?;
        let xml_text = response.text().await?;

        debug!(bytes = xml_text.len(), "Fetched article details");
        Ok(xml_text)
    }

    /// Fetch and parse articles for a batch of PMIDs
    pub async fn fetch_articles(&self, pmids: &[&str]) -> Result<Vec<PubMedArticle>> {
        let xml = self.fetch_xml(pmids).await?;
        parse_articles_from_xml(&xml)
    }

    /// Send a rate-limited GET, appending the NCBI identification parameters
    async fn make_request(&self, url: &str) -> Result<Response> {
        let mut final_url = url.to_string();
        let api_params = self.config.build_api_params();

        if !api_params.is_empty() {
            let separator = if url.contains('?') { '&' } else { '?' };
            final_url.push(separator);

            let param_strings: Vec<String> = api_params
                .into_iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
                .collect();
            final_url.push_str(&param_strings.join("&"));
        }

        self.rate_limiter.acquire().await?;
        let response = self.client.get(&final_url).send().await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(PubMedError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response)
    }
}

impl Default for PubMedClient {
    fn default() -> Self {
        Self::new()
    }
}
