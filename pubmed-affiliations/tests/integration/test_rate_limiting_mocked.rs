//! Client-side rate limiting across consecutive requests

mod common;

use std::time::{Duration, Instant};

use pubmed_affiliations::{ClientConfig, PubMedClient, RateLimiter};
use tracing::info;
use tracing_test::traced_test;
use wiremock::MockServer;

use common::{MIXED_PMIDS, mount_esearch};

#[tokio::test]
#[traced_test]
async fn test_requests_are_spaced_by_rate_limit() {
    let mock_server = MockServer::start().await;
    mount_esearch(&mock_server, MIXED_PMIDS).await;

    // Capacity of 2 tokens: the first two requests go out at once, the
    // next two wait for refills at 2 req/s
    let config = ClientConfig::new()
        .with_base_url(mock_server.uri())
        .with_rate_limit(2.0);
    let client = PubMedClient::with_config(config);

    let start = Instant::now();
    for _ in 0..4 {
        let pmids = client.search_articles("cancer", 10).await.unwrap();
        assert_eq!(pmids.len(), 3);
    }
    let elapsed = start.elapsed();

    info!(elapsed_ms = elapsed.as_millis(), "Four rate-limited requests");
    assert!(
        elapsed >= Duration::from_millis(900),
        "Expected at least ~1s for 4 requests at 2 req/s, took {elapsed:?}"
    );
}

#[tokio::test]
#[traced_test]
async fn test_cloned_clients_share_limiter() {
    let limiter = RateLimiter::new(1.0);
    let clone = limiter.clone();

    limiter.acquire().await.unwrap();
    assert!(!clone.check_available().await);
}

#[tokio::test]
#[traced_test]
async fn test_api_key_raises_default_rate() {
    let without_key = ClientConfig::new();
    let with_key = ClientConfig::new().with_api_key("key");

    assert_eq!(without_key.create_rate_limiter().rate().await, 3.0);
    assert_eq!(with_key.create_rate_limiter().rate().await, 10.0);
}
