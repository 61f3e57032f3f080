use syrup::SolrClient;

#[allow(dead_code)]
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Client pointed at a wiremock server, using the conventional `/solr`
/// base path so request paths look like real Solr URLs.
#[allow(dead_code)]
pub fn mock_client(server_uri: &str, collection: &str) -> SolrClient {
    SolrClient::new(format!("{}/solr", server_uri), collection)
}

/// Client for a real Solr instance, from `SOLR_URL` and `SOLR_COLLECTION`
/// (also read from a local `.env`). `None` when not configured, so live
/// tests can skip themselves on machines without Solr.
#[allow(dead_code)]
pub fn live_client() -> Option<SolrClient> {
    dotenv::dotenv().ok();
    match SolrClient::from_env() {
        Ok(client) => Some(client),
        Err(_) => {
            eprintln!("SOLR_URL / SOLR_COLLECTION not set, skipping live Solr test");
            None
        }
    }
}
