use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::{Result, SyrupError};
use crate::query::SolrQuery;
use crate::request::JsonUpdateRequest;
use crate::response::{QueryResponse, UpdateResponse};

const HTTP_TIMEOUT_SECS: u64 = 30;

/// Async client for one Solr collection.
///
/// Holds the server base URL (up to and including `/solr`), the collection
/// name and a pooled [`reqwest::Client`]. Cheap to clone; clones share the
/// connection pool.
///
/// ```rust,no_run
/// use syrup::{JsonUpdateRequest, SolrClient};
///
/// # async fn run() -> syrup::Result<()> {
/// let client = SolrClient::new("http://localhost:8983/solr", "exams");
/// let response = client.submit(JsonUpdateRequest::new(r#"{"first": "John"}"#)).await?;
/// assert_eq!(response.status(), 0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SolrClient {
    base_url: String,
    collection: String,
    http: reqwest::Client,
}

impl SolrClient {
    pub fn new(base_url: impl Into<String>, collection: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self::with_client(http, base_url, collection)
    }

    /// Like [`new`](Self::new) but with a caller-supplied HTTP client, for
    /// custom timeouts, proxies or TLS setup.
    pub fn with_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        collection: impl Into<String>,
    ) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        SolrClient {
            base_url,
            collection: collection.into(),
            http,
        }
    }

    /// Read `SOLR_URL` and `SOLR_COLLECTION` from the environment.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("SOLR_URL")
            .map_err(|_| SyrupError::Config("SOLR_URL is not set".to_string()))?;
        let collection = std::env::var("SOLR_COLLECTION")
            .map_err(|_| SyrupError::Config("SOLR_COLLECTION is not set".to_string()))?;
        Ok(Self::new(base_url, collection))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    fn handler_url(&self, handler: &str) -> String {
        format!("{}/{}{}", self.base_url, self.collection, handler)
    }

    /// Submit a JSON update. Consumes the request since its body stream can
    /// only be sent once.
    ///
    /// A 2xx answer parses into an [`UpdateResponse`]; anything else comes
    /// back as [`SyrupError::Server`] with Solr's error body verbatim.
    pub async fn submit(&self, request: JsonUpdateRequest) -> Result<UpdateResponse> {
        let url = self.handler_url(request.path());
        let (params, stream) = request.into_parts();
        let mut pairs: Vec<(&str, &str)> = params.pairs().collect();
        // wt=json goes last so the encoded order stays the request's own,
        // with the response format tacked on.
        pairs.push(("wt", "json"));

        tracing::debug!("POST {} ({} params)", url, pairs.len());

        let response = self
            .http
            .post(&url)
            .query(&pairs)
            .header(http::header::CONTENT_TYPE, stream.content_type())
            .body(stream.into_body())
            .send()
            .await?;
        parse(response).await
    }

    /// Hard-commit pending updates so they become searchable.
    pub async fn commit(&self) -> Result<UpdateResponse> {
        self.update_command(serde_json::json!({"commit": {}})).await
    }

    /// Delete every document matching `query`. Takes effect at the next
    /// commit.
    pub async fn delete_by_query(&self, query: &str) -> Result<UpdateResponse> {
        self.update_command(serde_json::json!({"delete": {"query": query}}))
            .await
    }

    /// Run a search against the collection's `/select` handler.
    pub async fn query(&self, query: &SolrQuery) -> Result<QueryResponse> {
        let url = self.handler_url("/select");
        let mut pairs: Vec<(&str, &str)> = query.params().pairs().collect();
        pairs.push(("wt", "json"));

        tracing::debug!("GET {} ({} params)", url, pairs.len());

        let response = self.http.get(&url).query(&pairs).send().await?;
        parse(response).await
    }

    /// POST a command document ({"commit": {}}, {"delete": ...}) to the
    /// collection's plain `/update` handler.
    async fn update_command(&self, command: serde_json::Value) -> Result<UpdateResponse> {
        let url = self.handler_url("/update");

        tracing::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .query(&[("wt", "json")])
            .json(&command)
            .send()
            .await?;
        parse(response).await
    }
}

async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SyrupError::Server { status, body });
    }
    Ok(response.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_trimmed() {
        let client = SolrClient::new("http://localhost:8983/solr///", "exams");

        assert_eq!(client.base_url(), "http://localhost:8983/solr");
        assert_eq!(
            client.handler_url("/update/json/docs"),
            "http://localhost:8983/solr/exams/update/json/docs"
        );
        assert_eq!(
            client.handler_url("/select"),
            "http://localhost:8983/solr/exams/select"
        );
    }

    #[test]
    fn test_with_client_accessors() {
        let client = SolrClient::with_client(
            reqwest::Client::new(),
            "http://solr.internal:8983/solr",
            "grades",
        );

        assert_eq!(client.base_url(), "http://solr.internal:8983/solr");
        assert_eq!(client.collection(), "grades");
    }

    // Single test for both the missing and the set case, so no parallel
    // test sees the variables mid-change.
    #[test]
    fn test_from_env() {
        std::env::remove_var("SOLR_URL");
        std::env::remove_var("SOLR_COLLECTION");
        let err = SolrClient::from_env().unwrap_err();
        assert!(matches!(err, SyrupError::Config(_)));

        std::env::set_var("SOLR_URL", "http://localhost:8983/solr/");
        std::env::set_var("SOLR_COLLECTION", "exams");
        let client = SolrClient::from_env().unwrap();
        assert_eq!(client.base_url(), "http://localhost:8983/solr");
        assert_eq!(client.collection(), "exams");

        std::env::remove_var("SOLR_URL");
        std::env::remove_var("SOLR_COLLECTION");
    }
}
