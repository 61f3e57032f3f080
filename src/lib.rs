//! # Syrup
//!
//! Streams custom JSON into [Apache Solr] — a typed client for the
//! `/update/json/docs` handler.
//!
//! Solr can ingest JSON that looks nothing like its own document model:
//! given a `split` path and `f=<field>:<json_path>` mappings, the server
//! fans one payload out into many flat documents. Syrup builds those
//! requests (body, parameters, canonical encoding order), submits them, and
//! parses the responses. All splitting and mapping happens server-side;
//! this crate never interprets the JSON it carries.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use syrup::{JsonUpdateRequest, SolrClient, SolrQuery};
//!
//! # async fn run() -> syrup::Result<()> {
//! let client = SolrClient::new("http://localhost:8983/solr", "exams");
//!
//! // One student record becomes one document per exam.
//! let mut request = JsonUpdateRequest::new(
//!     r#"{
//!         "first": "John",
//!         "last": "Doe",
//!         "grade": 8,
//!         "exams": [
//!             {"subject": "Maths", "test": "term1", "marks": 90},
//!             {"subject": "Biology", "test": "term1", "marks": 86}
//!         ]
//!     }"#,
//! );
//! request.set_split("/exams");
//! request.add_field_mapping("first", "/first");
//! request.add_field_mapping("last", "/last");
//! request.add_field_mapping("grade", "/grade");
//! request.add_field_mapping("subject", "/exams/subject");
//! request.add_field_mapping("test", "/exams/test");
//! request.add_field_mapping("marks", "/exams/marks");
//!
//! client.submit(request).await?;
//! client.commit().await?;
//!
//! let results = client.query(&SolrQuery::new("subject:Maths")).await?;
//! assert_eq!(results.results.num_found, 1);
//! # Ok(())
//! # }
//! ```
//!
//! Large payloads stream from disk without buffering via
//! [`JsonStream::from_reader`]; see [`content`] for details.
//!
//! [Apache Solr]: https://solr.apache.org/

pub mod client;
pub mod content;
pub mod error;
pub mod params;
pub mod query;
pub mod request;
pub mod response;

pub use client::SolrClient;
pub use content::{JsonStream, JSON_CONTENT_TYPE};
pub use error::{Result, SyrupError};
pub use params::SolrParams;
pub use query::SolrQuery;
pub use request::{JsonUpdateRequest, UpdateAction, JSON_DOCS_PATH};
pub use response::{DocumentList, QueryResponse, ResponseHeader, SolrDocument, UpdateResponse};
