use serde::Deserialize;
use serde_json::Value;

/// The `responseHeader` block Solr puts on every JSON response.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseHeader {
    #[serde(default)]
    pub status: i32,
    #[serde(rename = "QTime", default)]
    pub qtime: i64,
}

/// Response to an update request (document submission, commit, delete).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateResponse {
    #[serde(rename = "responseHeader")]
    pub header: ResponseHeader,
}

impl UpdateResponse {
    /// Solr-level status code. 0 means success.
    pub fn status(&self) -> i32 {
        self.header.status
    }
}

/// Response to a `/select` query.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    #[serde(rename = "responseHeader")]
    pub header: ResponseHeader,
    #[serde(rename = "response")]
    pub results: DocumentList,
}

impl QueryResponse {
    pub fn status(&self) -> i32 {
        self.header.status
    }
}

/// One page of matching documents.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentList {
    #[serde(rename = "numFound")]
    pub num_found: u64,
    #[serde(default)]
    pub start: u64,
    pub docs: Vec<SolrDocument>,
}

/// A retrieved document, as a map of field name to stored value.
///
/// Schemaless Solr stores most fields as multi-valued, so a field that was
/// submitted as a scalar usually comes back as a one-element array.
/// [`first_value`](Self::first_value) and [`value_count`](Self::value_count)
/// smooth over that: they treat a scalar as a single value and an array as
/// its elements.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct SolrDocument {
    fields: serde_json::Map<String, Value>,
}

impl SolrDocument {
    pub fn contains_key(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// The stored value exactly as returned, arrays included.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// The first value of a field, unwrapping a one-or-more-element array.
    pub fn first_value(&self, name: &str) -> Option<&Value> {
        match self.fields.get(name) {
            Some(Value::Array(values)) => values.first(),
            other => other,
        }
    }

    /// How many values a field holds. 0 when absent, 1 for a scalar,
    /// the element count for an array.
    pub fn value_count(&self, name: &str) -> usize {
        match self.fields.get(name) {
            None => 0,
            Some(Value::Array(values)) => values.len(),
            Some(_) => 1,
        }
    }

    /// Field names in the order the server returned them.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
