use crate::params::SolrParams;

/// A search against a collection's `/select` handler.
///
/// Thin builder over [`SolrParams`]; every method maps to one standard
/// query parameter and returns `self` for chaining.
///
/// ```rust
/// use syrup::SolrQuery;
///
/// let query = SolrQuery::new("*:*").rows(10).filter("grade:8");
/// assert_eq!(query.params().get("q"), Some("*:*"));
/// assert_eq!(query.params().get_all("fq"), &["grade:8"]);
/// ```
#[derive(Debug, Clone)]
pub struct SolrQuery {
    params: SolrParams,
}

impl SolrQuery {
    pub fn new(q: impl Into<String>) -> Self {
        let mut params = SolrParams::new();
        params.set("q", q.into());
        SolrQuery { params }
    }

    /// Maximum number of documents to return.
    pub fn rows(mut self, rows: usize) -> Self {
        self.params.set("rows", rows.to_string());
        self
    }

    /// Offset into the full result set, for paging.
    pub fn start(mut self, start: usize) -> Self {
        self.params.set("start", start.to_string());
        self
    }

    /// Add a filter query. Repeatable; filters accumulate.
    pub fn filter(mut self, fq: impl Into<String>) -> Self {
        self.params.add("fq", fq.into());
        self
    }

    /// Restrict which stored fields come back, e.g. `"id,first,last"`.
    pub fn fields(mut self, fl: impl Into<String>) -> Self {
        self.params.set("fl", fl.into());
        self
    }

    /// Sort clause, e.g. `"marks desc"`.
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.params.set("sort", sort.into());
        self
    }

    pub fn params(&self) -> &SolrParams {
        &self.params
    }
}
