use crate::content::JsonStream;
use crate::params::SolrParams;
use http::Method;

/// Path of Solr's custom JSON update handler, relative to a collection.
pub const JSON_DOCS_PATH: &str = "/update/json/docs";

/// Update-time action carried as request parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateAction {
    /// Hard-commit once the update is processed (`commit=true`).
    Commit,
    /// Merge index segments after the update (`optimize=true`).
    Optimize,
}

/// An update request for Solr's custom JSON update handler.
///
/// Carries one JSON payload (a single object or an array of objects) plus
/// the string parameters that drive server-side splitting and field mapping.
/// The request performs no I/O and no interpretation of path expressions —
/// malformed JSON, unknown fields and unreachable split paths are all
/// reported by the server at submission time.
///
/// ```rust,no_run
/// use syrup::JsonUpdateRequest;
///
/// let mut request = JsonUpdateRequest::new(
///     r#"{"first": "John", "exams": [{"subject": "Maths", "marks": 90}]}"#,
/// );
/// request.set_split("/exams");
/// request.add_field_mapping("subject", "/exams/subject");
/// ```
#[derive(Debug)]
pub struct JsonUpdateRequest {
    params: SolrParams,
    stream: JsonStream,
}

impl JsonUpdateRequest {
    /// Build a request around an in-memory JSON body.
    ///
    /// `json.command=false` is set up front so the payload is treated as
    /// plain documents rather than a Solr command envelope — without it the
    /// split and mapping parameters would be ignored.
    pub fn new(body: impl Into<reqwest::Body>) -> Self {
        Self::from_stream(JsonStream::new(body))
    }

    /// Build a request around an existing [`JsonStream`], e.g. a lazy
    /// reader-backed stream from [`JsonStream::from_reader`].
    pub fn from_stream(stream: JsonStream) -> Self {
        let mut params = SolrParams::new();
        params.set("json.command", "false");
        JsonUpdateRequest { params, stream }
    }

    /// Map the JSON nodes at `json_path` onto the document field `field`.
    ///
    /// Appends `f=<field>:<json_path>`. `field` must be non-empty; the path
    /// syntax itself is the server's to validate, so nothing is checked
    /// here. Mappings encode in call order and duplicates are kept — neither
    /// changes server behavior, but both keep the encoded request
    /// deterministic.
    pub fn add_field_mapping(&mut self, field: &str, json_path: &str) {
        self.params.add("f", format!("{}:{}", field, json_path));
    }

    /// Split the payload into one document per node matched by `json_path`.
    ///
    /// `/` emits one document per element of a top-level array; a nested
    /// path like `/exams` fans each parent element out into one document per
    /// nested element. Overwrites any previous value — the last call wins.
    pub fn set_split(&mut self, json_path: &str) {
        self.params.set("split", json_path);
    }

    /// Ask the server to commit within `millis` of receiving the update.
    pub fn set_commit_within(&mut self, millis: u64) {
        self.params.set("commitWithin", millis.to_string());
    }

    /// Attach a commit or optimize to this update.
    pub fn set_action(&mut self, action: UpdateAction, wait_searcher: bool) {
        let name = match action {
            UpdateAction::Commit => "commit",
            UpdateAction::Optimize => "optimize",
        };
        self.params.set(name, "true");
        self.params
            .set("waitSearcher", if wait_searcher { "true" } else { "false" });
    }

    /// Handler path this request targets, relative to the collection.
    pub fn path(&self) -> &'static str {
        JSON_DOCS_PATH
    }

    /// HTTP method used on submission. Always POST.
    pub fn method(&self) -> Method {
        Method::POST
    }

    /// The request parameters in canonical encoding order.
    pub fn params(&self) -> &SolrParams {
        &self.params
    }

    /// Mutable parameter access, for anything this type has no setter for.
    pub fn params_mut(&mut self) -> &mut SolrParams {
        &mut self.params
    }

    /// The single body payload. Re-borrowing never duplicates or restarts
    /// the underlying source; it is drained once, at submission.
    pub fn content_stream(&self) -> &JsonStream {
        &self.stream
    }

    pub(crate) fn into_parts(self) -> (SolrParams, JsonStream) {
        (self.params, self.stream)
    }
}
