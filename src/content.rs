use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;

/// Content type declared on every JSON payload.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A single-use JSON body payload.
///
/// Wraps an arbitrary byte source without reading it; the bytes are pulled
/// exactly once, by the HTTP transport, when the request carrying the stream
/// is sent. Not `Clone`: a consumed stream cannot back a retry, so a retry
/// needs a fresh stream.
#[derive(Debug)]
pub struct JsonStream {
    body: reqwest::Body,
}

impl JsonStream {
    /// Wrap an in-memory byte source (`String`, `&'static str`, `Vec<u8>`,
    /// `Bytes`, ...).
    pub fn new(body: impl Into<reqwest::Body>) -> Self {
        JsonStream { body: body.into() }
    }

    /// Wrap an async reader, streamed lazily chunk by chunk.
    ///
    /// Nothing is read here; read errors surface from the submission call
    /// that drains the body, not from construction.
    pub fn from_reader(reader: impl AsyncRead + Send + 'static) -> Self {
        JsonStream {
            body: reqwest::Body::wrap_stream(ReaderStream::new(reader)),
        }
    }

    /// Declared content type: always `application/json`.
    pub fn content_type(&self) -> &'static str {
        JSON_CONTENT_TYPE
    }

    pub(crate) fn into_body(self) -> reqwest::Body {
        self.body
    }
}
