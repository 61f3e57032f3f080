use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyrupError {
    /// The request never produced a usable response: connection refused,
    /// timeout, TLS failure, or an unparseable response body.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Solr answered with a non-2xx status. The body is kept verbatim
    /// since Solr puts the actual cause there (unknown field, bad split
    /// path, malformed JSON, ...).
    #[error("Solr returned {status}: {body}")]
    Server { status: StatusCode, body: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SyrupError>;

impl SyrupError {
    /// Status of a [`SyrupError::Server`] rejection, if that is what this is.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SyrupError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}
