use thiserror::Error;

/// Why a single topic could not be turned into an output file.
///
/// Every variant belongs to the same "fetch failed" category: the dump loop
/// reports it and moves on to the next topic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("page not found: {0}")]
    PageNotFound(String),

    #[error("\"{0}\" may refer to several pages (disambiguation)")]
    Disambiguation(String),

    #[error("HTTP {status} while fetching \"{title}\"")]
    Http { status: u16, title: String },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected API response: {0}")]
    MalformedResponse(String),

    #[error("could not write {path}: {reason}")]
    Write { path: String, reason: String },
}
