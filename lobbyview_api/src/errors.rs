//! Error types for the API client.

/// Errors that can occur when making API requests.
///
/// Every failed interaction with the service maps to exactly one variant so
/// callers can branch on the kind, e.g. treat [`Error::InvalidPageNumber`] as
/// "no results" rather than a hard failure.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// HTTP 401: the token is invalid, expired, or not entitled to the endpoint.
    #[error("Unauthorized (HTTP 401). Please check your API token and permissions")]
    Unauthorized,
    /// HTTP 429: the daily request quota for this token is exhausted.
    #[error("Rate limit exceeded (HTTP 429). The daily request quota has been used up")]
    TooManyRequests,
    /// HTTP 206: the server returned a partial result. The caller may retry.
    #[error("Partial content returned (HTTP 206)")]
    PartialContent,
    /// Any other non-200 status, with a snippet of the response body.
    #[error("Unexpected status code: {status}")]
    UnexpectedStatusCode { status: u16, body: String },
    /// The requested page lies beyond the pages available for the filters.
    #[error("Invalid page number: {current_page}, total pages: {total_pages}")]
    InvalidPageNumber { current_page: u32, total_pages: u32 },
    /// The request never produced a usable response.
    #[error("Request failed: {0}")]
    Request(#[from] RequestError),
}

impl Error {
    /// The HTTP status this error was classified from, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Unauthorized => Some(401),
            Error::TooManyRequests => Some(429),
            Error::PartialContent => Some(206),
            Error::UnexpectedStatusCode { status, .. } => Some(*status),
            Error::InvalidPageNumber { .. } | Error::Request(_) => None,
        }
    }

    /// True when the error means the filters matched nothing on the first page.
    pub fn is_no_results(&self) -> bool {
        matches!(
            self,
            Error::InvalidPageNumber {
                current_page: 1,
                ..
            }
        )
    }
}

/// Network-level and decoding failures, carried by [`Error::Request`].
#[derive(thiserror::Error, Debug)]
pub enum RequestError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("malformed JSON body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
