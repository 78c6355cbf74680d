use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid {name} selector {selector:?}: {reason}")]
    InvalidSelector {
        name: &'static str,
        selector: String,
        reason: String,
    },

    #[error("section {section}: header has no primary title element")]
    MissingTitle { section: usize },

    #[error("section {section}: primary title is blank")]
    EmptyTitle { section: usize },

    #[error("section {section:?}: team item {item} has no link")]
    MissingLink { section: String, item: usize },

    #[error("section {section:?}: team item {item} link has no href")]
    MissingHref { section: String, item: usize },

    #[error("section {section:?}: team item {item} link text is empty")]
    EmptyLeague { section: String, item: usize },
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
