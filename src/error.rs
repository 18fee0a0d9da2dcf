//! Error Types
//!
//! Failures a handler can hit between a DOM event and the page update.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Broad failure class, used to decide how a failure is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never got a response
    NetworkUnreachable,
    /// The server answered with a non-success status
    ServerRejected,
    /// The response body was not what the endpoint promises
    MalformedResponse,
    /// The request was not sent because a precondition failed
    Precondition,
    /// The page does not have the nodes a handler needs
    Page,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("no CSRF token available")]
    MissingToken,

    #[error("network error: {0}")]
    Network(String),

    #[error("server rejected the request with status {status}")]
    Rejected { status: u16 },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("missing element: {0}")]
    MissingElement(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingToken => ErrorKind::Precondition,
            Error::Network(_) => ErrorKind::NetworkUnreachable,
            Error::Rejected { .. } => ErrorKind::ServerRejected,
            Error::Malformed(_) => ErrorKind::MalformedResponse,
            Error::MissingElement(_) | Error::Dom(_) => ErrorKind::Page,
        }
    }

    /// Short reason shown to the user
    pub fn reason(&self) -> &'static str {
        match self.kind() {
            ErrorKind::NetworkUnreachable => "the server could not be reached",
            ErrorKind::ServerRejected => "the server rejected it",
            ErrorKind::MalformedResponse => "the server sent an unexpected answer",
            ErrorKind::Precondition => "you are not signed in",
            ErrorKind::Page => "the page is out of date, reload it",
        }
    }

    pub fn missing(selector: impl Into<String>) -> Self {
        Error::MissingElement(selector.into())
    }
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Error::Dom(format!("{:?}", value))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(Error::MissingToken.kind(), ErrorKind::Precondition);
        assert_eq!(Error::Network("offline".into()).kind(), ErrorKind::NetworkUnreachable);
        assert_eq!(Error::Rejected { status: 403 }.kind(), ErrorKind::ServerRejected);
        assert_eq!(Error::Malformed("eof".into()).kind(), ErrorKind::MalformedResponse);
        assert_eq!(Error::missing("#like-3").kind(), ErrorKind::Page);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Error::Rejected { status: 500 }.to_string(),
            "server rejected the request with status 500"
        );
        assert_eq!(Error::missing("#follow").to_string(), "missing element: #follow");
    }
}
