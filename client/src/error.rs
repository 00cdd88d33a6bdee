use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid server url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("server url must be an http:// or https:// address, got `{0}`")]
    UnsupportedUrl(String),
    /// The HTTP exchange could not be completed (refused, DNS, timeout, ...)
    #[error("request failed: {0}")]
    Transport(#[source] BoxError),
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    /// The response body was not a JSON object
    #[error("server response is not a JSON object: {0}")]
    Decode(#[source] serde_json::Error),
}

impl Error {
    pub fn transport(err: impl Into<BoxError>) -> Self {
        Error::Transport(err.into())
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// True when the request ran past the configured timeout
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Transport(err) => err
                .downcast_ref::<reqwest::Error>()
                .is_some_and(reqwest::Error::is_timeout),
            _ => false,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(Box::new(err))
    }
}
